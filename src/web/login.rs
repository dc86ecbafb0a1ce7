use super::see_other;
use crate::app_config::AppConfig;
use crate::session::{flash, set_admin, take_flashes, Flash, FlashLevel};
use actix_session::Session;
use actix_web::{get, post, web, Error, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(post_login).service(view_login);
}

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct LoginTemplate {
    pub flashes: Vec<Flash>,
}

#[derive(Deserialize)]
pub struct FormData {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[post("/admin/login")]
pub async fn post_login(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<FormData>,
) -> Result<HttpResponse, Error> {
    if !config.admin_credentials_match(&form.username, &form.password) {
        log::warn!("login failure for {:?}", form.username);
        flash(&session, FlashLevel::Error, "Invalid credentials.")?;
        return Ok(LoginTemplate {
            flashes: take_flashes(&session),
        }
        .to_response());
    }

    set_admin(&session)?;
    log::info!("Admin {} logged in", form.username);
    flash(&session, FlashLevel::Success, "Logged in as admin.")?;
    Ok(see_other("/admin"))
}

#[get("/admin/login")]
pub async fn view_login(session: Session) -> impl Responder {
    LoginTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}
