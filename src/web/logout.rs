use super::see_other;
use crate::session::{clear_admin, flash, is_admin, FlashLevel};
use actix_session::Session;
use actix_web::{get, Error, HttpResponse};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_logout);
}

#[get("/admin/logout")]
pub async fn view_logout(session: Session) -> Result<HttpResponse, Error> {
    if is_admin(&session) {
        log::info!("Admin logged out");
    } else {
        log::debug!("view_logout: no admin flag (already logged out?)");
    }

    clear_admin(&session);
    flash(&session, FlashLevel::Success, "Logged out.")?;
    Ok(see_other("/"))
}
