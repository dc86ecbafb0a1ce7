use super::db_error;
use crate::item::{self, ItemStats};
use crate::session::{take_flashes, Flash};
use actix_session::Session;
use actix_web::{get, web, Error, HttpResponse};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_index);
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flashes: Vec<Flash>,
    stats: ItemStats,
}

/// GET / - Landing page with item counts by status
#[get("/")]
pub async fn view_index(
    db: web::Data<DatabaseConnection>,
    session: Session,
) -> Result<HttpResponse, Error> {
    let stats = item::count_by_status(db.get_ref())
        .await
        .map_err(db_error("view_index"))?;

    Ok(IndexTemplate {
        flashes: take_flashes(&session),
        stats,
    }
    .to_response())
}
