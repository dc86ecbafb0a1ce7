/// Public item browsing
///
/// Only approved items are listed; approved and claimed items have detail pages.
use super::db_error;
use crate::item::{self, ItemFilter};
use crate::orm::items;
use crate::session::{take_flashes, Flash};
use actix_session::Session;
use actix_web::{error, get, web, Error, HttpResponse};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_items).service(view_item);
}

#[derive(Template)]
#[template(path = "items.html")]
struct ItemsTemplate {
    flashes: Vec<Flash>,
    items: Vec<items::Model>,
    q: String,
    category: String,
}

#[derive(Template)]
#[template(path = "item_detail.html")]
struct ItemDetailTemplate {
    flashes: Vec<Flash>,
    item: items::Model,
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: String,
}

/// GET /items?q=&category= - Search approved items
#[get("/items")]
pub async fn view_items(
    db: web::Data<DatabaseConnection>,
    session: Session,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, Error> {
    let filter = ItemFilter::new(&query.q, &query.category);
    let items = item::list_public(db.get_ref(), &filter)
        .await
        .map_err(db_error("view_items"))?;

    Ok(ItemsTemplate {
        flashes: take_flashes(&session),
        items,
        q: filter.q.unwrap_or_default(),
        category: filter.category.unwrap_or_default(),
    }
    .to_response())
}

/// GET /item/{id} - Item detail
#[get("/item/{id}")]
pub async fn view_item(
    db: web::Data<DatabaseConnection>,
    session: Session,
    item_id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
    let item = item::find_public(db.get_ref(), item_id.into_inner())
        .await
        .map_err(db_error("view_item"))?
        .ok_or_else(|| error::ErrorNotFound("Item not found"))?;

    Ok(ItemDetailTemplate {
        flashes: take_flashes(&session),
        item,
    }
    .to_response())
}
