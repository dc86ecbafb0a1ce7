/// Administration tools
///
/// Every handler checks the session's admin flag first and sends anyone
/// without it to the login page instead of returning an error.
use super::{db_error, see_other};
use crate::claim::{self, ClaimWithItem};
use crate::item;
use crate::orm::claims::ClaimStatus;
use crate::orm::items::{self, ItemStatus};
use crate::session::{flash, is_admin, take_flashes, Flash, FlashLevel};
use crate::storage::StorageBackend;
use actix_session::Session;
use actix_web::{error, get, post, web, Error, HttpResponse};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::{DatabaseConnection, Iterable};
use std::sync::Arc;

const LOGIN_PATH: &str = "/admin/login";
const DASHBOARD_PATH: &str = "/admin";

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_dashboard)
        .service(update_item_status)
        .service(delete_item)
        .service(update_claim_status);
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
struct DashboardTemplate {
    flashes: Vec<Flash>,
    items: Vec<items::Model>,
    claims: Vec<ClaimWithItem>,
    item_statuses: Vec<ItemStatus>,
    claim_statuses: Vec<ClaimStatus>,
}

/// GET /admin - All items and claims, newest first
#[get("/admin")]
pub async fn view_dashboard(
    db: web::Data<DatabaseConnection>,
    session: Session,
) -> Result<HttpResponse, Error> {
    if !is_admin(&session) {
        return Ok(see_other(LOGIN_PATH));
    }

    let db = db.get_ref();
    let items = item::list_all(db)
        .await
        .map_err(db_error("view_dashboard"))?;
    let claims = claim::list_with_items(db)
        .await
        .map_err(db_error("view_dashboard"))?;

    Ok(DashboardTemplate {
        flashes: take_flashes(&session),
        items,
        claims,
        item_statuses: ItemStatus::iter().collect(),
        claim_statuses: ClaimStatus::iter().collect(),
    }
    .to_response())
}

/// POST /admin/item/{id}/status/{new_status} - Move an item to any status
#[post("/admin/item/{id}/status/{new_status}")]
pub async fn update_item_status(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<(i32, String)>,
) -> Result<HttpResponse, Error> {
    if !is_admin(&session) {
        return Ok(see_other(LOGIN_PATH));
    }

    let (item_id, new_status) = path.into_inner();
    let status = ItemStatus::parse(&new_status).ok_or_else(|| {
        log::debug!("update_item_status: bad status {:?}", new_status);
        error::ErrorBadRequest("Unknown item status")
    })?;

    item::set_status(db.get_ref(), item_id, status)
        .await
        .map_err(db_error("update_item_status"))?;

    log::info!("Item {} status set to {}", item_id, status);
    flash(
        &session,
        FlashLevel::Success,
        format!("Item #{} status updated to {}.", item_id, status),
    )?;
    Ok(see_other(DASHBOARD_PATH))
}

/// POST /admin/item/{id}/delete - Remove an item, its photo and its claims
#[post("/admin/item/{id}/delete")]
pub async fn delete_item(
    db: web::Data<DatabaseConnection>,
    storage: web::Data<Arc<dyn StorageBackend>>,
    session: Session,
    item_id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
    if !is_admin(&session) {
        return Ok(see_other(LOGIN_PATH));
    }

    let item_id = item_id.into_inner();
    item::delete_item(db.get_ref(), storage.get_ref().as_ref(), item_id)
        .await
        .map_err(db_error("delete_item"))?;

    log::info!("Item {} deleted", item_id);
    flash(
        &session,
        FlashLevel::Success,
        format!("Item #{} deleted.", item_id),
    )?;
    Ok(see_other(DASHBOARD_PATH))
}

/// POST /admin/claim/{id}/status/{new_status} - Triage a claim
#[post("/admin/claim/{id}/status/{new_status}")]
pub async fn update_claim_status(
    db: web::Data<DatabaseConnection>,
    session: Session,
    path: web::Path<(i32, String)>,
) -> Result<HttpResponse, Error> {
    if !is_admin(&session) {
        return Ok(see_other(LOGIN_PATH));
    }

    let (claim_id, new_status) = path.into_inner();
    let status = ClaimStatus::parse(&new_status).ok_or_else(|| {
        log::debug!("update_claim_status: bad status {:?}", new_status);
        error::ErrorBadRequest("Unknown claim status")
    })?;

    claim::set_status(db.get_ref(), claim_id, status)
        .await
        .map_err(db_error("update_claim_status"))?;

    log::info!("Claim {} status set to {}", claim_id, status);
    flash(
        &session,
        FlashLevel::Success,
        format!("Claim #{} status updated to {}.", claim_id, status),
    )?;
    Ok(see_other(DASHBOARD_PATH))
}
