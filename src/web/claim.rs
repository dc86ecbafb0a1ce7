/// Ownership claims against publicly visible items
use super::{db_error, see_other};
use crate::claim::{self, ClaimSubmission};
use crate::item;
use crate::orm::items;
use crate::session::{flash, take_flashes, Flash, FlashLevel};
use actix_session::Session;
use actix_web::{error, get, post, web, Error, HttpResponse};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_claim).service(post_claim);
}

#[derive(Template)]
#[template(path = "claim.html")]
struct ClaimTemplate {
    flashes: Vec<Flash>,
    item: items::Model,
}

#[derive(Deserialize)]
pub struct ClaimForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

async fn find_claimable(db: &DatabaseConnection, item_id: i32) -> Result<items::Model, Error> {
    item::find_public(db, item_id)
        .await
        .map_err(db_error("find_claimable"))?
        .ok_or_else(|| error::ErrorNotFound("Item not found"))
}

/// GET /claim/{id} - Claim form
#[get("/claim/{id}")]
pub async fn view_claim(
    db: web::Data<DatabaseConnection>,
    session: Session,
    item_id: web::Path<i32>,
) -> Result<HttpResponse, Error> {
    let item = find_claimable(db.get_ref(), item_id.into_inner()).await?;

    Ok(ClaimTemplate {
        flashes: take_flashes(&session),
        item,
    }
    .to_response())
}

/// POST /claim/{id} - File a claim
#[post("/claim/{id}")]
pub async fn post_claim(
    db: web::Data<DatabaseConnection>,
    session: Session,
    item_id: web::Path<i32>,
    form: web::Form<ClaimForm>,
) -> Result<HttpResponse, Error> {
    let item = find_claimable(db.get_ref(), item_id.into_inner()).await?;
    let form = form.into_inner();
    let submission = ClaimSubmission {
        name: form.name,
        email: form.email,
        message: form.message,
    };

    if let Err(e) = submission.validate() {
        log::debug!("post_claim: rejected claim on item #{}: {}", item.id, e);
        flash(&session, FlashLevel::Error, e.to_string())?;
        return Ok(see_other(&format!("/claim/{}", item.id)));
    }

    let claim = claim::create_claim(db.get_ref(), item.id, &submission)
        .await
        .map_err(db_error("post_claim"))?;

    log::info!("Claim #{} filed on item #{}", claim.id, item.id);
    flash(
        &session,
        FlashLevel::Success,
        "Your claim was submitted. An admin will contact you soon.",
    )?;
    Ok(see_other(&format!("/item/{}", item.id)))
}
