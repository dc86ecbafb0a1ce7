/// Public found-item submission
use super::{db_error, see_other};
use crate::app_config::AppConfig;
use crate::item::{self, ItemSubmission};
use crate::session::{flash, take_flashes, Flash, FlashLevel};
use crate::storage::StorageBackend;
use crate::upload::stored_filename;
use actix_multipart::{Field, Multipart};
use actix_session::Session;
use actix_web::{error, get, post, web, Error, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use chrono::Utc;
use futures::{StreamExt, TryStreamExt};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_submit).service(post_submit);
}

#[derive(Template)]
#[template(path = "submit.html")]
struct SubmitTemplate {
    flashes: Vec<Flash>,
}

/// GET /submit - Report a found item
#[get("/submit")]
pub async fn view_submit(session: Session) -> impl Responder {
    SubmitTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}

/// POST /submit - Store the report as a pending item
#[post("/submit")]
pub async fn post_submit(
    db: web::Data<DatabaseConnection>,
    storage: web::Data<Arc<dyn StorageBackend>>,
    config: web::Data<AppConfig>,
    session: Session,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    let (submission, photo) = read_submission(payload, config.limits.max_upload_bytes).await?;

    if let Err(e) = submission.validate() {
        log::debug!("post_submit: rejected submission: {}", e);
        flash(&session, FlashLevel::Error, e.to_string())?;
        return Ok(see_other("/submit"));
    }

    let photo_filename = match (submission.photo_name.as_deref(), photo) {
        (Some(original), Some(data)) => {
            let filename = stored_filename(original, Utc::now());
            storage.put_object(data, &filename).await.map_err(|e| {
                log::error!("post_submit: failed to store photo {}: {}", filename, e);
                error::ErrorInternalServerError("Failed to store photo")
            })?;
            Some(filename)
        }
        _ => None,
    };

    let item = match item::create_item(db.get_ref(), &submission, photo_filename.clone()).await {
        Ok(item) => item,
        Err(e) => {
            // Don't leave an orphaned photo behind a failed insert.
            if let Some(filename) = &photo_filename {
                if let Err(e) = storage.delete_object(filename).await {
                    log::warn!("post_submit: orphaned photo {}: {}", filename, e);
                }
            }
            return Err(db_error("post_submit")(e));
        }
    };

    log::info!("Item #{} submitted for review", item.id);
    flash(
        &session,
        FlashLevel::Success,
        "Thank you for reporting — your submission is pending review.",
    )?;
    Ok(see_other("/"))
}

/// Drains the multipart stream into the text fields and optional photo bytes.
///
/// A photo part with an empty filename means no file was chosen. Unknown
/// fields are read and dropped. The whole body counts against `limit`.
async fn read_submission(
    mut payload: Multipart,
    limit: usize,
) -> Result<(ItemSubmission, Option<Vec<u8>>), Error> {
    let mut submission = ItemSubmission::default();
    let mut photo = None;
    let mut budget = limit;

    while let Some(mut field) = payload.try_next().await.map_err(|e| {
        log::error!("post_submit: multipart read error: {}", e);
        error::ErrorBadRequest("Error interpreting user input.")
    })? {
        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_owned();
        let filename = disposition.get_filename().map(str::to_owned);

        let data = read_field(&mut field, &mut budget).await?;

        match name.as_str() {
            "title" => submission.title = field_text(&data),
            "description" => submission.description = field_text(&data),
            "category" => submission.category = field_text(&data),
            "location_found" => submission.location_found = field_text(&data),
            "date_found" => submission.date_found = field_text(&data),
            "photo" => match filename {
                Some(filename) if !filename.is_empty() => {
                    submission.photo_name = Some(filename);
                    photo = Some(data);
                }
                _ => {}
            },
            _ => log::debug!("post_submit: ignoring field '{}'", name),
        }
    }

    Ok((submission, photo))
}

fn field_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

async fn read_field(field: &mut Field, budget: &mut usize) -> Result<Vec<u8>, Error> {
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            log::error!("post_submit: multipart read error: {}", e);
            error::ErrorBadRequest("Error interpreting user input.")
        })?;
        if bytes.len() > *budget {
            log::debug!("post_submit: upload exceeds size limit");
            return Err(error::ErrorPayloadTooLarge("Upload exceeds the size limit."));
        }
        *budget -= bytes.len();
        buf.extend_from_slice(&bytes);
    }
    Ok(buf)
}
