/// Serves stored item photos
use crate::storage::{StorageBackend, StorageError};
use crate::upload::is_safe_stored_name;
use actix_web::http::header;
use actix_web::{error, get, web, Error, HttpResponse};
use std::sync::Arc;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_upload);
}

/// GET /uploads/{filename} - Raw photo bytes
#[get("/uploads/{filename}")]
pub async fn view_upload(
    storage: web::Data<Arc<dyn StorageBackend>>,
    filename: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let filename = filename.into_inner();
    if !is_safe_stored_name(&filename) {
        log::warn!("view_upload: refusing unsafe name {:?}", filename);
        return Err(error::ErrorNotFound("File not found"));
    }

    let object = storage.get_object(&filename).await.map_err(|e| match e {
        StorageError::NotFound(_) => error::ErrorNotFound("File not found"),
        StorageError::Io(e) => {
            log::error!("view_upload: failed to read {}: {}", filename, e);
            error::ErrorInternalServerError("Failed to read file")
        }
    })?;

    log::debug!("view_upload: {} ({} bytes)", filename, object.content_length);
    Ok(HttpResponse::Ok()
        .content_type(object.content_type)
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(object.body))
}
