pub mod admin;
pub mod claim;
pub mod error;
pub mod index;
pub mod items;
pub mod login;
pub mod logout;
pub mod pages;
pub mod submit;
pub mod uploads;

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{error as web_error, Error, HttpResponse};
use sea_orm::DbErr;

/// Configures the web app by adding services from each web file.
///
/// @see https://docs.rs/actix-web/4/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Descending order. Order is important.
    // Route resolution will stop at the first match.
    index::configure(conf);
    items::configure(conf);
    submit::configure(conf);
    claim::configure(conf);
    uploads::configure(conf);
    login::configure(conf);
    logout::configure(conf);
    admin::configure(conf);
    pages::configure(conf);
}

/// Headers added to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::REFERRER_POLICY, "strict-origin-when-cross-origin"))
}

/// 303 to `location`, used after every successful or rejected form post.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, location))
        .finish()
}

/// Logs a store failure and hides it behind a generic 500.
pub(crate) fn db_error(context: &'static str) -> impl Fn(DbErr) -> Error {
    move |e| {
        log::error!("{}: {}", context, e);
        web_error::ErrorInternalServerError("Database error")
    }
}
