//! HTML bodies for error statuses.
//!
//! Handlers return plain `actix_web::Error`s; this middleware swaps the body
//! for a themed page while keeping the status code.

use crate::session::Flash;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{error, HttpResponse, Result};
use askama_actix::Template;

#[derive(Template)]
#[template(path = "error/400.html")]
struct BadRequestTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "error/404.html")]
struct NotFoundTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "error/500.html")]
struct InternalErrorTemplate {
    flashes: Vec<Flash>,
}

/// Middleware rendering the 400, 404 and 500 pages.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::BAD_REQUEST, render_400)
        .handler(StatusCode::NOT_FOUND, render_404)
        .handler(StatusCode::INTERNAL_SERVER_ERROR, render_500)
}

pub fn render_400<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    render(res, BadRequestTemplate { flashes: Vec::new() })
}

pub fn render_404<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    render(res, NotFoundTemplate { flashes: Vec::new() })
}

pub fn render_500<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    render(res, InternalErrorTemplate { flashes: Vec::new() })
}

fn render<B, T: Template>(res: ServiceResponse<B>, template: T) -> Result<ErrorHandlerResponse<B>> {
    let status = res.status();
    let body = template.render().map_err(|e| {
        log::error!("error page render failed: {}", e);
        error::ErrorInternalServerError("Template error")
    })?;

    let (req, _) = res.into_parts();
    let res = HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
