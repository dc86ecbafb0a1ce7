/// Static informational pages linked from the footer.
///
/// `/sources` and `/about` are separate pages with separate handlers.
use crate::session::{take_flashes, Flash};
use actix_session::Session;
use actix_web::{get, Responder};
use askama_actix::{Template, TemplateToResponse};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_faq)
        .service(view_instructions)
        .service(view_contact)
        .service(view_sources)
        .service(view_about);
}

#[derive(Template)]
#[template(path = "pages/faq.html")]
struct FaqTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/instructions.html")]
struct InstructionsTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
struct ContactTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/sources.html")]
struct SourcesTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
struct AboutTemplate {
    flashes: Vec<Flash>,
}

#[get("/faq")]
pub async fn view_faq(session: Session) -> impl Responder {
    FaqTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}

#[get("/instructions")]
pub async fn view_instructions(session: Session) -> impl Responder {
    InstructionsTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}

#[get("/contact")]
pub async fn view_contact(session: Session) -> impl Responder {
    ContactTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}

#[get("/sources")]
pub async fn view_sources(session: Session) -> impl Responder {
    SourcesTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}

#[get("/about")]
pub async fn view_about(session: Session) -> impl Responder {
    AboutTemplate {
        flashes: take_flashes(&session),
    }
    .to_response()
}
