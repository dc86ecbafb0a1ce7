#![allow(dead_code)]

pub mod app;
pub mod database;
pub mod fixtures;

/// Builds the full application around a [`database::TestEnv`], wired the same
/// way as the binary.
macro_rules! init_app {
    ($env:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($env.db.clone()))
                .app_data(actix_web::web::Data::new($env.storage.clone()))
                .app_data(actix_web::web::Data::new($env.config.clone()))
                .wrap(lostfound::web::error::error_handlers())
                .wrap(lostfound::web::security_headers())
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        lostfound::session::derive_key(&$env.config.secret_key),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .configure(lostfound::web::configure),
        )
        .await
    };
}
