use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::SameSite;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use env_logger::Env;
use lostfound::app_config::AppConfig;
use lostfound::db::init_db;
use lostfound::session::derive_key;
use lostfound::storage::{LocalStorage, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_lib_mods();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    });
    for setting in config.insecure_defaults() {
        log::warn!(
            "{} is still the shipped default. Set LF_{} before exposing this server.",
            setting,
            setting.to_uppercase()
        );
    }

    let db = init_db(&config.storage.database_url)
        .await
        .expect("Failed to initialize database");
    let storage: Arc<dyn StorageBackend> = Arc::new(
        LocalStorage::new(PathBuf::from(&config.storage.upload_dir))
            .expect("Failed to initialize upload directory"),
    );
    let secret_key = derive_key(&config.secret_key);
    let bind = (config.server.host.clone(), config.server.port);

    log::info!("Listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        // Order of middleware IS IMPORTANT and is in REVERSE EXECUTION ORDER.
        App::new()
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(storage.clone()))
            .app_data(Data::new(config.clone()))
            .wrap(lostfound::web::error::error_handlers())
            .wrap(lostfound::web::security_headers())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_same_site(SameSite::Lax)
                    .cookie_secure(false) // Allow HTTP for development
                    .session_lifecycle(PersistentSession::default())
                    .build(),
            )
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            .configure(lostfound::web::configure)
    })
    .bind(bind)?
    .run()
    .await
}

/// Initialize third party crates we rely on but don't have control over.
pub fn init_lib_mods() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
