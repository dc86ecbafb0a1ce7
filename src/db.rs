//! Database connection and schema bootstrap
//!
//! There are no migrations: both tables are created with `IF NOT EXISTS` on
//! every start. SQLite connections opened through sqlx enforce foreign keys,
//! which is what removes claims when their item is deleted.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

const CREATE_ITEMS: &str = "
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        category TEXT,
        location_found TEXT,
        date_found TEXT,
        photo_filename TEXT,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );";

const CREATE_CLAIMS: &str = "
    CREATE TABLE IF NOT EXISTS claims (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        item_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT,
        status TEXT NOT NULL DEFAULT 'new',
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (item_id) REFERENCES items(id) ON DELETE CASCADE
    );";

/// Connects to the store and makes sure both tables exist.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    init_schema(&db).await?;
    log::info!("Database ready at {}", database_url);
    Ok(db)
}

/// Creates the `items` and `claims` tables if they are missing.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for sql in [CREATE_ITEMS, CREATE_CLAIMS] {
        db.execute(Statement::from_string(backend, sql.to_owned()))
            .await?;
    }
    Ok(())
}
