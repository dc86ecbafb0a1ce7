//! Item persistence: submission, public listing, admin review and deletion.

use crate::orm::items::{self, ItemStatus};
use crate::storage::{StorageBackend, StorageError};
use crate::upload::allowed_file;
use crate::validation::{optional_text, ValidationError};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    entity::*, query::*, ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr,
    FromQueryResult, Statement,
};

/// Raw text of a public item report, before trimming.
#[derive(Clone, Debug, Default)]
pub struct ItemSubmission {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location_found: String,
    pub date_found: String,
    /// Client-side name of the attached photo, if one was attached.
    pub photo_name: Option<String>,
}

impl ItemSubmission {
    /// Title must be non-blank and any photo must carry an allowed image extension.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if let Some(name) = &self.photo_name {
            if !allowed_file(name) {
                return Err(ValidationError::InvalidImageType);
            }
        }
        Ok(())
    }
}

/// Listing filters from the query string. Blank values are ignored.
#[derive(Clone, Debug, Default)]
pub struct ItemFilter {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl ItemFilter {
    pub fn new(q: &str, category: &str) -> Self {
        Self {
            q: optional_text(q),
            category: optional_text(category),
        }
    }
}

/// Home page counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, FromQueryResult)]
pub struct ItemStats {
    pub approved_count: i64,
    pub claimed_count: i64,
    pub pending_count: i64,
}

const STATS_SQL: &str = "
    SELECT
      COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0) AS approved_count,
      COALESCE(SUM(CASE WHEN status = 'claimed' THEN 1 ELSE 0 END), 0) AS claimed_count,
      COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending_count
    FROM items";

/// Inserts a validated submission as a `pending` item.
pub async fn create_item(
    db: &DatabaseConnection,
    submission: &ItemSubmission,
    photo_filename: Option<String>,
) -> Result<items::Model, DbErr> {
    let item = items::ActiveModel {
        title: Set(submission.title.trim().to_owned()),
        description: Set(optional_text(&submission.description)),
        category: Set(optional_text(&submission.category)),
        location_found: Set(optional_text(&submission.location_found)),
        date_found: Set(optional_text(&submission.date_found)),
        photo_filename: Set(photo_filename),
        status: Set(ItemStatus::Pending),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    item.insert(db).await
}

/// Approved items matching the filter, newest first.
///
/// `q` is a substring match over title, description, location and category;
/// `category` must match exactly.
pub async fn list_public(
    db: &DatabaseConnection,
    filter: &ItemFilter,
) -> Result<Vec<items::Model>, DbErr> {
    let mut query = items::Entity::find().filter(items::Column::Status.eq(ItemStatus::Approved));

    if let Some(q) = &filter.q {
        query = query.filter(
            Condition::any()
                .add(items::Column::Title.contains(q))
                .add(items::Column::Description.contains(q))
                .add(items::Column::LocationFound.contains(q))
                .add(items::Column::Category.contains(q)),
        );
    }
    if let Some(category) = &filter.category {
        query = query.filter(items::Column::Category.eq(category.as_str()));
    }

    query
        .order_by_desc(items::Column::CreatedAt)
        .order_by_desc(items::Column::Id)
        .all(db)
        .await
}

/// Every item regardless of status, newest first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<items::Model>, DbErr> {
    items::Entity::find()
        .order_by_desc(items::Column::CreatedAt)
        .order_by_desc(items::Column::Id)
        .all(db)
        .await
}

/// The item if it exists and is publicly visible.
pub async fn find_public(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Option<items::Model>, DbErr> {
    let item = items::Entity::find_by_id(item_id).one(db).await?;
    Ok(item.filter(|item| item.status.is_public()))
}

pub async fn count_by_status(db: &DatabaseConnection) -> Result<ItemStats, DbErr> {
    let stats = ItemStats::find_by_statement(Statement::from_string(
        db.get_database_backend(),
        STATS_SQL.to_owned(),
    ))
    .one(db)
    .await?;
    Ok(stats.unwrap_or_default())
}

/// Overwrites the status. Any status may move to any other; unknown ids are a no-op.
pub async fn set_status(
    db: &DatabaseConnection,
    item_id: i32,
    status: ItemStatus,
) -> Result<u64, DbErr> {
    let result = items::Entity::update_many()
        .col_expr(items::Column::Status, Expr::value(status.as_str()))
        .filter(items::Column::Id.eq(item_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Deletes an item and, best effort, its photo.
///
/// A photo that cannot be removed never blocks the row deletion. Claims go
/// with the row through the `ON DELETE CASCADE` foreign key.
pub async fn delete_item(
    db: &DatabaseConnection,
    storage: &dyn StorageBackend,
    item_id: i32,
) -> Result<u64, DbErr> {
    let item = items::Entity::find_by_id(item_id).one(db).await?;

    if let Some(filename) = item.and_then(|item| item.photo_filename) {
        match storage.delete_object(&filename).await {
            Ok(()) => {}
            Err(StorageError::NotFound(_)) => {
                log::debug!("delete_item: photo {} already gone", filename);
            }
            Err(e) => {
                log::debug!("delete_item: could not remove photo {}: {}", filename, e);
            }
        }
    }

    let result = items::Entity::delete_by_id(item_id).exec(db).await?;
    Ok(result.rows_affected)
}
