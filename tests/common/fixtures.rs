//! Test fixtures for creating test data
#![allow(dead_code)]

use lostfound::claim::{self, ClaimSubmission};
use lostfound::item::{self, ItemSubmission};
use lostfound::orm::{claims, items};
use lostfound::orm::items::ItemStatus;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

/// Create an item through the store and move it to `status`.
pub async fn create_test_item(
    db: &DatabaseConnection,
    title: &str,
    status: ItemStatus,
) -> Result<items::Model, DbErr> {
    create_test_item_with(
        db,
        ItemSubmission {
            title: title.to_string(),
            ..Default::default()
        },
        None,
        status,
    )
    .await
}

/// Create an item from a full submission and move it to `status`.
pub async fn create_test_item_with(
    db: &DatabaseConnection,
    submission: ItemSubmission,
    photo_filename: Option<String>,
    status: ItemStatus,
) -> Result<items::Model, DbErr> {
    let created = item::create_item(db, &submission, photo_filename).await?;
    if status != ItemStatus::Pending {
        item::set_status(db, created.id, status).await?;
    }
    get_item(db, created.id)
        .await?
        .ok_or_else(|| DbErr::Custom("item vanished".to_string()))
}

pub async fn create_test_claim(
    db: &DatabaseConnection,
    item_id: i32,
    name: &str,
) -> Result<claims::Model, DbErr> {
    claim::create_claim(
        db,
        item_id,
        &ClaimSubmission {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "It has my initials on it".to_string(),
        },
    )
    .await
}

pub async fn get_item(db: &DatabaseConnection, item_id: i32) -> Result<Option<items::Model>, DbErr> {
    items::Entity::find_by_id(item_id).one(db).await
}

pub async fn get_claim(
    db: &DatabaseConnection,
    claim_id: i32,
) -> Result<Option<claims::Model>, DbErr> {
    claims::Entity::find_by_id(claim_id).one(db).await
}

pub async fn count_items(db: &DatabaseConnection) -> Result<usize, DbErr> {
    items::Entity::find().count(db).await
}

pub async fn count_claims(db: &DatabaseConnection) -> Result<usize, DbErr> {
    claims::Entity::find().count(db).await
}
