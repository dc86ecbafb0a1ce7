//! Claim persistence.
//!
//! Callers are responsible for checking the parent item is public before
//! calling [`create_claim`]; the store only enforces that the item exists.

use crate::orm::claims::{self, ClaimStatus};
use crate::orm::items;
use crate::validation::{optional_text, ValidationError};
use chrono::{NaiveDateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, ActiveValue::Set, DatabaseConnection, DbErr, FromQueryResult};

/// Raw text of a claim form, before trimming.
#[derive(Clone, Debug, Default)]
pub struct ClaimSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ClaimSubmission {
    /// Name and email are required; neither format is checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ValidationError::ClaimantRequired);
        }
        Ok(())
    }
}

/// Claim row joined with its item's title, for the dashboard.
#[derive(Clone, Debug, FromQueryResult)]
pub struct ClaimWithItem {
    pub id: i32,
    pub item_id: i32,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub status: ClaimStatus,
    pub created_at: NaiveDateTime,
    pub item_title: String,
}

/// Inserts a `new` claim against `item_id`.
pub async fn create_claim(
    db: &DatabaseConnection,
    item_id: i32,
    submission: &ClaimSubmission,
) -> Result<claims::Model, DbErr> {
    let claim = claims::ActiveModel {
        item_id: Set(item_id),
        name: Set(submission.name.trim().to_owned()),
        email: Set(submission.email.trim().to_owned()),
        message: Set(optional_text(&submission.message)),
        status: Set(ClaimStatus::New),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };
    claim.insert(db).await
}

/// Every claim with its item title, newest first.
pub async fn list_with_items(db: &DatabaseConnection) -> Result<Vec<ClaimWithItem>, DbErr> {
    claims::Entity::find()
        .column_as(items::Column::Title, "item_title")
        .join(JoinType::InnerJoin, claims::Relation::Item.def())
        .order_by_desc(claims::Column::CreatedAt)
        .order_by_desc(claims::Column::Id)
        .into_model::<ClaimWithItem>()
        .all(db)
        .await
}

pub async fn list_for_item(
    db: &DatabaseConnection,
    item_id: i32,
) -> Result<Vec<claims::Model>, DbErr> {
    claims::Entity::find()
        .filter(claims::Column::ItemId.eq(item_id))
        .order_by_desc(claims::Column::CreatedAt)
        .all(db)
        .await
}

/// Overwrites the status; unknown ids are a no-op.
pub async fn set_status(
    db: &DatabaseConnection,
    claim_id: i32,
    status: ClaimStatus,
) -> Result<u64, DbErr> {
    let result = claims::Entity::update_many()
        .col_expr(claims::Column::Status, Expr::value(status.as_str()))
        .filter(claims::Column::Id.eq(claim_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_email_required() {
        let claim = ClaimSubmission {
            name: "Dana".to_owned(),
            email: "  ".to_owned(),
            message: String::new(),
        };
        assert_eq!(claim.validate(), Err(ValidationError::ClaimantRequired));

        let claim = ClaimSubmission {
            name: String::new(),
            email: "dana@example.com".to_owned(),
            message: String::new(),
        };
        assert_eq!(claim.validate(), Err(ValidationError::ClaimantRequired));

        let claim = ClaimSubmission {
            name: "Dana".to_owned(),
            email: "not-an-email".to_owned(),
            message: String::new(),
        };
        assert_eq!(claim.validate(), Ok(()));
    }
}
