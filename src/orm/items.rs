//! SeaORM Entity for items table
//!
//! Found objects reported by the public. Only `approved` and `claimed` rows
//! are ever shown outside the admin dashboard.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveEnum;
use std::fmt;

/// Review state of a reported item
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[derive(Default)]
pub enum ItemStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "claimed")]
    Claimed,
}

impl ItemStatus {
    /// Parses the lowercase status name used in URLs and the database.
    pub fn parse(value: &str) -> Option<Self> {
        Self::try_from_value(&value.to_owned()).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Claimed => "claimed",
        }
    }

    /// Statuses visible to the public listing, detail and claim pages.
    pub fn public() -> [ItemStatus; 2] {
        [ItemStatus::Approved, ItemStatus::Claimed]
    }

    pub fn is_public(&self) -> bool {
        Self::public().contains(self)
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self, ItemStatus::Claimed)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location_found: Option<String>,
    /// Free text as typed by the reporter; never parsed.
    #[sea_orm(column_type = "Text", nullable)]
    pub date_found: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub photo_filename: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::claims::Entity")]
    Claims,
}

impl Related<super::claims::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Claims.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
