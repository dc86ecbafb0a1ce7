//! SeaORM entities
//!
//! Tables are created by [`crate::db::init_schema`], not by migrations.

pub mod claims;
pub mod items;
