//! Lost-and-found item tracker.
//!
//! The public reports found items and files claims; an administrator reviews
//! reports, triages claims and deletes items.

pub mod app_config;
pub mod claim;
pub mod constants;
pub mod db;
pub mod item;
pub mod orm;
pub mod session;
pub mod storage;
pub mod upload;
pub mod validation;
pub mod web;
