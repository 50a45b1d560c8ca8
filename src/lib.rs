//! Captain's log: a pirate-themed personal dashboard core.
//!
//! Tasks, voyages (projects) and horizon events live in three independently persisted
//! collections. Adding and completing things earns experience, experience drives the captain's
//! level and rank, and every change is written straight through to a [`store::KeyValueStore`].

pub mod actions;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod errors;
pub mod export;
pub mod gamification;
pub mod ids;
pub mod logging;
pub mod models;
pub mod seed;
pub mod store;
pub mod views;

pub use dashboard::{Dashboard, Notification};
pub use errors::ValidationError;
pub use gamification::{rank_of, Rank, RankUp};
