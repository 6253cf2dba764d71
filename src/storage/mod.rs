//! Storage layer for cached league summaries
//!
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD and seed operations

pub mod models;
pub mod queries;
pub mod schema;


use std::sync::{Arc, Mutex};

pub use models::*;
pub use schema::LeagueDatabase;

/// Handle shared across request workers; SQLite access is serialized.
pub type SharedDatabase = Arc<Mutex<LeagueDatabase>>;
