//! studentdb - a console tool for maintaining student records
//!
//! This library provides the record service, its SQLite storage, the search
//! query builder and the line-based console menu that drives them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Student, StudentFilter},
    operations::StudentService,
    query::SearchQuery,
    traits::StudentTable,
};
pub use storage::SqliteStudentTable;
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
