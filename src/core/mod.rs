//! Core business logic layer
//!
//! This module contains the student record types, the search query builder,
//! the storage trait and the service that enforces the record rules.

pub mod data;
pub mod operations;
pub mod query;
pub mod traits;
