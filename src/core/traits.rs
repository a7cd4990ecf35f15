//! Core trait definitions for student record storage
//!
//! The service never talks to a database directly; it is handed something that
//! implements [`StudentTable`] when it is constructed.

use crate::core::data::Student;
use crate::core::query::SearchQuery;
use crate::utils::error::AppResult;

/// Statement-level access to the `Student` table
///
/// Each method runs a single auto-committed statement. Business rules such as
/// id uniqueness live in the service, not here.
pub trait StudentTable {
    /// Create the table if it is missing
    fn ensure_storage_exists(&self) -> AppResult<()>;

    /// Number of rows with this id, deleted or not
    fn count_by_id(&self, id: i64) -> AppResult<i64>;

    /// Insert a full row
    fn insert(&self, student: &Student) -> AppResult<()>;

    /// Set the delete flag on a row
    fn mark_deleted(&self, id: i64) -> AppResult<()>;

    /// Overwrite major and faculty advisor on a row
    fn update_assignment(&self, id: i64, major: &str, advisor: &str) -> AppResult<()>;

    /// Fetch a row by id, ignoring the delete flag
    fn find_by_id(&self, id: i64) -> AppResult<Option<Student>>;

    /// Run a prepared search
    fn query(&self, query: &SearchQuery) -> AppResult<Vec<Student>>;
}
