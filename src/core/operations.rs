//! Core operations implementation
//!
//! [`StudentService`] is the single place where the record rules are applied:
//! ids are unique across active and removed rows, removal is a soft delete and
//! searches only ever see active rows.

use crate::core::{
    data::{Student, StudentFilter},
    query::SearchQuery,
    traits::StudentTable,
};
use crate::utils::error::{AppError, AppResult};
use tracing::{debug, info, warn};

/// Student record operations over an injected table handle
pub struct StudentService<T: StudentTable> {
    table: T,
}

impl<T: StudentTable> StudentService<T> {
    /// Create a new service, making sure the backing table exists
    pub fn new(table: T) -> AppResult<Self> {
        table.ensure_storage_exists()?;
        Ok(Self { table })
    }

    /// Get the underlying table for direct access
    pub fn table(&self) -> &T {
        &self.table
    }

    /// True iff exactly one row carries this id, whether removed or not
    pub fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(self.table.count_by_id(id)? == 1)
    }

    /// Insert a new active student
    pub fn create(&self, student: Student) -> AppResult<()> {
        if !student.gpa.is_finite() {
            return Err(AppError::MalformedInput(format!(
                "GPA must be a finite number, got {}",
                student.gpa
            )));
        }
        if self.exists(student.id)? {
            warn!(id = student.id, "rejecting create for existing id");
            return Err(AppError::DuplicateId(student.id));
        }

        let student = Student {
            is_deleted: false,
            ..student
        };
        self.table.insert(&student)?;
        info!(id = student.id, "student created");
        Ok(())
    }

    /// Soft delete a student.
    ///
    /// The existence check ignores the delete flag, so removing an already
    /// removed student succeeds again.
    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.exists(id)? {
            warn!(id, "rejecting remove for unknown id");
            return Err(AppError::NotFound(id));
        }

        self.table.mark_deleted(id)?;
        info!(id, "student removed");
        Ok(())
    }

    /// Replace a student's major and faculty advisor
    pub fn update(&self, id: i64, major: &str, advisor: &str) -> AppResult<()> {
        if !self.exists(id)? {
            warn!(id, "rejecting update for unknown id");
            return Err(AppError::NotFound(id));
        }

        self.table.update_assignment(id, major, advisor)?;
        info!(id, major, advisor, "student updated");
        Ok(())
    }

    /// Active students matching every present field of the filter, ordered by id
    pub fn search(&self, filter: &StudentFilter) -> AppResult<Vec<Student>> {
        let query = SearchQuery::from_filter(filter);
        let students = self.table.query(&query)?;
        debug!(?filter, found = students.len(), "search finished");
        Ok(students)
    }

    /// Every active student
    pub fn list_all(&self) -> AppResult<Vec<Student>> {
        self.search(&StudentFilter::new())
    }
}
