//! Core data structures for student records
//!
//! This module contains the row type stored in the `Student` table and the
//! filter used to narrow searches over it.

/// A single row of the `Student` table
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gpa: f64,
    pub major: String,
    pub advisor: String,
    pub is_deleted: bool,
}

/// Optional search criteria, combined with AND when the query is built.
///
/// An absent field places no restriction on that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub advisor: Option<String>,
}

impl Student {
    /// Create an active student record
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gpa: f64,
        major: impl Into<String>,
        advisor: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gpa,
            major: major.into(),
            advisor: advisor.into(),
            is_deleted: false,
        }
    }
}

impl StudentFilter {
    /// A filter that matches every active student
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn with_advisor(mut self, advisor: impl Into<String>) -> Self {
        self.advisor = Some(advisor.into());
        self
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.id)
    }
}
