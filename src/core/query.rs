//! Search query construction
//!
//! Turns a [`StudentFilter`] into one parameterized `select` over the active
//! rows of the `Student` table. Every present filter adds exactly one clause
//! and one positional parameter, in the order major, GPA, advisor.

use crate::core::data::StudentFilter;
use rusqlite::types::Value;

/// Columns in display order, followed by the delete flag
pub const STUDENT_COLUMNS: &str =
    "StudentId, FirstName, LastName, GPA, Major, FacultyAdvisor, isDeleted";

/// Unicode lowercase SQL function registered on every connection
pub const FOLD_CASE_FUNCTION: &str = "fold_case";

/// SQL text with its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub statement: String,
    pub params: Vec<Value>,
}

impl SearchQuery {
    /// Build the query for the given filter
    pub fn from_filter(filter: &StudentFilter) -> Self {
        let mut statement = format!(
            "select {} from Student where isDeleted = 0",
            STUDENT_COLUMNS
        );
        let mut params = Vec::new();

        if let Some(major) = &filter.major {
            statement.push_str(&format!(" and {}(Major) like ? escape '\\'", FOLD_CASE_FUNCTION));
            params.push(Value::Text(like_pattern(major)));
        }
        if let Some(gpa) = filter.gpa {
            statement.push_str(" and GPA = ?");
            params.push(Value::Real(gpa));
        }
        if let Some(advisor) = &filter.advisor {
            statement.push_str(&format!(
                " and {}(FacultyAdvisor) like ? escape '\\'",
                FOLD_CASE_FUNCTION
            ));
            params.push(Value::Text(like_pattern(advisor)));
        }

        statement.push_str(" order by StudentId");

        Self { statement, params }
    }
}

/// Lowercase `term`, escape LIKE metacharacters and wrap it for a substring match
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
