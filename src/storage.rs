use crate::core::data::Student;
use crate::core::query::{FOLD_CASE_FUNCTION, STUDENT_COLUMNS, SearchQuery};
use crate::core::traits::StudentTable;
use crate::utils::error::{AppError, AppResult};
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use std::path::Path;
use tracing::debug;

const CREATE_TABLE: &str = r#"
    create table if not exists Student (
        StudentId INTEGER PRIMARY KEY,
        FirstName TEXT,
        LastName TEXT,
        GPA REAL,
        Major TEXT,
        FacultyAdvisor TEXT,
        isDeleted BOOLEAN
    );
"#;

/// `Student` table backed by a single SQLite connection held for the
/// lifetime of the process.
pub struct SqliteStudentTable {
    conn: Connection,
}

impl SqliteStudentTable {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening student database");
        let conn = Connection::open(path)?;
        Self::with_functions(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_functions(conn)
    }

    /// Register the case folding used by searches. SQLite's own `lower()`
    /// only folds ASCII, which would miss `Économie` for `économie`.
    fn with_functions(conn: Connection) -> AppResult<Self> {
        conn.create_scalar_function(
            FOLD_CASE_FUNCTION,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|t| t.to_lowercase()))
            },
        )?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gpa: row.get(3)?,
        major: row.get(4)?,
        advisor: row.get(5)?,
        is_deleted: row.get::<_, Option<bool>>(6)?.unwrap_or(false),
    })
}

impl StudentTable for SqliteStudentTable {
    fn ensure_storage_exists(&self) -> AppResult<()> {
        self.conn.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    fn count_by_id(&self, id: i64) -> AppResult<i64> {
        let count = self.conn.query_row(
            "select count(*) from Student where StudentId = ?",
            [id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn insert(&self, student: &Student) -> AppResult<()> {
        debug!(id = student.id, "insert into Student");
        self.conn.execute(
            "insert into Student (StudentId, FirstName, LastName, GPA, Major, FacultyAdvisor, isDeleted) values (?, ?, ?, ?, ?, ?, ?)",
            params![
                student.id,
                student.first_name,
                student.last_name,
                student.gpa,
                student.major,
                student.advisor,
                student.is_deleted,
            ],
        )?;
        Ok(())
    }

    fn mark_deleted(&self, id: i64) -> AppResult<()> {
        debug!(id, "update Student set isDeleted");
        let changed = self
            .conn
            .execute("update Student set isDeleted = 1 where StudentId = ?", [id])?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    fn update_assignment(&self, id: i64, major: &str, advisor: &str) -> AppResult<()> {
        debug!(id, "update Student set Major, FacultyAdvisor");
        let changed = self.conn.execute(
            "update Student set Major = ?, FacultyAdvisor = ? where StudentId = ?",
            params![major, advisor, id],
        )?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        let statement = format!(
            "select {} from Student where StudentId = ?",
            STUDENT_COLUMNS
        );
        let student = self
            .conn
            .query_row(&statement, [id], student_from_row)
            .optional()?;
        Ok(student)
    }

    fn query(&self, query: &SearchQuery) -> AppResult<Vec<Student>> {
        debug!(statement = %query.statement, params = query.params.len(), "running search");
        let mut stmt = self.conn.prepare(&query.statement)?;
        let rows = stmt.query_map(params_from_iter(query.params.iter()), student_from_row)?;

        let mut students = Vec::new();
        for row in rows {
            students.push(row?);
        }
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::StudentFilter;

    fn create_test_table() -> SqliteStudentTable {
        let table = SqliteStudentTable::open_in_memory().unwrap();
        table.ensure_storage_exists().unwrap();
        table
    }

    #[test]
    fn test_ensure_storage_exists_is_repeatable() {
        let table = create_test_table();
        table.ensure_storage_exists().unwrap();
        assert_eq!(table.count_by_id(1).unwrap(), 0);
    }

    #[test]
    fn test_insert_and_find() {
        let table = create_test_table();
        let student = Student::new(7, "Ann", "Lee", 3.5, "CS", "Smith");
        table.insert(&student).unwrap();

        assert_eq!(table.count_by_id(7).unwrap(), 1);
        assert_eq!(table.find_by_id(7).unwrap(), Some(student));
        assert_eq!(table.find_by_id(8).unwrap(), None);
    }

    #[test]
    fn test_duplicate_primary_key_is_a_storage_error() {
        let table = create_test_table();
        let student = Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith");
        table.insert(&student).unwrap();

        let err = table.insert(&student).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn test_query_skips_deleted_rows() {
        let table = create_test_table();
        table
            .insert(&Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith"))
            .unwrap();
        table
            .insert(&Student::new(2, "Bob", "Ray", 3.0, "CS", "Smith"))
            .unwrap();
        table.mark_deleted(1).unwrap();

        let found = table
            .query(&SearchQuery::from_filter(&StudentFilter::new()))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_like_wildcards_match_literally() {
        let table = create_test_table();
        table
            .insert(&Student::new(1, "Ann", "Lee", 3.5, "CS", "Smith"))
            .unwrap();

        let found = table
            .query(&SearchQuery::from_filter(&StudentFilter::new().with_major("%")))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_fold_case_handles_non_ascii() {
        let table = create_test_table();
        let folded: String = table
            .connection()
            .query_row("select fold_case('ÉCONOMIE Ñ')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(folded, "économie ñ");
    }

    #[test]
    fn test_mark_deleted_on_missing_row() {
        let table = create_test_table();
        assert_eq!(table.mark_deleted(42).unwrap_err(), AppError::NotFound(42));
    }
}
