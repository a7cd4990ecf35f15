//! Comma-delimited form parsing
//!
//! Every form is a single line of comma separated fields. Whitespace around
//! commas and at either end is dropped, as are empty fields, so `" 1 ,, Ann "`
//! yields `["1", "Ann"]` while inner spaces (`"Rene German"`) survive.

use crate::core::data::{Student, StudentFilter};
use crate::utils::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Token that leaves a search field unfiltered
pub const WILDCARD: &str = "*";

static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+|\s*,\s*|\s+$").expect("field separator pattern is valid"));

/// Split a form line into its non-empty, trimmed fields
pub fn split_fields(line: &str) -> Vec<String> {
    FIELD_SEPARATOR
        .split(line)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `id, first name, last name, GPA, major, advisor`
pub fn parse_create(line: &str) -> AppResult<Student> {
    let fields = expect_fields(line, 6)?;

    let id = parse_id(&fields[0])?;
    let gpa = parse_gpa(&fields[3])?;
    let first_name = expect_alpha("first name", &fields[1])?;
    let last_name = expect_alpha("last name", &fields[2])?;
    let major = expect_alpha("major", &fields[4])?;

    Ok(Student::new(id, first_name, last_name, gpa, major, fields[5].as_str()))
}

/// Parse `id, major, advisor`
pub fn parse_update(line: &str) -> AppResult<(i64, String, String)> {
    let fields = expect_fields(line, 3)?;

    let id = parse_id(&fields[0])?;
    let major = expect_alpha("major", &fields[1])?;
    let advisor = expect_alpha("faculty advisor", &fields[2])?;

    Ok((id, major.to_string(), advisor.to_string()))
}

/// Parse `major, GPA, advisor` where `*` leaves a field unfiltered
pub fn parse_search(line: &str) -> AppResult<StudentFilter> {
    let fields = expect_fields(line, 3)?;
    let mut filter = StudentFilter::new();

    if fields[0] != WILDCARD {
        filter = filter.with_major(fields[0].as_str());
    }
    if fields[1] != WILDCARD {
        filter = filter.with_gpa(parse_gpa(&fields[1])?);
    }
    if fields[2] != WILDCARD {
        filter = filter.with_advisor(fields[2].as_str());
    }

    Ok(filter)
}

/// Parse a single student id
pub fn parse_remove(line: &str) -> AppResult<i64> {
    let fields = expect_fields(line, 1)?;
    parse_id(&fields[0])
}

fn expect_fields(line: &str, count: usize) -> AppResult<Vec<String>> {
    let fields = split_fields(line);
    if fields.len() != count {
        return Err(AppError::MalformedInput(format!(
            "expected {} comma separated values but got {}",
            count,
            fields.len()
        )));
    }
    Ok(fields)
}

fn parse_id(field: &str) -> AppResult<i64> {
    field
        .parse()
        .map_err(|_| AppError::MalformedInput(format!("'{}' is not a valid student ID", field)))
}

/// A finite float; SQLite stores NaN as NULL, which no row could be read back from
fn parse_gpa(field: &str) -> AppResult<f64> {
    match field.parse::<f64>() {
        Ok(gpa) if gpa.is_finite() => Ok(gpa),
        _ => Err(AppError::MalformedInput(format!(
            "'{}' is not a valid GPA",
            field
        ))),
    }
}

fn expect_alpha<'a>(name: &str, field: &'a str) -> AppResult<&'a str> {
    if is_alpha(field) {
        Ok(field)
    } else {
        Err(AppError::MalformedInput(format!(
            "{} '{}' must contain only letters",
            name, field
        )))
    }
}

/// Non-empty and made only of alphabetic characters
pub fn is_alpha(field: &str) -> bool {
    !field.is_empty() && field.chars().all(char::is_alphabetic)
}
