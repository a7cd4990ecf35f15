use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::{AppResult, report_error};
use crate::utils::input::parse_search;
use crate::utils::output::DisplayFormatter;
use super::{Retry, read_form};
use std::io::BufRead;

const SEARCH_PROMPT: &str = "Enter the major, GPA and faculty advisor to search for, separated by \
commas. Put * in any field you don't want to search on (e.g. *, *, Rene German):\n";

pub fn handle_search<T: StudentTable, R: BufRead>(
    service: &StudentService<T>,
    input: &mut R,
) -> AppResult<()> {
    let Some(filter) = read_form(input, SEARCH_PROMPT, Retry::UntilValid, parse_search)? else {
        return Ok(());
    };

    match service.search(&filter) {
        Ok(students) => DisplayFormatter::print_students(&students)?,
        Err(e) => report_error(&e),
    }
    Ok(())
}
