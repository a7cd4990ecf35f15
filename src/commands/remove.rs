use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::AppResult;
use crate::utils::input::parse_remove;
use super::{Retry, finish, read_form};
use std::io::BufRead;

const REMOVE_PROMPT: &str = "Enter the ID of the student to remove:\n";

/// Single-shot: malformed input goes straight back to the menu
pub fn handle_remove<T: StudentTable, R: BufRead>(
    service: &StudentService<T>,
    input: &mut R,
) -> AppResult<()> {
    let Some(id) = read_form(input, REMOVE_PROMPT, Retry::Once, parse_remove)? else {
        return Ok(());
    };

    finish(service.remove(id), &format!("Removed student {}", id));
    Ok(())
}
