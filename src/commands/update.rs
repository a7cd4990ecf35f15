use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::AppResult;
use crate::utils::input::parse_update;
use super::{Retry, finish, read_form};
use std::io::BufRead;

const UPDATE_PROMPT: &str = "Enter the ID of the student to update, followed by their new major \
and faculty advisor, separated by commas:\n";

pub fn handle_update<T: StudentTable, R: BufRead>(
    service: &StudentService<T>,
    input: &mut R,
) -> AppResult<()> {
    let Some((id, major, advisor)) =
        read_form(input, UPDATE_PROMPT, Retry::UntilValid, parse_update)?
    else {
        return Ok(());
    };

    finish(service.update(id, &major, &advisor), &format!("Updated student {}", id));
    Ok(())
}
