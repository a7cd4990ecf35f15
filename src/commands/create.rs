use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::AppResult;
use crate::utils::input::parse_create;
use super::{Retry, finish, read_form};
use std::io::BufRead;

const CREATE_PROMPT: &str = "Enter the student's ID, first name, last name, GPA, major and \
faculty advisor, separated by commas:\n";

pub fn handle_create<T: StudentTable, R: BufRead>(
    service: &StudentService<T>,
    input: &mut R,
) -> AppResult<()> {
    let Some(student) = read_form(input, CREATE_PROMPT, Retry::UntilValid, parse_create)? else {
        return Ok(());
    };

    let name = student.to_string();
    finish(service.create(student), &format!("Created {}", name));
    Ok(())
}
