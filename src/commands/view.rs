use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::{AppResult, report_error};
use crate::utils::output::DisplayFormatter;

pub fn handle_view<T: StudentTable>(service: &StudentService<T>) -> AppResult<()> {
    match service.list_all() {
        Ok(students) => DisplayFormatter::print_students(&students)?,
        Err(e) => report_error(&e),
    }
    Ok(())
}
