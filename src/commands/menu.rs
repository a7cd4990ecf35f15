use crate::core::operations::StudentService;
use crate::core::traits::StudentTable;
use crate::utils::error::{AppError, AppResult, FlowResult, handle_flow};
use crate::utils::interactive::prompt_input;
use crate::utils::output::OutputStyle;
use super::{create, remove, search, update, view};
use std::io::BufRead;
use tracing::debug;

/// A single menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Create,
    Update,
    Search,
    Remove,
    Quit,
}

impl MenuChoice {
    /// Match the exact key typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "0" => Some(Self::View),
            "1" => Some(Self::Create),
            "2" => Some(Self::Update),
            "3" => Some(Self::Search),
            "4" => Some(Self::Remove),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!();
    OutputStyle::print_header("🎓 Student Records");
    println!("{} View students in the database", OutputStyle::label("0)"));
    println!("{} Create a new student", OutputStyle::label("1)"));
    println!("{} Update a student record", OutputStyle::label("2)"));
    println!("{} Search for students", OutputStyle::label("3)"));
    println!("{} Remove a student", OutputStyle::label("4)"));
    println!("{} Quit", OutputStyle::label("q)"));
}

/// Run the menu until the user quits or input ends.
///
/// Business and storage failures are reported and the loop carries on; only
/// console I/O errors end the session early.
pub fn run_menu<T: StudentTable, R: BufRead>(
    service: &StudentService<T>,
    input: &mut R,
) -> AppResult<()> {
    loop {
        print_menu();

        let line = match prompt_input(input, "> ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(AppError::MalformedInput(_)) => String::new(),
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            handle_flow(FlowResult::InvalidInput(
                "That was not a valid option.".to_string(),
            ));
            continue;
        };

        debug!(?choice, "menu selection");
        println!();

        match choice {
            MenuChoice::View => view::handle_view(service)?,
            MenuChoice::Create => create::handle_create(service, input)?,
            MenuChoice::Update => update::handle_update(service, input)?,
            MenuChoice::Search => search::handle_search(service, input)?,
            MenuChoice::Remove => remove::handle_remove(service, input)?,
            MenuChoice::Quit => break,
        }
    }

    println!("{}", OutputStyle::muted("Goodbye."));
    Ok(())
}
