//! Console menu and the form handlers it dispatches to

pub mod create;
pub mod menu;
pub mod remove;
pub mod search;
pub mod update;
pub mod view;

use crate::utils::error::{AppError, AppResult, FlowResult, handle_flow, report_error};
use crate::utils::interactive::prompt_input;
use std::io::BufRead;

pub const INVALID_INPUT: &str = "That was not a valid input. Please try again";

/// Whether a form asks again after malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retry {
    UntilValid,
    Once,
}

/// Read one form line and parse it.
///
/// Returns `None` when input ends, or when a single-shot form got malformed
/// input.
pub fn read_form<R, T>(
    input: &mut R,
    prompt: &str,
    retry: Retry,
    parse: impl Fn(&str) -> AppResult<T>,
) -> AppResult<Option<T>>
where
    R: BufRead,
{
    loop {
        let parsed = match prompt_input(input, prompt) {
            Ok(Some(line)) => parse(&line),
            Ok(None) => return Ok(None),
            Err(e @ AppError::MalformedInput(_)) => Err(e),
            Err(e) => return Err(e),
        };

        match parsed {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                report_error(&e);
                handle_flow(FlowResult::InvalidInput(INVALID_INPUT.to_string()));
                if retry == Retry::Once {
                    return Ok(None);
                }
            }
        }
    }
}

/// Report the outcome of a service call without ending the session
pub fn finish(result: AppResult<()>, success: &str) {
    match result {
        Ok(()) => handle_flow(FlowResult::Success(success.to_string())),
        Err(e) => report_error(&e),
    }
}
