use crate::utils::error::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line from `input`.
///
/// Returns `None` once the input is exhausted. The trailing line break is
/// removed; any other whitespace is left for the form parser. A line that is
/// not valid UTF-8 is consumed and reported as `MalformedInput`.
pub fn prompt_input<R: BufRead>(input: &mut R, prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        println!();
        return Ok(None);
    }

    let mut line = String::from_utf8(buf)
        .map_err(|_| AppError::MalformedInput("input is not valid UTF-8".to_string()))?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
