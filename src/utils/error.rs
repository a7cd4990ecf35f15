use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Student ID {0} is already taken")]
    DuplicateId(i64),

    #[error("Student {0} doesn't exist")]
    NotFound(i64),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub enum FlowResult {
    InvalidInput(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::DuplicateId(_) | AppError::NotFound(_) => {
            println!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        AppError::MalformedInput(msg) => {
            println!("{}", OutputStyle::muted(msg));
        }
        AppError::Storage(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Storage: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::InvalidInput(msg) => {
            println!("⚠️  {}", OutputStyle::warning(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}
