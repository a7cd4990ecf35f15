pub mod error;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod output;

pub use interactive::*;
pub use output::*;
