use clap::Parser;
use std::path::PathBuf;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Maintain student records in a SQLite database")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Database file to use (overrides config)")]
    pub database: Option<PathBuf>,

    #[arg(short, long, help = "Log debug output to stderr")]
    pub debug: bool,
}

impl Cli {
    /// Fold command line overrides into the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            config.general.database_file = database.clone();
        }
        if self.debug {
            config.general.log_level = "debug".to_string();
        }
    }
}
