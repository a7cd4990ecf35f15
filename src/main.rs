use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use studentdb::cli::Cli;
use studentdb::commands::menu::run_menu;
use studentdb::config::Config;
use studentdb::utils::{logging, output::OutputStyle};
use studentdb::{SqliteStudentTable, StudentService};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };
    cli.apply_overrides(&mut config);

    logging::init_logging(&config.general.log_level.to_lowercase());
    OutputStyle::apply_color_preference(config.general.color);

    let table = SqliteStudentTable::open(&config.general.database_file).with_context(|| {
        format!(
            "Failed to open database: {}",
            config.general.database_file.display()
        )
    })?;
    let service = StudentService::new(table)?;

    let stdin = io::stdin();
    run_menu(&service, &mut stdin.lock())?;

    Ok(())
}
