//! Snippet Arsenal CLI
//!
//! Command-line interface for storing, searching and managing code snippets

use arsenal_core::logging_facility::{init as init_logging, Profile};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod clipboard;
mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "arsenal-cli")]
#[command(about = "Snippet Arsenal - local code snippet manager", long_about = None)]
struct Cli {
    /// Database file (overrides SNIPPET_ARSENAL_DB and the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file (default: <config dir>/snippet-arsenal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search snippets by keyword
    Search(commands::search::SearchArgs),
    /// Show a full snippet
    Show(commands::show::ShowArgs),
    /// Add a new snippet
    Add(commands::save::AddArgs),
    /// Edit an existing snippet
    Edit(commands::save::EditArgs),
    /// Permanently delete a snippet
    Delete(commands::delete::DeleteArgs),
    /// Copy a snippet's code to the clipboard
    Copy(commands::copy::CopyArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::CommandResult {
    let config = config::load(cli.config.as_deref())?;

    let profile = match config.log_format {
        config::LogFormat::Pretty => Profile::Development,
        config::LogFormat::Json => Profile::Production,
    };
    init_logging(profile, &config.log_filter());

    let db_path =
        config::resolve_db_path(cli.db, std::env::var_os(config::DB_ENV_VAR), &config);
    tracing::debug!(db_path = %db_path.display(), "resolved database path");
    let mut conn = arsenal_store::db::open_store(&db_path)?;

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &conn, &config),
        Commands::Show(args) => commands::show::execute(args, &conn),
        Commands::Add(args) => commands::save::execute_add(args, &mut conn, &config),
        Commands::Edit(args) => commands::save::execute_edit(args, &mut conn),
        Commands::Delete(args) => commands::delete::execute(args, &mut conn),
        Commands::Copy(args) => commands::copy::execute(args, &conn),
    }
}
