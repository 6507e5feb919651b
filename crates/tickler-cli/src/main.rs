use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tickler_core::db;
use tickler_core::error::CoreError;
use tickler_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = cli::Cli::parse();

    // parsing text needs no database
    if let cli::Commands::Parse(command) = cli.command {
        if let Err(e) = commands::parse::parse_text(command) {
            handle_error(e);
            std::process::exit(1);
        }
        return;
    }

    let config = config::Config::new().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration, falling back to defaults");
        config::Config::default()
    });

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, &config).await
        }
        cli::Commands::Do(command) => commands::r#do::do_task(&repository, command).await,
        cli::Commands::Undo(command) => commands::r#do::undo_task(&repository, command).await,
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&repository, command).await
        }
        cli::Commands::Clear => commands::clear::clear_completed(&repository).await,
        cli::Commands::Watch(command) => {
            commands::watch::watch(&repository, command, &config).await
        }
        cli::Commands::Parse(_) => unreachable!("handled before opening the database"),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TICKLER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, text) in tasks {
                    eprintln!("  {} ({})", id.yellow(), text);
                }
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
