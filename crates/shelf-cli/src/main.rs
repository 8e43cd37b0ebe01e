//! shelf CLI
//!
//! Command-line interface for shelf - a personal library catalog.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use shelf_core::{Catalog, Config};

mod cli;
mod commands;
mod logging;
mod menu;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use output::{Output, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let mut config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    logging::init(&config, cli.verbose);

    // Config commands don't need the catalog
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    if let Some(path) = cli.file {
        config.storage_path = path;
    }

    let mut catalog = Catalog::open(&config);

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(&mut catalog, stdin.lock(), stdout.lock())
        }
        Some(Commands::Add {
            title,
            author,
            year,
            isbn,
        }) => commands::book::add(&mut catalog, title, author, year, isbn, &output),
        Some(Commands::List) => commands::book::list(&catalog, &output),
        Some(Commands::Search { keyword, field }) => {
            commands::book::search(&catalog, keyword, field, &output)
        }
        Some(Commands::Borrow { isbn }) => commands::book::borrow(&mut catalog, isbn, &output),
        Some(Commands::Return { isbn }) => commands::book::give_back(&mut catalog, isbn, &output),
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&std::path::PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
