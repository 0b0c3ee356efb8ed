//! Inventaires CLI - per-store stock tracker
//!
//! Usage: inventaires [COMMAND]
//!
//! Commands:
//!   list     Show the inventory table
//!   add      Record the inventory of a product
//!   edit     Edit the recorded inventory of a product
//!   export   Export all records as CSV
//!   catalog  Show the stores and products
//!
//! Without a command, opens the interactive overview.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inventaires::config::{discover, Config, ConfigWarning};
use inventaires::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::add::AddArgs;
use commands::edit::EditArgs;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

/// `INVENTAIRES_LOG` wins; otherwise `-v` raises the level from `warn`.
/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("INVENTAIRES_LOG").unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("inventaires={level}"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config file, then environment, then CLI flags
fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let path: Option<PathBuf> = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = std::env::current_dir()?;
            discover(Some(&cwd))
        }
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            Config::load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    let mut config = config.with_env_overrides();
    if let Some(locale) = cli.lang {
        config.display.locale = locale;
    }
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }

    Ok((config, warnings))
}

fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None => "interactive",
        Some(Commands::List) => "list",
        Some(Commands::Add { .. }) => "add",
        Some(Commands::Edit { .. }) => "edit",
        Some(Commands::Export { .. }) => "export",
        Some(Commands::Catalog) => "catalog",
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = load_config(&cli)?;
    let ui = UiContext::new(cli.json, cli.color, &config);
    ui::output::print_config_warnings(&ui, command_name(cli.command.as_ref()), &warnings);

    match cli.command {
        None => commands::interactive::cmd_interactive(&config, &ui),
        Some(Commands::List) => commands::list::cmd_list(&config, &ui),
        Some(Commands::Add {
            date,
            product,
            stock,
            yes,
        }) => commands::add::cmd_add(
            &config,
            &ui,
            AddArgs {
                date,
                product,
                stock,
                yes,
            },
        ),
        Some(Commands::Edit {
            product,
            switch_to,
            date,
            stock,
            yes,
        }) => commands::edit::cmd_edit(
            &config,
            &ui,
            EditArgs {
                product,
                switch_to,
                date,
                stock,
                yes,
            },
        ),
        Some(Commands::Export { output }) => {
            commands::export::cmd_export(&config, &ui, output.as_deref())
        }
        Some(Commands::Catalog) => commands::catalog::cmd_catalog(&config, &ui),
    }
}
