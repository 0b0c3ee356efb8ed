//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --lang, --data-dir, --config)
//!   are inherited by all subcommands
//! - Running without a subcommand opens the interactive overview

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Locale;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// One `STORE=N` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockArg {
    /// Store id or store name
    pub store: String,
    /// Raw value, coerced by the form rules
    pub value: String,
}

fn parse_stock_arg(s: &str) -> Result<StockArg, String> {
    let (store, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected STORE=N, got '{}'", s))?;
    let store = store.trim();
    if store.is_empty() {
        return Err(format!("missing store in '{}'", s));
    }
    Ok(StockArg {
        store: store.to_string(),
        value: value.to_string(),
    })
}

/// Inventaires - per-store stock tracker
#[derive(Parser, Debug)]
#[command(name = "inventaires")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'inventaires' without arguments for the interactive overview.")]
pub struct Cli {
    /// Output format for scripts (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Display language
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Locale>,

    /// Directory holding the inventory snapshot
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (skips discovery)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the inventory table
    List,

    /// Record the inventory of a product (replaces its previous record)
    Add {
        /// Inventory date (YYYY-MM-DD, not after today)
        #[arg(short, long)]
        date: Option<String>,

        /// Product id or name
        #[arg(short, long)]
        product: Option<String>,

        /// Stock for one store, as STORE=N (repeatable; unlisted stores are 0)
        #[arg(short, long = "stock", value_name = "STORE=N", value_parser = parse_stock_arg)]
        stock: Vec<StockArg>,

        /// Skip prompts and the confirmation step
        #[arg(short, long)]
        yes: bool,
    },

    /// Edit the recorded inventory of a product
    Edit {
        /// Product id or name
        product: String,

        /// Save the edited inventory under another product
        #[arg(short = 'p', long = "product", value_name = "PRODUCT")]
        switch_to: Option<String>,

        /// New inventory date (YYYY-MM-DD, not after today)
        #[arg(short, long)]
        date: Option<String>,

        /// New stock for one store, as STORE=N (repeatable)
        #[arg(short, long = "stock", value_name = "STORE=N", value_parser = parse_stock_arg)]
        stock: Vec<StockArg>,

        /// Skip prompts and the confirmation step
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all records as CSV
    Export {
        /// Output file, or '-' for stdout (default: inventaires.csv)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show the stores and products of the catalog
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["inventaires"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_add_with_stock() {
        let cli = Cli::try_parse_from([
            "inventaires",
            "add",
            "--date",
            "2024-01-01",
            "--product",
            "1",
            "--stock",
            "1=5",
            "-s",
            "Super U=0",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add {
                date,
                product,
                stock,
                yes,
            }) => {
                assert_eq!(date.as_deref(), Some("2024-01-01"));
                assert_eq!(product.as_deref(), Some("1"));
                assert_eq!(stock.len(), 2);
                assert_eq!(stock[1].store, "Super U");
                assert_eq!(stock[1].value, "0");
                assert!(!yes);
            }
            other => panic!("expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_stock_without_equals() {
        let err = Cli::try_parse_from(["inventaires", "add", "--stock", "5"]).unwrap_err();
        assert!(err.to_string().contains("STORE=N"));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["inventaires", "list", "--json", "--lang", "en", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.lang, Some(Locale::En));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_edit_with_product_switch() {
        let cli =
            Cli::try_parse_from(["inventaires", "edit", "Ciment 50kg", "-p", "2", "-s", "1=3"])
                .unwrap();
        match cli.command {
            Some(Commands::Edit {
                product,
                switch_to,
                stock,
                ..
            }) => {
                assert_eq!(product, "Ciment 50kg");
                assert_eq!(switch_to.as_deref(), Some("2"));
                assert_eq!(stock.len(), 1);
            }
            other => panic!("expected edit, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_export_output() {
        let cli = Cli::try_parse_from(["inventaires", "export", "-o", "-"]).unwrap();
        match cli.command {
            Some(Commands::Export { output }) => assert_eq!(output, Some(PathBuf::from("-"))),
            other => panic!("expected export, got {:?}", other),
        }
    }
}
