//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the controller with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `factory` - Wires the controller to its dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, StockArg};
pub use factory::{create_csv_exporter, create_overview, ConcreteOverview};
