//! Terminal presentation for the `inventaires` binary.
//!
//! - `theme` / `primitives` - design tokens and styled text
//! - `widgets` / `blocks` - boxes, headers, summaries, error blocks
//! - `views` - the inventory table, form preview and catalog
//! - `prompt` - dialoguer prompts that fill the form
//! - `json` - NDJSON events for `--json`

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
