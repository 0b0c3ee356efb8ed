use inventaires::application::FormError;
use inventaires::domain::ports::SnapshotError;
use inventaires::InventoryError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;
use crate::ui::terminal::detect_capabilities;

/// Stable code for the JSON `error` event
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<InventoryError>() {
        Some(InventoryError::Form(_)) => "form",
        Some(InventoryError::Snapshot(_)) => "snapshot",
        Some(InventoryError::NoRecord { .. }) => "no_record",
        Some(InventoryError::UnknownProduct { .. }) => "unknown_product",
        Some(InventoryError::UnknownStore { .. }) => "unknown_store",
        Some(InventoryError::NoOpenForm) => "no_open_form",
        Some(InventoryError::InvalidConfig { .. }) => "config",
        Some(InventoryError::DuplicateCatalogId { .. }) => "catalog",
        Some(InventoryError::Csv(_)) => "csv",
        Some(InventoryError::Io(_)) => "io",
        Some(InventoryError::Aborted) => "aborted",
        None => "error",
    }
}

fn block_for(err: &InventoryError) -> ErrorBlock {
    let block = ErrorBlock::new(err.to_string());
    match err {
        InventoryError::Form(form) => form_block(block, form),
        InventoryError::Snapshot(SnapshotError::Corrupted { path, .. }) => {
            block.with_location(path.display().to_string())
        }
        InventoryError::Snapshot(_) => {
            block.with_fix("check that the data directory exists and is writable (--data-dir)")
        }
        InventoryError::NoRecord { .. } => {
            block.with_fix("record it first with `inventaires add --product <ID>`")
        }
        InventoryError::UnknownProduct { .. } | InventoryError::UnknownStore { .. } => {
            block.with_fix("run `inventaires catalog` to list stores and products")
        }
        InventoryError::InvalidConfig { file, .. } => block
            .with_location(file.display().to_string())
            .with_fix("fix the TOML and try again"),
        _ => block,
    }
}

fn form_block(block: ErrorBlock, err: &FormError) -> ErrorBlock {
    match err {
        FormError::MissingDate | FormError::InvalidDate { .. } => block
            .with_location("--date")
            .with_fix("pass a date as YYYY-MM-DD"),
        FormError::DateInFuture { max, .. } => block
            .with_location("--date")
            .with_fix(format!("use a date on or before {}", max)),
        FormError::MissingProduct => block
            .with_location("--product")
            .with_fix("pass --product <ID or name>"),
        FormError::UnknownProduct { .. } => block
            .with_location("--product")
            .with_fix("run `inventaires catalog` to list products"),
        FormError::UnknownStore { .. } => block
            .with_location("--stock")
            .with_fix("run `inventaires catalog` to list stores"),
        FormError::NegativeStock { .. } | FormError::StockTooLarge { .. } => {
            block.with_location("--stock")
        }
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<InventoryError>() {
        Some(inner) => block_for(inner).render(supports_color, supports_unicode),
        None => ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let event = ErrorEvent::new(error_code(err), format!("{:#}", err));
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn future_date_suggests_the_limit() {
        let err: anyhow::Error = InventoryError::from(FormError::DateInFuture {
            date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            max: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        })
        .into();

        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("--date"));
        assert!(rendered.contains("FIX: use a date on or before 2024-06-01"));
        assert_eq!(error_code(&err), "form");
    }

    #[test]
    fn invalid_config_names_the_file() {
        let err: anyhow::Error = InventoryError::InvalidConfig {
            file: PathBuf::from("inventaires.toml"),
            message: "expected a table".to_string(),
        }
        .into();

        let rendered = format_error_with(&err, false, true);
        assert!(rendered.contains("inventaires.toml"));
        assert_eq!(error_code(&err), "config");
    }

    #[test]
    fn foreign_errors_render_their_chain() {
        let err = anyhow::anyhow!("boom").context("loading");
        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("loading: boom"));
        assert_eq!(error_code(&err), "error");
    }
}
