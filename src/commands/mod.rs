//! Command handlers for the `inventaires` binary.
//!
//! Each handler takes the resolved configuration and UI context, drives the
//! overview controller, and renders the result as text or NDJSON.

pub mod add;
pub mod catalog;
pub mod edit;
pub mod export;
pub mod interactive;
pub mod list;

use anyhow::Result;
use chrono::NaiveDate;

use inventaires::application::InventoryForm;
use inventaires::config::Config;
use inventaires::domain::entities::{Catalog, Upsert};
use inventaires::domain::ports::SnapshotRepository;
use inventaires::domain::value_objects::ProductId;
use inventaires::i18n::{t, Message};
use inventaires::presentation::{create_overview, ConcreteOverview, StockArg};
use inventaires::InventoryError;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{DataEvent, SavedData};
use crate::ui::output::{report_recovered, warn};
use crate::ui::prompt::{fill_form, PromptPlan};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Open the snapshot and warn when it had to be reset
pub fn open_overview(config: &Config, ui: &UiContext, command: &str) -> Result<ConcreteOverview> {
    let overview = create_overview(config)?;
    if let Some(recovered) = overview.record_store().recovered() {
        report_recovered(ui, command, recovered);
    }
    Ok(overview)
}

/// Catalog product for `key` (id, then name); `None` when not in the catalog
pub fn resolve_product(catalog: &Catalog, key: &str) -> Option<ProductId> {
    catalog.resolve_product(key).map(|p| p.id.clone())
}

/// Apply `STORE=N` arguments to the form
pub fn apply_stock_args(
    form: &mut InventoryForm,
    catalog: &Catalog,
    stock: &[StockArg],
) -> Result<()> {
    for arg in stock {
        let store = catalog
            .resolve_store(&arg.store)
            .ok_or_else(|| InventoryError::UnknownStore {
                store: arg.store.clone(),
            })?;
        form.set_stock_input(&store.id, &arg.value)
            .map_err(InventoryError::from)?;
    }
    Ok(())
}

/// Prompt for the open form and save it.
///
/// Validation errors are shown and the prompts start again with the fields
/// kept. Returns `None` when the user declines to save.
pub fn prompt_and_save(
    overview: &mut ConcreteOverview,
    plan: PromptPlan,
    ui: &UiContext,
) -> Result<Option<Upsert>> {
    let catalog = overview.catalog().clone();
    let mut plan = plan;

    loop {
        let Some(form) = overview.form_mut() else {
            return Err(InventoryError::NoOpenForm.into());
        };
        if !fill_form(form, &catalog, plan, ui)? {
            overview.cancel();
            return Ok(None);
        }

        match overview.save() {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(InventoryError::Form(e)) => {
                warn(ui, "form", &e.to_string());
                plan = PromptPlan::all();
            }
            Err(e) => {
                overview.cancel();
                return Err(e.into());
            }
        }
    }
}

/// Print the outcome of a save
pub fn report_saved(
    overview: &ConcreteOverview,
    outcome: Upsert,
    command: &str,
    ui: &UiContext,
) -> Result<()> {
    let Some(record) = overview.records().get(outcome.position()) else {
        return Ok(());
    };

    if ui.json {
        let data = SavedData {
            outcome: match outcome {
                Upsert::Inserted(_) => "inserted",
                Upsert::Replaced(_) => "replaced",
            },
            position: outcome.position(),
            record,
        };
        emit_event(&DataEvent::new(command, data))?;
        return Ok(());
    }

    let locale = ui.locale;
    let product = overview
        .catalog()
        .product(&record.product_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| t(locale, Message::UnknownProduct).to_string());

    let mut summary = ResultSummary::success(t(locale, Message::Saved));
    summary.add_detail(t(locale, Message::Product), product);
    summary.add_detail(t(locale, Message::Date), record.date.to_string());
    summary.add_detail(
        t(locale, Message::Snapshot),
        overview.record_store().repository().location(),
    );
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

pub fn report_cancelled(ui: &UiContext) {
    if !ui.json {
        println!("{}", t(ui.locale, Message::Cancelled));
    }
}
