use anyhow::Result;

use inventaires::config::Config;
use inventaires::presentation::StockArg;
use inventaires::InventoryError;

use crate::commands::{
    apply_stock_args, open_overview, prompt_and_save, report_cancelled, report_saved,
    resolve_product, today,
};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::prompt::PromptPlan;

/// Flags given to `add`
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub date: Option<String>,
    pub product: Option<String>,
    pub stock: Vec<StockArg>,
    pub yes: bool,
}

pub fn cmd_add(config: &Config, ui: &UiContext, args: AddArgs) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("add"))?;
    }

    let mut overview = open_overview(config, ui, "add")?;
    let catalog = overview.catalog().clone();
    overview.open_create(today());

    let form = overview.form_mut().ok_or(InventoryError::NoOpenForm)?;
    if let Some(date) = &args.date {
        form.set_date_input(date).map_err(InventoryError::from)?;
    }
    if let Some(key) = &args.product {
        let id = resolve_product(&catalog, key).ok_or_else(|| InventoryError::UnknownProduct {
            product: key.clone(),
        })?;
        form.set_product(id).map_err(InventoryError::from)?;
    }
    apply_stock_args(form, &catalog, &args.stock)?;

    let outcome = if ui.interactive() && !args.yes {
        let plan = PromptPlan {
            date: args.date.is_none(),
            product: args.product.is_none(),
            stock: args.stock.is_empty(),
        };
        match prompt_and_save(&mut overview, plan, ui)? {
            Some(outcome) => outcome,
            None => {
                report_cancelled(ui);
                return Ok(());
            }
        }
    } else {
        overview.save()?
    };

    report_saved(&overview, outcome, "add", ui)?;
    if ui.json {
        emit_event(&CompleteEvent::success("add"))?;
    }
    Ok(())
}
