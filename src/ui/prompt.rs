//! Terminal prompts that fill an open inventory form.
//!
//! Each field is asked until the form accepts it; the form itself applies the
//! date bound and the stock coercion rules.

use anyhow::Result;
use dialoguer::{Confirm, FuzzySelect, Input};

use inventaires::application::InventoryForm;
use inventaires::domain::entities::Catalog;
use inventaires::i18n::{t, Message};

use crate::ui::context::UiContext;
use crate::ui::output::warn;
use crate::ui::theme::InventoryTheme;
use crate::ui::views::form::render_form_preview;

/// Which fields still need a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptPlan {
    pub date: bool,
    pub product: bool,
    pub stock: bool,
}

impl PromptPlan {
    pub fn all() -> Self {
        Self {
            date: true,
            product: true,
            stock: true,
        }
    }
}

/// Ask for every field in `plan`, then show a preview and ask to save.
///
/// Returns `false` when the user declines the confirmation.
pub fn fill_form(
    form: &mut InventoryForm,
    catalog: &Catalog,
    plan: PromptPlan,
    ui: &UiContext,
) -> Result<bool> {
    let theme = InventoryTheme::new(ui.unicode);
    let locale = ui.locale;

    if plan.date {
        loop {
            let initial = form.date().unwrap_or(form.max_date()).to_string();
            let raw: String = Input::with_theme(&theme)
                .with_prompt(format!(
                    "{} ({})",
                    t(locale, Message::Date),
                    t(locale, Message::DateHint)
                ))
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()?;
            match form.set_date_input(&raw) {
                Ok(_) => break,
                Err(e) => warn(ui, "form", &e.to_string()),
            }
        }
    }

    let current = form
        .product()
        .and_then(|id| catalog.products().iter().position(|p| &p.id == id));
    // A record whose product left the catalog keeps its product.
    if plan.product && !(form.is_edit() && current.is_none()) {
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        let index = FuzzySelect::with_theme(&theme)
            .with_prompt(t(locale, Message::SelectProduct))
            .items(&names)
            .default(current.unwrap_or(0))
            .interact()?;
        if let Some(product) = catalog.products().get(index) {
            form.set_product(product.id.clone())?;
        }
    }

    if plan.stock {
        for store in catalog.stores() {
            loop {
                let initial = form.stock_for(&store.id).unwrap_or(0).to_string();
                let raw: String = Input::with_theme(&theme)
                    .with_prompt(format!(
                        "{} {} ({})",
                        t(locale, Message::Stock),
                        store.name,
                        t(locale, Message::StockHint)
                    ))
                    .with_initial_text(initial)
                    .allow_empty(true)
                    .interact_text()?;
                match form.set_stock_input(&store.id, &raw) {
                    Ok(_) => break,
                    Err(e) => warn(ui, "form", &e.to_string()),
                }
            }
        }
    }

    eprint!(
        "{}",
        render_form_preview(form, catalog, locale, ui.color, ui.unicode)
    );

    let save = Confirm::with_theme(&theme)
        .with_prompt(t(locale, Message::ConfirmSave))
        .default(true)
        .interact()?;
    Ok(save)
}
