//! The interactive overview: the table, then an action menu, until quit.

use anyhow::Result;
use dialoguer::Select;

use inventaires::config::Config;
use inventaires::domain::ports::SnapshotRepository;
use inventaires::i18n::{t, Message};
use inventaires::presentation::ConcreteOverview;

use crate::commands::export::export_with;
use crate::commands::{list, open_overview, prompt_and_save, report_cancelled, report_saved, today};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::prompt::PromptPlan;
use crate::ui::theme::InventoryTheme;
use crate::ui::views::table::{render_inventory_table, row_labels};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Export,
    SwitchLanguage,
    Quit,
}

impl Action {
    fn label(self, ui: &UiContext) -> &'static str {
        let message = match self {
            Action::Add => Message::AddInventory,
            Action::Edit => Message::EditInventory,
            Action::Export => Message::ExportCsv,
            Action::SwitchLanguage => Message::SwitchLanguage,
            Action::Quit => Message::Quit,
        };
        t(ui.locale, message)
    }
}

fn actions(has_records: bool) -> Vec<Action> {
    let mut actions = vec![Action::Add];
    if has_records {
        actions.push(Action::Edit);
    }
    actions.extend([Action::Export, Action::SwitchLanguage, Action::Quit]);
    actions
}

pub fn cmd_interactive(config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.interactive() {
        return list::cmd_list(config, ui);
    }

    let mut overview = open_overview(config, ui, "interactive")?;
    let mut ui = *ui;

    loop {
        print_overview(&overview, &ui);

        let theme = InventoryTheme::new(ui.unicode);
        let actions = actions(!overview.records().is_empty());
        let labels: Vec<&str> = actions.iter().map(|a| a.label(&ui)).collect();
        let Some(index) = Select::with_theme(&theme)
            .with_prompt(t(ui.locale, Message::ChooseAction))
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match actions.get(index).copied().unwrap_or(Action::Quit) {
            Action::Add => {
                overview.open_create(today());
                run_form(&mut overview, PromptPlan::all(), &ui)?;
            }
            Action::Edit => {
                let table = overview.table();
                let Some(row) = Select::with_theme(&theme)
                    .with_prompt(t(ui.locale, Message::ChooseRow))
                    .items(&row_labels(&table, ui.locale))
                    .default(0)
                    .interact_opt()?
                else {
                    continue;
                };
                let Some(product) = table.select(row).cloned() else {
                    continue;
                };
                if overview.open_edit(&product, today()) {
                    run_form(&mut overview, PromptPlan::all(), &ui)?;
                }
            }
            Action::Export => {
                if let Err(e) = export_with(&overview, config, &ui, None) {
                    crate::ui::error::print_error(&e, false);
                }
            }
            Action::SwitchLanguage => {
                let locale = overview.toggle_locale();
                ui = ui.with_locale(locale);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Prompt and save; a failed save is shown and the loop goes on
fn run_form(overview: &mut ConcreteOverview, plan: PromptPlan, ui: &UiContext) -> Result<()> {
    match prompt_and_save(overview, plan, ui) {
        Ok(Some(outcome)) => report_saved(overview, outcome, "interactive", ui),
        Ok(None) => {
            report_cancelled(ui);
            Ok(())
        }
        Err(e) if e.downcast_ref::<dialoguer::Error>().is_some() => Err(e),
        Err(e) => {
            crate::ui::error::print_error(&e, false);
            Ok(())
        }
    }
}

fn print_overview(overview: &ConcreteOverview, ui: &UiContext) {
    let mut header = CommandHeader::new(Icon::Inventory, t(ui.locale, Message::AppTitle));
    header.add(
        t(ui.locale, Message::Snapshot),
        overview.record_store().repository().location(),
    );
    println!();
    println!("{}", header.render(ui.color, ui.unicode));
    println!(
        "{}",
        render_inventory_table(&overview.table(), ui.locale, ui.color, ui.unicode)
    );
}
