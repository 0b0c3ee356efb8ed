use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use inventaires::config::Config;
use inventaires::i18n::{t, Message};
use inventaires::infrastructure::export::to_csv_string;
use inventaires::infrastructure::CsvDestination;
use inventaires::presentation::{create_csv_exporter, ConcreteOverview};

use crate::commands::open_overview;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::primitives::icon::Icon;

#[derive(Serialize)]
struct ExportData {
    rows: usize,
    destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    csv: Option<String>,
}

pub fn cmd_export(config: &Config, ui: &UiContext, output: Option<&Path>) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("export"))?;
    }

    let overview = open_overview(config, ui, "export")?;
    export_with(&overview, config, ui, output)?;

    if ui.json {
        emit_event(&CompleteEvent::success("export"))?;
    }
    Ok(())
}

/// Export and report; shared with the interactive overview
pub fn export_with(
    overview: &ConcreteOverview,
    config: &Config,
    ui: &UiContext,
    output: Option<&Path>,
) -> Result<()> {
    let exporter = create_csv_exporter(config, output);

    // With --json, stdout carries events, so the CSV goes inside one.
    if ui.json && exporter.destination() == &CsvDestination::Stdout {
        let table = overview.export_table();
        let data = ExportData {
            rows: table.len(),
            destination: "stdout".to_string(),
            csv: Some(to_csv_string(&table)?),
        };
        emit_event(&DataEvent::new("export", data))?;
        return Ok(());
    }

    let receipt = overview.export(&exporter)?;

    if ui.json {
        let data = ExportData {
            rows: receipt.rows,
            destination: receipt.destination,
            csv: None,
        };
        emit_event(&DataEvent::new("export", data))?;
        return Ok(());
    }

    if exporter.destination() == &CsvDestination::Stdout {
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Export, t(ui.locale, Message::ExportCsv));
    header.add(t(ui.locale, Message::Snapshot), receipt.destination.as_str());
    println!("{}", header.render(ui.color, ui.unicode));

    let mut summary = ResultSummary::success(t(ui.locale, Message::Exported));
    summary.add_detail(t(ui.locale, Message::Records), receipt.rows.to_string());
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}
