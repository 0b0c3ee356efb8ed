use anyhow::Result;
use serde::Serialize;

use inventaires::config::Config;
use inventaires::domain::ports::SnapshotRepository;
use inventaires::i18n::{t, Message};

use crate::commands::open_overview;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, RowData, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::table::render_inventory_table;

#[derive(Serialize)]
struct ColumnData {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct ListData {
    locale: &'static str,
    columns: Vec<ColumnData>,
    rows: Vec<RowData>,
}

pub fn cmd_list(config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("list"))?;
    }

    let overview = open_overview(config, ui, "list")?;
    let table = overview.table();

    if ui.json {
        let data = ListData {
            locale: ui.locale.code(),
            columns: table
                .columns
                .iter()
                .map(|c| ColumnData {
                    id: c.store.to_string(),
                    name: c.name.clone(),
                })
                .collect(),
            rows: RowData::from_table(&table),
        };
        emit_event(&DataEvent::new("list", data))?;
        emit_event(&CompleteEvent::success("list"))?;
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Inventory, t(ui.locale, Message::AppTitle));
    header.add(
        t(ui.locale, Message::Snapshot),
        overview.record_store().repository().location(),
    );
    header.add(
        t(ui.locale, Message::Records),
        overview.records().len().to_string(),
    );
    println!("{}", header.render(ui.color, ui.unicode));
    print!(
        "{}",
        render_inventory_table(&table, ui.locale, ui.color, ui.unicode)
    );
    Ok(())
}
