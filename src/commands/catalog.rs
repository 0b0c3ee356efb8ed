use anyhow::Result;
use serde::Serialize;

use inventaires::config::Config;
use inventaires::domain::entities::{Product, Store};
use inventaires::i18n::{t, Message};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::catalog::render_catalog;

#[derive(Serialize)]
struct CatalogData<'a> {
    stores: &'a [Store],
    products: &'a [Product],
}

pub fn cmd_catalog(config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = config.catalog()?;

    if ui.json {
        emit_event(&StartEvent::new("catalog"))?;
        emit_event(&DataEvent::new(
            "catalog",
            CatalogData {
                stores: catalog.stores(),
                products: catalog.products(),
            },
        ))?;
        emit_event(&CompleteEvent::success("catalog"))?;
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Catalog, t(ui.locale, Message::AppTitle));
    header.add(
        t(ui.locale, Message::Stores),
        catalog.stores().len().to_string(),
    );
    header.add(
        t(ui.locale, Message::Products),
        catalog.products().len().to_string(),
    );
    println!("{}", header.render(ui.color, ui.unicode));
    print!(
        "{}",
        render_catalog(&catalog, ui.locale, ui.color, ui.unicode)
    );
    Ok(())
}
