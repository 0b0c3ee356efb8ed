//! Inventory table renderer
//!
//! Columns are aligned on display width, so accented product names and
//! store names line up. Cells that carry color are padded after styling.

use inventaires::application::{InventoryTable, ProductCell, StockCell, StockLevel};
use inventaires::domain::value_objects::Locale;
use inventaires::i18n::{t, Message};

use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::ColoredText;

/// Render `rows` under `headers` as an aligned grid.
///
/// Every row must have as many cells as there are headers.
pub fn render_grid(
    headers: &[String],
    rows: &[Vec<ColoredText>],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| ColoredText::plain(h.as_str()).width())
        .collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let sep = format!(" {} ", BorderChar::Vertical.render(supports_unicode));
    let h = BorderChar::Horizontal.render(supports_unicode);
    let cross = format!("{h}{}{h}", BorderChar::Cross.render(supports_unicode));

    let mut out = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(text, w)| ColoredText::plain(text.as_str()).bold().render_padded(*w, supports_color))
        .collect();
    push_line(&mut out, &header_cells.join(&sep));

    let rule: Vec<String> = widths.iter().map(|w| h.repeat(*w)).collect();
    push_line(
        &mut out,
        &ColoredText::dim(rule.join(&cross)).render(supports_color),
    );

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| cell.render_padded(*w, supports_color))
            .collect();
        push_line(&mut out, &cells.join(&sep));
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the inventory table with localized placeholders.
pub fn render_inventory_table(
    table: &InventoryTable,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if table.is_empty() {
        return format!(
            "{}\n{}\n",
            t(locale, Message::NoRecords),
            ColoredText::dim(t(locale, Message::NoRecordsHint)).render(supports_color)
        );
    }

    let mut headers = vec![
        t(locale, Message::Date).to_string(),
        t(locale, Message::Product).to_string(),
    ];
    headers.extend(table.columns.iter().map(|c| c.name.clone()));

    let rows: Vec<Vec<ColoredText>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(row.cells.len() + 2);
            cells.push(ColoredText::plain(row.date.to_string()));
            cells.push(product_cell(&row.product, locale));
            cells.extend(row.cells.iter().map(|c| stock_cell(c, locale)));
            cells
        })
        .collect();

    render_grid(&headers, &rows, supports_color, supports_unicode)
}

/// Labels for a row picker: `date  product`
pub fn row_labels(table: &InventoryTable, locale: Locale) -> Vec<String> {
    table
        .rows
        .iter()
        .map(|row| format!("{}  {}", row.date, product_cell(&row.product, locale)))
        .collect()
}

fn product_cell(cell: &ProductCell, locale: Locale) -> ColoredText {
    match cell {
        ProductCell::Known { name } => ColoredText::plain(name.as_str()),
        ProductCell::Unknown { .. } => ColoredText::dim(t(locale, Message::UnknownProduct)),
    }
}

fn stock_cell(cell: &StockCell, locale: Locale) -> ColoredText {
    match cell {
        StockCell::Present {
            value,
            level: StockLevel::Low,
        } => ColoredText::warning(value.to_string()),
        StockCell::Present {
            value,
            level: StockLevel::Normal,
        } => ColoredText::plain(value.to_string()),
        StockCell::Missing => ColoredText::dim(t(locale, Message::NotAvailable)),
    }
}
