use inventaires::domain::entities::Catalog;
use inventaires::domain::value_objects::Locale;
use inventaires::i18n::{t, Message};

use crate::ui::primitives::text::ColoredText;
use crate::ui::views::table::render_grid;

pub fn render_catalog(
    catalog: &Catalog,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(
        &ColoredText::info(t(locale, Message::Stores))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    let headers = vec![
        "id".to_string(),
        t(locale, Message::Store).to_string(),
        t(locale, Message::Address).to_string(),
    ];
    let rows: Vec<Vec<ColoredText>> = catalog
        .stores()
        .iter()
        .map(|s| {
            vec![
                ColoredText::dim(s.id.as_str()),
                ColoredText::plain(s.name.as_str()),
                ColoredText::plain(s.address.as_str()),
            ]
        })
        .collect();
    out.push_str(&render_grid(&headers, &rows, supports_color, supports_unicode));

    out.push('\n');
    out.push_str(
        &ColoredText::info(t(locale, Message::Products))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    let headers = vec![
        "id".to_string(),
        t(locale, Message::Product).to_string(),
        t(locale, Message::Price).to_string(),
    ];
    let rows: Vec<Vec<ColoredText>> = catalog
        .products()
        .iter()
        .map(|p| {
            vec![
                ColoredText::dim(p.id.as_str()),
                ColoredText::plain(p.name.as_str()),
                ColoredText::plain(p.price.to_string()),
            ]
        })
        .collect();
    out.push_str(&render_grid(&headers, &rows, supports_color, supports_unicode));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventaires::domain::entities::{Product, Store};

    #[test]
    fn lists_stores_then_products() {
        let catalog = Catalog::new(
            vec![Store::new("1", "Mahima", "Bastos")],
            vec![Product::new("7", "Savon", 350)],
        )
        .unwrap();

        let rendered = render_catalog(&catalog, Locale::En, false, false);
        let stores = rendered.find("Stores").unwrap();
        let products = rendered.find("Products").unwrap();
        assert!(stores < products);
        assert!(rendered.contains("1  | Mahima | Bastos"));
        assert!(rendered.contains("7  | Savon   | 350"));
    }
}
