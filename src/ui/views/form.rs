use inventaires::application::InventoryForm;
use inventaires::domain::entities::Catalog;
use inventaires::domain::value_objects::Locale;
use inventaires::i18n::{t, Message};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;

/// Boxed summary of the form's current fields, shown before saving
pub fn render_form_preview(
    form: &InventoryForm,
    catalog: &Catalog,
    locale: Locale,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = if form.is_edit() {
        (Icon::Edit, t(locale, Message::EditInventory))
    } else {
        (Icon::Inventory, t(locale, Message::AddInventory))
    };
    let title = format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color)
    );

    let unset = || ColoredText::dim("-").render(supports_color);

    let mut fields: Vec<(String, String)> = vec![
        (
            t(locale, Message::Date).to_string(),
            form.date().map(|d| d.to_string()).unwrap_or_else(unset),
        ),
        (
            t(locale, Message::Product).to_string(),
            form.product()
                .map(|id| match catalog.product(id) {
                    Some(p) => p.name.clone(),
                    None => ColoredText::dim(t(locale, Message::UnknownProduct))
                        .render(supports_color),
                })
                .unwrap_or_else(unset),
        ),
    ];
    for (store, value) in form.stock() {
        let label = catalog
            .store(store)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| store.to_string());
        fields.push((label, value.to_string()));
    }

    let label_width = fields
        .iter()
        .map(|(label, _)| ColoredText::plain(label.as_str()).width())
        .max()
        .unwrap_or(0);

    let mut b = Box::with_title(title);
    b.add_empty();
    for (label, value) in fields {
        b.add_line(format!(
            "{}  {}",
            ColoredText::dim(label).render_padded(label_width, supports_color),
            value
        ));
    }
    b.render(supports_color, supports_unicode)
}
