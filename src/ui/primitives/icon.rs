use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Inventory,
    Export,
    Catalog,
    Edit,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Inventory) => theme::icons::INVENTORY,
            (true, Icon::Export) => theme::icons::EXPORT,
            (true, Icon::Catalog) => theme::icons::CATALOG,
            (true, Icon::Edit) => theme::icons::EDIT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Inventory) => theme::icons_ascii::INVENTORY,
            (false, Icon::Export) => theme::icons_ascii::EXPORT,
            (false, Icon::Catalog) => theme::icons_ascii::CATALOG,
            (false, Icon::Edit) => theme::icons_ascii::EDIT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Inventory | Icon::Export | Icon::Catalog | Icon::Edit => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
