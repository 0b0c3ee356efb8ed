use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed outcome of a save or export
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    details: Vec<(String, String)>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
        }
    }

    pub fn add_detail(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.details.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut b = Box::with_title(header).style(BoxStyle::Success);
        if self.details.is_empty() {
            return b.render(supports_color, supports_unicode);
        }

        b.add_empty();
        let label_width = self
            .details
            .iter()
            .map(|(label, _)| ColoredText::plain(label.as_str()).width())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.details {
            let label = ColoredText::dim(label.as_str()).render_padded(label_width, supports_color);
            b.add_line(format!("{}  {}", label, value));
        }

        b.render(supports_color, supports_unicode)
    }
}
