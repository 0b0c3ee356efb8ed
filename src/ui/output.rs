use inventaires::application::RecoveredSnapshot;
use inventaires::config::ConfigWarning;
use inventaires::i18n::{t, Message};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::WarningEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line warning on stderr, or a `warning` event in JSON mode
pub fn warn(ui: &UiContext, command: &str, message: &str) {
    if ui.json {
        let _ = emit_event(&WarningEvent::new(command, message));
        return;
    }

    eprintln!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(message).render(ui.color)
    );
}

pub fn format_config_warning(w: &ConfigWarning) -> String {
    let mut message = match w.line {
        Some(line) => format!(
            "Unknown config key '{}' in {}:{}",
            w.key,
            w.file.display(),
            line
        ),
        None => format!("Unknown config key '{}' in {}", w.key, w.file.display()),
    };
    if let Some(suggestion) = &w.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}

pub fn print_config_warnings(ui: &UiContext, command: &str, warnings: &[ConfigWarning]) {
    for w in warnings {
        warn(ui, command, &format_config_warning(w));
    }
}

/// Tell the user the snapshot was unreadable and where it went
pub fn report_recovered(ui: &UiContext, command: &str, recovered: &RecoveredSnapshot) {
    let mut message = t(ui.locale, Message::RecoveredSnapshot).to_string();
    if let Some(moved) = &recovered.moved_to {
        message.push_str(&format!(" ({})", moved.display()));
    }
    warn(ui, command, &message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_warning_includes_line_and_suggestion() {
        let w = ConfigWarning {
            key: "locle".to_string(),
            file: PathBuf::from("inventaires.toml"),
            line: Some(3),
            suggestion: Some("locale".to_string()),
        };
        assert_eq!(
            format_config_warning(&w),
            "Unknown config key 'locle' in inventaires.toml:3 (did you mean 'locale'?)"
        );
    }

    #[test]
    fn config_warning_without_line() {
        let w = ConfigWarning {
            key: "zzz".to_string(),
            file: PathBuf::from("config.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(
            format_config_warning(&w),
            "Unknown config key 'zzz' in config.toml"
        );
    }
}
