//! Locale value object - the display language of the UI
//!
//! Only display strings change with the locale. Persisted data and the CSV
//! header never do.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// The other locale (the language toggle)
    pub fn toggled(self) -> Self {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Lenient parse used for environment overrides
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fr" | "fr-fr" | "french" | "francais" | "français" => Some(Locale::Fr),
            "en" | "en-us" | "en-gb" | "english" => Some(Locale::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_between_two_locales() {
        assert_eq!(Locale::Fr.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("français"), Some(Locale::Fr));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn default_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
    }
}
