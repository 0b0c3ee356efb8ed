//! Display strings for the two supported locales
//!
//! Every user-facing label goes through [`Message::text`]. Stored data and
//! the CSV header are never translated.

use crate::domain::value_objects::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    AppTitle,
    AddInventory,
    EditInventory,
    ExportCsv,
    SwitchLanguage,
    Quit,
    ChooseAction,
    ChooseRow,
    Date,
    Product,
    Stock,
    Store,
    Address,
    Price,
    Stores,
    Products,
    Records,
    Save,
    Cancel,
    SelectProduct,
    UnknownProduct,
    NotAvailable,
    NoRecords,
    NoRecordsHint,
    Saved,
    Cancelled,
    Exported,
    Snapshot,
    RecoveredSnapshot,
    LowStock,
    DateHint,
    StockHint,
    ConfirmSave,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fr => self.fr(),
            Locale::En => self.en(),
        }
    }

    fn fr(self) -> &'static str {
        match self {
            Message::AppTitle => "Gestion des Inventaires",
            Message::AddInventory => "Ajouter un inventaire",
            Message::EditInventory => "Modifier un inventaire",
            Message::ExportCsv => "Exporter en CSV",
            Message::SwitchLanguage => "English",
            Message::Quit => "Quitter",
            Message::ChooseAction => "Que voulez-vous faire ?",
            Message::ChooseRow => "Choisissez la ligne à modifier",
            Message::Date => "Date",
            Message::Product => "Produit",
            Message::Stock => "Stock",
            Message::Store => "Magasin",
            Message::Address => "Adresse",
            Message::Price => "Prix",
            Message::Stores => "Magasins",
            Message::Products => "Produits",
            Message::Records => "Inventaires",
            Message::Save => "Enregistrer",
            Message::Cancel => "Annuler",
            Message::SelectProduct => "Sélectionnez un produit",
            Message::UnknownProduct => "Produit inconnu",
            Message::NotAvailable => "N/A",
            Message::NoRecords => "Aucun inventaire enregistré.",
            Message::NoRecordsHint => "Lancez `inventaires add` pour saisir le premier.",
            Message::Saved => "Inventaire enregistré",
            Message::Cancelled => "Modification annulée",
            Message::Exported => "Export terminé",
            Message::Snapshot => "Fichier",
            Message::RecoveredSnapshot => {
                "Le fichier d'inventaire était illisible ; démarrage à vide."
            }
            Message::LowStock => "stock faible",
            Message::DateHint => "AAAA-MM-JJ",
            Message::StockHint => "entier ≥ 0",
            Message::ConfirmSave => "Enregistrer cet inventaire ?",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Message::AppTitle => "Inventory Management",
            Message::AddInventory => "Add inventory",
            Message::EditInventory => "Edit inventory",
            Message::ExportCsv => "Export CSV",
            Message::SwitchLanguage => "Français",
            Message::Quit => "Quit",
            Message::ChooseAction => "What would you like to do?",
            Message::ChooseRow => "Choose the row to edit",
            Message::Date => "Date",
            Message::Product => "Product",
            Message::Stock => "Stock",
            Message::Store => "Store",
            Message::Address => "Address",
            Message::Price => "Price",
            Message::Stores => "Stores",
            Message::Products => "Products",
            Message::Records => "Inventories",
            Message::Save => "Save",
            Message::Cancel => "Cancel",
            Message::SelectProduct => "Select a product",
            Message::UnknownProduct => "Unknown product",
            Message::NotAvailable => "N/A",
            Message::NoRecords => "No inventory recorded yet.",
            Message::NoRecordsHint => "Run `inventaires add` to enter the first one.",
            Message::Saved => "Inventory saved",
            Message::Cancelled => "Edit cancelled",
            Message::Exported => "Export complete",
            Message::Snapshot => "File",
            Message::RecoveredSnapshot => "The inventory file was unreadable; starting empty.",
            Message::LowStock => "low stock",
            Message::DateHint => "YYYY-MM-DD",
            Message::StockHint => "integer ≥ 0",
            Message::ConfirmSave => "Save this inventory?",
        }
    }
}

/// Shorthand for `message.text(locale)`
pub fn t(locale: Locale, message: Message) -> &'static str {
    message.text(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locales_differ_for_titles() {
        assert_eq!(t(Locale::Fr, Message::AppTitle), "Gestion des Inventaires");
        assert_eq!(t(Locale::En, Message::AppTitle), "Inventory Management");
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(t(Locale::Fr, Message::SwitchLanguage), "English");
        assert_eq!(t(Locale::En, Message::SwitchLanguage), "Français");
    }
}
