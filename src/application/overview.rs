//! Overview Controller
//!
//! Owns the catalog, the record store and the modal form. Every user action
//! is one synchronous method call on this struct.

use chrono::NaiveDate;

use crate::application::form::InventoryForm;
use crate::application::modal::Modal;
use crate::application::record_store::RecordStore;
use crate::application::table::{build_table, InventoryTable, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::domain::entities::{Catalog, InventoryRecord, Upsert};
use crate::domain::ports::{ExportReceipt, ExportSink, SnapshotRepository};
use crate::domain::services::{build_export, ExportTable};
use crate::domain::value_objects::{Locale, ProductId};
use crate::error::{InventoryError, InventoryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewSettings {
    pub locale: Locale,
    pub low_stock_threshold: u32,
}

impl Default for OverviewSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

pub struct OverviewController<R: SnapshotRepository> {
    catalog: Catalog,
    store: RecordStore<R>,
    modal: Modal<InventoryForm>,
    settings: OverviewSettings,
}

impl<R: SnapshotRepository> OverviewController<R> {
    pub fn new(catalog: Catalog, store: RecordStore<R>, settings: OverviewSettings) -> Self {
        Self {
            catalog,
            store,
            modal: Modal::Closed,
            settings,
        }
    }

    /// "Add inventory": open a blank form
    pub fn open_create(&mut self, today: NaiveDate) {
        tracing::debug!("form opened in create mode");
        self.modal
            .open(InventoryForm::create(&self.catalog, today));
    }

    /// Row selected: open the form seeded from that product's record.
    ///
    /// Returns `false` and leaves the modal as it was when the product has no
    /// record.
    pub fn open_edit(&mut self, product: &ProductId, today: NaiveDate) -> bool {
        let Some(record) = self.store.find_by_product(product) else {
            return false;
        };
        tracing::debug!(product = %product, "form opened in edit mode");
        let form = InventoryForm::edit(record, &self.catalog, today);
        self.modal.open(form);
        true
    }

    pub fn modal(&self) -> &Modal<InventoryForm> {
        &self.modal
    }

    pub fn form(&self) -> Option<&InventoryForm> {
        self.modal.get()
    }

    pub fn form_mut(&mut self) -> Option<&mut InventoryForm> {
        self.modal.get_mut()
    }

    /// Submit the open form, upsert the record and close the modal.
    ///
    /// A validation error leaves the modal open with its fields intact.
    pub fn save(&mut self) -> InventoryResult<Upsert> {
        let form = self.modal.get().ok_or(InventoryError::NoOpenForm)?;
        let record = form.submit()?;
        let outcome = self.store.upsert(record)?;
        self.modal.close();
        Ok(outcome)
    }

    /// Close the modal, dropping any in-progress edits
    pub fn cancel(&mut self) {
        if self.modal.close().is_some() {
            tracing::debug!("form cancelled");
        }
    }

    pub fn table(&self) -> InventoryTable {
        build_table(
            self.store.records(),
            &self.catalog,
            self.settings.low_stock_threshold,
        )
    }

    pub fn export_table(&self) -> ExportTable {
        build_export(self.store.records(), &self.catalog)
    }

    pub fn export(&self, sink: &impl ExportSink) -> InventoryResult<ExportReceipt> {
        let receipt = sink.deliver(&self.export_table())?;
        tracing::info!(rows = receipt.rows, destination = %receipt.destination, "inventory exported");
        Ok(receipt)
    }

    pub fn records(&self) -> &[InventoryRecord] {
        self.store.records()
    }

    pub fn record_store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.settings.locale
    }

    /// Language toggle
    pub fn toggle_locale(&mut self) -> Locale {
        self.settings.locale = self.settings.locale.toggled();
        self.settings.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::form::FormError;
    use crate::application::record_store::tests::{record, InMemorySnapshot};
    use crate::domain::entities::{Product, Store};
    use crate::domain::value_objects::StoreId;
    use std::cell::RefCell;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Store::new("S1", "S1", ""), Store::new("S2", "S2", "")],
            vec![Product::new("P1", "Ciment 50kg", 4500)],
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn controller() -> OverviewController<InMemorySnapshot> {
        let store = RecordStore::open(InMemorySnapshot::default()).unwrap();
        OverviewController::new(catalog(), store, OverviewSettings::default())
    }

    #[derive(Default)]
    struct BufferSink(RefCell<Vec<ExportTable>>);

    impl ExportSink for BufferSink {
        fn deliver(&self, table: &ExportTable) -> InventoryResult<ExportReceipt> {
            self.0.borrow_mut().push(table.clone());
            Ok(ExportReceipt {
                rows: table.len(),
                destination: "buffer".to_string(),
            })
        }
    }

    #[test]
    fn save_without_open_form_fails() {
        let mut c = controller();
        assert!(matches!(c.save(), Err(InventoryError::NoOpenForm)));
    }

    #[test]
    fn create_save_closes_modal() {
        let mut c = controller();
        c.open_create(today());
        let form = c.form_mut().unwrap();
        form.set_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        form.set_product(ProductId::from("P1")).unwrap();
        form.set_stock(&StoreId::from("S1"), 5).unwrap();

        assert_eq!(c.save().unwrap(), Upsert::Inserted(0));
        assert!(!c.modal().is_open());
        assert_eq!(c.records().len(), 1);
    }

    #[test]
    fn invalid_save_keeps_modal_open() {
        let mut c = controller();
        c.open_create(today());

        let err = c.save().unwrap_err();
        assert!(matches!(err, InventoryError::Form(FormError::MissingDate)));
        assert!(c.modal().is_open());
    }

    #[test]
    fn cancel_discards_edits() {
        let mut c = controller();
        c.open_create(today());
        c.form_mut()
            .unwrap()
            .set_stock(&StoreId::from("S1"), 99)
            .unwrap();
        c.cancel();

        assert!(!c.modal().is_open());
        assert!(c.records().is_empty());
    }

    #[test]
    fn open_edit_without_record_is_noop() {
        let mut c = controller();
        assert!(!c.open_edit(&ProductId::from("P1"), today()));
        assert!(!c.modal().is_open());
    }

    #[test]
    fn reopening_reseeds_every_field() {
        let mut c = controller();
        c.open_create(today());
        {
            let form = c.form_mut().unwrap();
            form.set_date(today()).unwrap();
            form.set_product(ProductId::from("P1")).unwrap();
            form.set_stock(&StoreId::from("S1"), 5).unwrap();
        }
        c.save().unwrap();

        assert!(c.open_edit(&ProductId::from("P1"), today()));
        c.form_mut()
            .unwrap()
            .set_stock(&StoreId::from("S2"), 40)
            .unwrap();

        c.open_create(today());
        let form = c.form().unwrap();
        assert_eq!(form.date(), None);
        assert_eq!(form.product(), None);
        assert!(form.stock().iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn export_uses_current_records() {
        let mut c = controller();
        c.open_create(today());
        {
            let form = c.form_mut().unwrap();
            form.set_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                .unwrap();
            form.set_product(ProductId::from("P1")).unwrap();
        }
        c.save().unwrap();

        let sink = BufferSink::default();
        let receipt = c.export(&sink).unwrap();

        assert_eq!(receipt.rows, 1);
        assert_eq!(sink.0.borrow()[0].headers, ["date", "produit", "S1", "S2"]);
    }

    #[test]
    fn scenario_create_edit_export() {
        let mut c = controller();

        c.open_create(today());
        {
            let form = c.form_mut().unwrap();
            form.set_date_input("2024-01-01").unwrap();
            form.set_product(ProductId::from("P1")).unwrap();
            form.set_stock_input(&StoreId::from("S1"), "5").unwrap();
            form.set_stock_input(&StoreId::from("S2"), "0").unwrap();
        }
        c.save().unwrap();

        let table = c.table();
        assert_eq!(table.rows.len(), 1);

        let selected = table.select(0).unwrap().clone();
        assert!(c.open_edit(&selected, today()));
        c.form_mut()
            .unwrap()
            .set_stock_input(&StoreId::from("S1"), "3")
            .unwrap();
        assert_eq!(c.save().unwrap(), Upsert::Replaced(0));

        let table = c.table();
        assert_eq!(table.rows.len(), 1);
        assert!(matches!(
            table.cell(&selected, &StoreId::from("S1")),
            Some(crate::application::table::StockCell::Present { value: 3, .. })
        ));

        let export = c.export_table();
        assert_eq!(export.rows[0].fields(), ["2024-01-01", "Ciment 50kg", "3", "0"]);
    }

    #[test]
    fn toggle_locale_flips_language() {
        let mut c = controller();
        assert_eq!(c.locale(), Locale::Fr);
        assert_eq!(c.toggle_locale(), Locale::En);
    }

    #[test]
    fn records_seeded_from_snapshot() {
        let repo = InMemorySnapshot::default();
        {
            let mut store = RecordStore::open(repo.clone()).unwrap();
            store
                .upsert(record("P1", "2024-01-01", &[("S1", 1), ("S2", 2)]))
                .unwrap();
        }
        let c = OverviewController::new(
            catalog(),
            RecordStore::open(repo).unwrap(),
            OverviewSettings::default(),
        );
        assert_eq!(c.table().rows.len(), 1);
    }
}
