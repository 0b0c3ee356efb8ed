//! InventorySet entity
//!
//! An ordered list of inventory records with at most one record per product.
//! The `index` keeps product id -> position so the uniqueness invariant holds
//! by construction rather than by scanning.

use std::collections::BTreeMap;

use crate::domain::entities::InventoryRecord;
use crate::domain::value_objects::ProductId;

/// What an upsert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// Appended at this position
    Inserted(usize),
    /// Replaced the existing record at this position
    Replaced(usize),
}

impl Upsert {
    pub fn position(self) -> usize {
        match self {
            Upsert::Inserted(i) | Upsert::Replaced(i) => i,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySet {
    records: Vec<InventoryRecord>,
    index: BTreeMap<ProductId, usize>,
}

impl InventorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace in place when the product already has a record, append otherwise
    pub fn upsert(&mut self, record: InventoryRecord) -> Upsert {
        if let Some(&pos) = self.index.get(&record.product_id) {
            self.records[pos] = record;
            return Upsert::Replaced(pos);
        }

        let pos = self.records.len();
        self.index.insert(record.product_id.clone(), pos);
        self.records.push(record);
        Upsert::Inserted(pos)
    }

    pub fn find(&self, product: &ProductId) -> Option<&InventoryRecord> {
        self.index.get(product).map(|&pos| &self.records[pos])
    }

    pub fn position(&self, product: &ProductId) -> Option<usize> {
        self.index.get(product).copied()
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryRecord> {
        self.records.iter()
    }
}

/// Collecting applies upsert in order, so duplicate products collapse onto the
/// first position with the last value.
impl FromIterator<InventoryRecord> for InventorySet {
    fn from_iter<I: IntoIterator<Item = InventoryRecord>>(iter: I) -> Self {
        let mut set = InventorySet::new();
        for record in iter {
            set.upsert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a InventorySet {
    type Item = &'a InventoryRecord;
    type IntoIter = std::slice::Iter<'a, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
