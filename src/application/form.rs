//! Inventory form state
//!
//! The form has two modes. Create starts blank with zero stock for every
//! store; edit is seeded from an existing record. Opening the form again
//! always reseeds every field, so no state leaks between records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::{Catalog, InventoryRecord};
use crate::domain::value_objects::{ProductId, StoreId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("date is required")]
    MissingDate,

    #[error("product is required")]
    MissingProduct,

    #[error("invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("date {date} is after {max}")]
    DateInFuture { date: NaiveDate, max: NaiveDate },

    #[error("unknown product '{product}'")]
    UnknownProduct { product: ProductId },

    #[error("unknown store '{store}'")]
    UnknownStore { store: StoreId },

    #[error("stock must be 0 or more (got {value})")]
    NegativeStock { value: String },

    #[error("stock must be at most {max} (got {value})")]
    StockTooLarge { value: String, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the record that belonged to this product when the form opened
    Edit(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryForm {
    mode: FormMode,
    max_date: NaiveDate,
    date: Option<NaiveDate>,
    product: Option<ProductId>,
    /// Catalog stores in display order
    stock: Vec<(StoreId, u32)>,
    /// Entries of the seeding record for stores the catalog no longer has
    carried: BTreeMap<StoreId, u32>,
    products: Vec<ProductId>,
}

impl InventoryForm {
    /// Blank form: no date, no product, zero stock for every store
    pub fn create(catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            max_date: today,
            date: None,
            product: None,
            stock: catalog.stores().iter().map(|s| (s.id.clone(), 0)).collect(),
            carried: BTreeMap::new(),
            products: catalog.products().iter().map(|p| p.id.clone()).collect(),
        }
    }

    /// Form seeded from `record`
    pub fn edit(record: &InventoryRecord, catalog: &Catalog, today: NaiveDate) -> Self {
        let stock = catalog
            .stores()
            .iter()
            .map(|s| (s.id.clone(), record.stock_for(&s.id).unwrap_or(0)))
            .collect();
        let carried = record
            .stock
            .iter()
            .filter(|(id, _)| catalog.store(id).is_none())
            .map(|(id, v)| (id.clone(), *v))
            .collect();

        Self {
            mode: FormMode::Edit(record.product_id.clone()),
            max_date: today,
            date: Some(record.date),
            product: Some(record.product_id.clone()),
            stock,
            carried,
            products: catalog.products().iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Latest date the form accepts
    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), FormError> {
        if date > self.max_date {
            return Err(FormError::DateInFuture {
                date,
                max: self.max_date,
            });
        }
        self.date = Some(date);
        Ok(())
    }

    /// Parse an ISO date typed by the user
    pub fn set_date_input(&mut self, raw: &str) -> Result<NaiveDate, FormError> {
        let date = parse_date_input(raw)?;
        self.set_date(date)?;
        Ok(date)
    }

    pub fn product(&self) -> Option<&ProductId> {
        self.product.as_ref()
    }

    pub fn set_product(&mut self, product: ProductId) -> Result<(), FormError> {
        if !self.products.contains(&product) {
            return Err(FormError::UnknownProduct { product });
        }
        self.product = Some(product);
        Ok(())
    }

    /// Stock per catalog store, in catalog order
    pub fn stock(&self) -> &[(StoreId, u32)] {
        &self.stock
    }

    pub fn stock_for(&self, store: &StoreId) -> Option<u32> {
        self.stock
            .iter()
            .find(|(id, _)| id == store)
            .map(|(_, v)| *v)
    }

    pub fn set_stock(&mut self, store: &StoreId, value: u32) -> Result<(), FormError> {
        match self.stock.iter_mut().find(|(id, _)| id == store) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(FormError::UnknownStore {
                store: store.clone(),
            }),
        }
    }

    /// Apply raw text from a stock field. See [`parse_stock_input`].
    pub fn set_stock_input(&mut self, store: &StoreId, raw: &str) -> Result<u32, FormError> {
        let value = parse_stock_input(raw)?;
        self.set_stock(store, value)?;
        Ok(value)
    }

    /// Package the fields into a record
    pub fn submit(&self) -> Result<InventoryRecord, FormError> {
        let date = self.date.ok_or(FormError::MissingDate)?;
        let product = self.product.clone().ok_or(FormError::MissingProduct)?;

        let mut stock = self.carried.clone();
        stock.extend(self.stock.iter().cloned());

        Ok(InventoryRecord::new(date, product, stock))
    }
}

/// Parse a stock field.
///
/// An optional sign followed by digits is a number: negative numbers and
/// numbers above `u32::MAX` are rejected, whatever their length. Anything
/// else, blank input included, counts as 0.
pub fn parse_stock_input(raw: &str) -> Result<u32, FormError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(0);
    }

    let magnitude = digits.trim_start_matches('0');
    if negative && !magnitude.is_empty() {
        return Err(FormError::NegativeStock {
            value: trimmed.to_string(),
        });
    }
    if magnitude.is_empty() {
        return Ok(0);
    }

    magnitude.parse::<u32>().map_err(|_| FormError::StockTooLarge {
        value: trimmed.to_string(),
        max: u32::MAX,
    })
}

pub fn parse_date_input(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        input: raw.trim().to_string(),
    })
}
