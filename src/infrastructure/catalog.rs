//! Built-in catalog
//!
//! Used whenever the configuration does not list its own stores or products.

use crate::domain::entities::{Catalog, Product, Store};
use crate::error::InventoryResult;

const STORES: &[(&str, &str, &str)] = &[
    ("1", "Fokou", "Carrefour Mvog-Mbi, Yaoundé"),
    ("2", "Super U", "Avenue Kennedy, Yaoundé"),
    ("3", "Orca Deco", "Warda, Yaoundé"),
    ("4", "Santa Lucia", "Marché Mokolo, Yaoundé"),
    ("5", "Mahima", "Quartier Central, Yaoundé"),
];

const PRODUCTS: &[(&str, &str, u64)] = &[
    ("1", "Ciment 50kg", 4500),
    ("2", "Fer à béton 12mm", 3000),
    ("3", "Tôle ondulée", 6000),
    ("4", "Riz parfumé 5kg", 4500),
    ("5", "Lait en poudre 400g", 2500),
    ("6", "Eau minérale 1,5L", 500),
    ("7", "Table basse en bois", 35000),
    ("8", "Canapé 3 places", 150000),
    ("9", "Lampe de chevet", 15000),
    ("10", "Haricots rouges 2kg", 2500),
    ("11", "Poulet entier", 5000),
    ("12", "Tomates en conserve 800g", 1200),
    ("13", "T-shirt coton", 3500),
    ("14", "Chaussures de sport", 15000),
    ("15", "Parfum 50ml", 10000),
];

pub fn default_stores() -> Vec<Store> {
    STORES
        .iter()
        .map(|(id, name, address)| Store::new(*id, *name, *address))
        .collect()
}

pub fn default_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|(id, name, price)| Product::new(*id, *name, *price))
        .collect()
}

/// Assemble the catalog, substituting the built-in list for any side left
/// empty
pub fn build_catalog(stores: Vec<Store>, products: Vec<Product>) -> InventoryResult<Catalog> {
    let stores = if stores.is_empty() {
        default_stores()
    } else {
        stores
    };
    let products = if products.is_empty() {
        default_products()
    } else {
        products
    };
    Catalog::new(stores, products)
}
