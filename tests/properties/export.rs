use inventaires::domain::services::build_export;
use inventaires::infrastructure::export::to_csv_string;
use inventaires::{Catalog, InventorySet, Product, Store};
use proptest::prelude::*;

use crate::arb_records;

fn catalog() -> Catalog {
    Catalog::new(
        vec![
            Store::new("S0", "Fokou", ""),
            Store::new("S1", "Super U", ""),
            Store::new("S2", "Mahima", ""),
        ],
        vec![
            Product::new("P0", "Ciment 50kg", 5000),
            Product::new("P1", "Eau minérale 1,5L", 500),
        ],
    )
    .unwrap()
}

proptest! {
    #[test]
    fn one_line_per_record_plus_header(records in arb_records()) {
        let set: InventorySet = records.into_iter().collect();
        let csv = to_csv_string(&build_export(set.records(), &catalog())).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        prop_assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["date", "produit", "Fokou", "Super U", "Mahima"]
        );

        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(rows.len(), set.len());

        for (row, record) in rows.iter().zip(set.records()) {
            let date = record.date.format("%Y-%m-%d").to_string();
            prop_assert_eq!(&row[0], date.as_str());
            for (i, store) in ["S0", "S1", "S2"].iter().enumerate() {
                let expected = record
                    .stock_for(&(*store).into())
                    .unwrap_or(0)
                    .to_string();
                prop_assert_eq!(&row[2 + i], expected.as_str());
            }
        }
    }
}
