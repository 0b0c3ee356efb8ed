//! Two stores, one product: record, edit, export.

use std::fs;

use crate::common::TestEnv;

const CATALOG: &str = r#"
[[catalog.stores]]
id = "S1"
name = "S1"

[[catalog.stores]]
id = "S2"
name = "S2"

[[catalog.products]]
id = "P1"
name = "Ciment 50kg"
price = 5000
"#;

#[test]
fn record_edit_and_export_one_product() {
    let env = TestEnv::new();
    env.write_config(CATALOG);

    // Create through the form: S2 is left at its default of 0.
    let created = env.run(&["add", "--date", "2024-01-01", "--product", "P1", "--stock", "S1=5"]);
    assert!(created.success, "stderr:\n{}", created.stderr);

    let table = env.run(&["--json", "list"]).event("data");
    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["product"], "Ciment 50kg");
    assert_eq!(rows[0]["stock"], serde_json::json!({"S1": 5, "S2": 0}));

    // Edit through the row: the form comes back seeded, only S1 changes.
    let edited = env.run(&["edit", "P1", "--stock", "S1=3"]);
    assert!(edited.success, "stderr:\n{}", edited.stderr);

    let table = env.run(&["--json", "list"]).event("data");
    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2024-01-01");
    assert_eq!(rows[0]["stock"], serde_json::json!({"S1": 3, "S2": 0}));

    let exported = env.run(&["export"]);
    assert!(exported.success, "stderr:\n{}", exported.stderr);

    let csv = fs::read_to_string(env.path("inventaires.csv")).unwrap();
    assert_eq!(csv, "date,produit,S1,S2\n2024-01-01,Ciment 50kg,3,0\n");
}

#[test]
fn text_table_matches_json_view() {
    let env = TestEnv::new();
    env.write_config(CATALOG);
    env.write_snapshot(r#"[{"date": "2024-01-01", "productId": "P1", "stock": {"S1": 3}}]"#);

    let result = env.run(&["list"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let row = result
        .stdout
        .lines()
        .find(|l| l.contains("Ciment 50kg"))
        .unwrap();
    assert!(row.contains('3'), "{row}");
    assert!(row.contains("N/A"), "{row}");
}
