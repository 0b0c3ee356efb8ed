mod common;

use common::TestEnv;

const ONE_RECORD: &str = r#"[
  {"date": "2024-01-01", "productId": "1", "stock": {"1": 5, "2": 40}}
]"#;

#[test]
fn list_on_empty_store_shows_hint() {
    let env = TestEnv::new();
    let result = env.run(&["list"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stdout.contains("Aucun inventaire enregistré."),
        "stdout:\n{}",
        result.stdout
    );
    assert!(!env.snapshot_path().exists(), "list must not write a snapshot");
}

#[test]
fn list_shows_one_row_with_store_columns() {
    let env = TestEnv::new();
    env.write_snapshot(ONE_RECORD);

    let result = env.run(&["list"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let stdout = &result.stdout;
    for store in ["Fokou", "Super U", "Orca Deco", "Santa Lucia", "Mahima"] {
        assert!(stdout.contains(store), "missing column {store}:\n{stdout}");
    }
    let row = stdout
        .lines()
        .find(|l| l.contains("Ciment 50kg"))
        .unwrap_or_else(|| panic!("no row:\n{stdout}"));
    assert!(row.starts_with("2024-01-01"), "{row}");
    assert!(row.contains("40"), "{row}");
    assert_eq!(row.matches("N/A").count(), 3, "{row}");
}

#[test]
fn unknown_product_gets_placeholder() {
    let env = TestEnv::new();
    env.write_snapshot(r#"[{"date": "2024-02-01", "productId": "99", "stock": {"1": 1}}]"#);

    let fr = env.run(&["list"]);
    assert!(fr.stdout.contains("Produit inconnu"), "{}", fr.stdout);

    let en = env.run(&["list", "--lang", "en"]);
    assert!(en.stdout.contains("Unknown product"), "{}", en.stdout);
    assert!(en.stdout.contains("Inventory Management"), "{}", en.stdout);
}

#[test]
fn running_without_a_terminal_prints_the_table() {
    let env = TestEnv::new();
    env.write_snapshot(ONE_RECORD);

    let result = env.run(&[]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Ciment 50kg"), "{}", result.stdout);
}
