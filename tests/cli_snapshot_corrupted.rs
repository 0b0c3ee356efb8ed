mod common;

use std::fs;

use common::TestEnv;

#[test]
fn unreadable_snapshot_starts_empty_and_is_kept_aside() {
    let env = TestEnv::new();
    env.write_snapshot("{ not json");

    let result = env.run(&["list"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("illisible"), "{}", result.stderr);
    assert!(result.stdout.contains("Aucun inventaire enregistré."));

    let moved = env.data_dir().join("inventaires.json.corrupt");
    assert_eq!(fs::read_to_string(&moved).unwrap(), "{ not json");
    assert!(!env.snapshot_path().exists());
}

#[test]
fn saving_after_recovery_writes_a_fresh_snapshot() {
    let env = TestEnv::new();
    env.write_snapshot("[1, 2, 3]");

    let result = env.run(&["add", "-d", "2024-01-01", "-p", "1", "-s", "1=2"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let records = env.read_snapshot();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert!(env.data_dir().join("inventaires.json.corrupt").exists());
}

#[test]
fn blank_snapshot_is_just_empty() {
    let env = TestEnv::new();
    env.write_snapshot("   \n");

    let result = env.run(&["list"]);
    assert!(result.success);
    assert!(!result.stderr.contains("illisible"), "{}", result.stderr);
    assert!(!env.data_dir().join("inventaires.json.corrupt").exists());
}

#[test]
fn legacy_produit_id_key_is_read_and_rewritten() {
    let env = TestEnv::new();
    env.write_snapshot(r#"[{"date": "2024-01-01", "produitId": "1", "stock": {"1": 5}}]"#);

    let list = env.run(&["list"]);
    assert!(list.stdout.contains("Ciment 50kg"), "{}", list.stdout);

    let edit = env.run(&["edit", "1", "-s", "1=6"]);
    assert!(edit.success, "stderr:\n{}", edit.stderr);

    let record = &env.read_snapshot()[0];
    assert_eq!(record["productId"], "1");
    assert!(record.get("produitId").is_none());
}

#[test]
fn recovery_warning_in_english() {
    let env = TestEnv::new();
    env.write_snapshot("nope");

    let result = env.run(&["--lang", "en", "list"]);
    assert!(result.stderr.contains("unreadable"), "{}", result.stderr);
}

#[test]
fn second_corruption_does_not_overwrite_the_first() {
    let env = TestEnv::new();

    env.write_snapshot("first-corrupt");
    assert!(env.run(&["list"]).success);
    env.write_snapshot("second-corrupt");
    assert!(env.run(&["list"]).success);

    let first = env.data_dir().join("inventaires.json.corrupt");
    let second = env.data_dir().join("inventaires.json.corrupt.1");
    assert_eq!(fs::read_to_string(first).unwrap(), "first-corrupt");
    assert_eq!(fs::read_to_string(second).unwrap(), "second-corrupt");
}
