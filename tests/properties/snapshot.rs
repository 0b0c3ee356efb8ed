use inventaires::application::RecordStore;
use inventaires::domain::ports::SnapshotRepository;
use inventaires::infrastructure::JsonSnapshotRepository;
use proptest::prelude::*;

use crate::arb_records;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn saved_snapshot_loads_back_identical(records in arb_records()) {
        let dir = tempfile::tempdir().unwrap();

        let mut store = RecordStore::open(JsonSnapshotRepository::new(dir.path(), "inventaires")).unwrap();
        for record in records {
            store.upsert(record).unwrap();
        }

        let reopened = RecordStore::open(JsonSnapshotRepository::new(dir.path(), "inventaires")).unwrap();
        prop_assert_eq!(reopened.records(), store.records());
        prop_assert!(reopened.recovered().is_none());
    }

    #[test]
    fn repository_round_trip(records in arb_records()) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonSnapshotRepository::new(dir.path(), "k");

        repo.save(&records).unwrap();
        prop_assert_eq!(repo.load().unwrap(), records);
    }
}
