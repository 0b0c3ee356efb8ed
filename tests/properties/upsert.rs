use std::collections::HashSet;

use inventaires::domain::entities::{InventorySet, Upsert};
use proptest::prelude::*;

use crate::{arb_record, arb_records};

proptest! {
    #[test]
    fn product_ids_stay_unique(records in arb_records()) {
        let set: InventorySet = records.iter().cloned().collect();

        let ids: HashSet<_> = records.iter().map(|r| r.product_id.clone()).collect();
        prop_assert_eq!(set.len(), ids.len());
    }

    #[test]
    fn upserting_twice_equals_once(records in arb_records(), extra in arb_record()) {
        let mut once: InventorySet = records.iter().cloned().collect();
        once.upsert(extra.clone());

        let mut twice = once.clone();
        let outcome = twice.upsert(extra);

        prop_assert!(matches!(outcome, Upsert::Replaced(_)));
        prop_assert_eq!(once.records(), twice.records());
    }

    #[test]
    fn replacing_keeps_position(records in arb_records(), extra in arb_record()) {
        let mut set: InventorySet = records.iter().cloned().collect();
        let before = set.position(&extra.product_id);
        let len = set.len();

        let outcome = set.upsert(extra.clone());

        match before {
            Some(pos) => {
                prop_assert_eq!(outcome, Upsert::Replaced(pos));
                prop_assert_eq!(set.len(), len);
            }
            None => {
                prop_assert_eq!(outcome, Upsert::Inserted(len));
                prop_assert_eq!(set.len(), len + 1);
            }
        }
        prop_assert_eq!(&set.records()[outcome.position()], &extra);
    }

    #[test]
    fn last_write_wins_first_position_kept(records in arb_records()) {
        let set: InventorySet = records.iter().cloned().collect();

        let mut first_seen = Vec::new();
        for r in &records {
            if !first_seen.contains(&r.product_id) {
                first_seen.push(r.product_id.clone());
            }
        }
        let order: Vec<_> = set.records().iter().map(|r| r.product_id.clone()).collect();
        prop_assert_eq!(order, first_seen);

        for r in set.records() {
            let last = records.iter().rev().find(|x| x.product_id == r.product_id).unwrap();
            prop_assert_eq!(r, last);
        }
    }
}
