//! Tests for replacing items in place.

mod common;

use common::Observed;
use horizon_collections::{CollectionChange, CollectionError};

#[test]
fn test_set_raises_replace() {
    let observed = Observed::new(vec!["a", "b", "c"]);

    assert_eq!(observed.list.set(2, "z"), Ok("c"));

    assert_eq!(observed.list.to_vec(), vec!["a", "b", "z"]);
    assert_eq!(
        observed.recorder.changes(),
        vec![CollectionChange::Replace {
            new_items: vec!["z"],
            old_items: vec!["c"],
            index: 2
        }]
    );
    assert!(!observed.recorder.count_changed());
    observed.assert_consistent();
}

#[test]
fn test_set_with_equal_value_still_notifies() {
    let observed = Observed::new(vec![1]);
    observed.list.set(0, 1).unwrap();
    assert_eq!(observed.recorder.changes().len(), 1);
    observed.assert_consistent();
}

#[test]
fn test_set_out_of_range() {
    let observed = Observed::new(vec![1]);
    assert_eq!(
        observed.list.set(1, 2),
        Err(CollectionError::OutOfRange { index: 1, len: 1 })
    );
    observed.assert_silent();
}
