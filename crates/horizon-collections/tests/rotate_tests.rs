//! Tests for whole-list and ranged rotation.

mod common;

use common::Observed;
use horizon_collections::{CollectionChange, CollectionError};

#[test]
fn test_rotate_left() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);

    observed.list.rotate_left(2);

    assert_eq!(observed.list.to_vec(), vec![3, 4, 5, 1, 2]);
    assert_eq!(
        observed.recorder.changes(),
        vec![CollectionChange::Replace {
            new_items: vec![3, 4, 5, 1, 2],
            old_items: vec![1, 2, 3, 4, 5],
            index: 0
        }]
    );
    observed.assert_consistent();
}

#[test]
fn test_negative_left_rotation_rotates_right() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);
    observed.list.rotate_left(-1);
    assert_eq!(observed.list.to_vec(), vec![5, 1, 2, 3, 4]);
    observed.assert_consistent();
}

#[test]
fn test_rotate_right() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);

    observed.list.rotate_right(1);
    assert_eq!(observed.list.to_vec(), vec![5, 1, 2, 3, 4]);

    observed.list.rotate_right(-6);
    assert_eq!(observed.list.to_vec(), vec![1, 2, 3, 4, 5]);

    assert_eq!(observed.recorder.changes().len(), 2);
    observed.assert_consistent();
}

#[test]
fn test_full_turn_is_silent() {
    let observed = Observed::new(vec![1, 2, 3]);
    observed.list.rotate_left(3);
    observed.list.rotate_right(-9);
    observed.list.rotate_left(0);
    observed.assert_silent();

    let single = Observed::new(vec![1]);
    single.list.rotate_left(1);
    single.assert_silent();
}

#[test]
fn test_rotate_extreme_counts() {
    let observed = Observed::new(vec![1, 2, 3]);
    observed.list.rotate_right(isize::MIN);
    assert_eq!(observed.list.to_vec(), vec![3, 1, 2]);
    observed.list.rotate_left(isize::MAX);
    observed.assert_consistent();
}

#[test]
fn test_rotate_range_left() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);

    observed.list.rotate_range_left(1, 3, 1).unwrap();

    assert_eq!(observed.list.to_vec(), vec![1, 3, 4, 2, 5]);
    assert_eq!(
        observed.recorder.changes(),
        vec![CollectionChange::Replace {
            new_items: vec![3, 4, 2],
            old_items: vec![2, 3, 4],
            index: 1
        }]
    );
    observed.assert_consistent();
}

#[test]
fn test_rotate_range_right() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);
    observed.list.rotate_range_right(0, 5, 2).unwrap();
    assert_eq!(observed.list.to_vec(), vec![4, 5, 1, 2, 3]);
    observed.assert_consistent();
}

#[test]
fn test_rotate_range_by_its_length_is_silent() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);
    observed.list.rotate_range_left(1, 3, 3).unwrap();
    observed.list.rotate_range_right(1, 3, -3).unwrap();
    observed.list.rotate_range_left(2, 1, 1).unwrap();
    observed.assert_silent();
}

#[test]
fn test_rotate_range_invalid() {
    let observed = Observed::new(vec![1, 2, 3, 4, 5]);
    assert!(matches!(
        observed.list.rotate_range_left(3, 3, 1),
        Err(CollectionError::InvalidRange { .. })
    ));
    assert!(matches!(
        observed.list.rotate_range_right(6, 0, 1),
        Err(CollectionError::InvalidRange { .. })
    ));
    observed.assert_silent();
}
