//! In-place rotation of a sub-range of a slice.
//!
//! Rotations use the triple-reversal technique: to rotate `A·B` into `B·A`,
//! reverse `A`, reverse `B`, then reverse the whole span. This runs in
//! O(item_count) time with no extra allocation.
//!
//! All functions report whether any element actually moved, so callers can
//! skip notification work for degenerate rotations.

use crate::error::Result;
use crate::math::modulo;
use crate::range::validate_range;

/// Rotates the `item_count` items starting at `index` left by `rotate_count` places.
///
/// Negative counts rotate right. Returns `false` without touching the slice when
/// `item_count < 2` or when `rotate_count` is a multiple of `item_count`.
///
/// # Errors
///
/// [`InvalidRange`](crate::CollectionError::InvalidRange) if the span does not
/// fit in `items`.
///
/// # Example
///
/// ```
/// use horizon_collections::rotate::rotate_left;
///
/// let mut items = [1, 2, 3, 4, 5];
/// assert!(rotate_left(&mut items, 1, 3, 1).unwrap());
/// assert_eq!(items, [1, 3, 4, 2, 5]);
/// ```
pub fn rotate_left<T>(
    items: &mut [T],
    index: usize,
    item_count: usize,
    rotate_count: isize,
) -> Result<bool> {
    validate_range(items.len(), index, item_count)?;
    if item_count < 2 {
        return Ok(false);
    }

    let shift = modulo(rotate_count, item_count);
    Ok(reverse_rotate(&mut items[index..index + item_count], shift))
}

/// Rotates the `item_count` items starting at `index` right by `rotate_count` places.
///
/// Equivalent to [`rotate_left`] with `rotate_count` negated.
pub fn rotate_right<T>(
    items: &mut [T],
    index: usize,
    item_count: usize,
    rotate_count: isize,
) -> Result<bool> {
    validate_range(items.len(), index, item_count)?;
    if item_count < 2 {
        return Ok(false);
    }

    // Negating isize::MIN overflows, so negate after canonicalizing.
    let right = modulo(rotate_count, item_count);
    let shift = (item_count - right) % item_count;
    Ok(reverse_rotate(&mut items[index..index + item_count], shift))
}

/// Left rotation by an unsigned place count, used by block moves.
pub(crate) fn rotate_left_by<T>(
    items: &mut [T],
    index: usize,
    item_count: usize,
    places: usize,
) -> Result<bool> {
    validate_range(items.len(), index, item_count)?;
    if item_count < 2 {
        return Ok(false);
    }
    Ok(reverse_rotate(
        &mut items[index..index + item_count],
        places % item_count,
    ))
}

/// Right rotation by an unsigned place count, used by block moves.
pub(crate) fn rotate_right_by<T>(
    items: &mut [T],
    index: usize,
    item_count: usize,
    places: usize,
) -> Result<bool> {
    validate_range(items.len(), index, item_count)?;
    if item_count < 2 {
        return Ok(false);
    }
    let shift = (item_count - places % item_count) % item_count;
    Ok(reverse_rotate(&mut items[index..index + item_count], shift))
}

/// Rotates `span` left by `shift` places. `shift` must be below `span.len()`.
fn reverse_rotate<T>(span: &mut [T], shift: usize) -> bool {
    if shift == 0 {
        return false;
    }

    span[..shift].reverse();
    span[shift..].reverse();
    span.reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;

    #[test]
    fn test_rotate_left_whole() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(rotate_left(&mut items, 0, 5, 2).unwrap());
        assert_eq!(items, [3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_rotate_left_sub_range() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(rotate_left(&mut items, 1, 3, 1).unwrap());
        assert_eq!(items, [1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_negative_count_rotates_right() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(rotate_left(&mut items, 0, 5, -1).unwrap());
        assert_eq!(items, [5, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rotate_right_sub_range() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(rotate_right(&mut items, 1, 4, 1).unwrap());
        assert_eq!(items, [1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_multiple_of_length_is_noop() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(!rotate_left(&mut items, 1, 3, 3).unwrap());
        assert!(!rotate_right(&mut items, 1, 3, -6).unwrap());
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_short_spans_are_noops() {
        let mut items = [1, 2];
        assert!(!rotate_left(&mut items, 0, 0, 1).unwrap());
        assert!(!rotate_left(&mut items, 1, 1, 1).unwrap());
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn test_out_of_bounds_span() {
        let mut items = [1, 2, 3];
        assert_eq!(
            rotate_left(&mut items, 2, 2, 1),
            Err(CollectionError::InvalidRange {
                index: 2,
                count: 2,
                len: 3
            })
        );
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn test_round_trip_restores_order() {
        let original: Vec<i32> = (0..9).collect();
        for index in 0..original.len() {
            for item_count in 0..=original.len() - index {
                for rotate_count in -10isize..=10 {
                    let mut items = original.clone();
                    let left = rotate_left(&mut items, index, item_count, rotate_count).unwrap();
                    let right = rotate_right(&mut items, index, item_count, rotate_count).unwrap();
                    assert_eq!(left, right);
                    assert_eq!(items, original);
                }
            }
        }
    }

    #[test]
    fn test_extreme_counts() {
        // isize::MIN is congruent to 1 modulo 3.
        let mut items = [1, 2, 3];
        assert!(rotate_right(&mut items, 0, 3, isize::MIN).unwrap());
        assert_eq!(items, [3, 1, 2]);

        let mut items = [1, 2, 3];
        assert!(rotate_left(&mut items, 0, 3, isize::MIN).unwrap());
        assert_eq!(items, [2, 3, 1]);
    }

    #[test]
    fn test_unsigned_variants() {
        let mut items = [1, 2, 3, 4, 5];
        assert!(rotate_left_by(&mut items, 0, 4, 2).unwrap());
        assert_eq!(items, [3, 4, 1, 2, 5]);
        assert!(rotate_right_by(&mut items, 0, 4, 2).unwrap());
        assert_eq!(items, [1, 2, 3, 4, 5]);
        assert!(!rotate_right_by(&mut items, 0, 4, 4).unwrap());
    }
}
