//! Modular arithmetic used to canonicalize rotation offsets.

/// Returns the representative of `a` in `[0, b)`.
///
/// Unlike `%`, the result is never negative, so a left rotation by `-1` over
/// five items canonicalizes to a left rotation by `4`.
///
/// # Panics
///
/// Panics if `b` is zero. Callers guard `b > 0`.
///
/// # Example
///
/// ```
/// use horizon_collections::math::modulo;
///
/// assert_eq!(modulo(7, 5), 2);
/// assert_eq!(modulo(-1, 5), 4);
/// assert_eq!(modulo(-10, 5), 0);
/// ```
pub fn modulo(a: isize, b: usize) -> usize {
    // Collection lengths never exceed isize::MAX.
    let b = b as isize;
    a.rem_euclid(b) as usize
}
