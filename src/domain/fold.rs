//! Indexed left folds over slices.
//!
//! Every combiner receives the running accumulator, the current element, its
//! index, and the whole sequence. Folding is strictly left-to-right and the
//! source sequence is never mutated.
//!
//! Two explicit entry points cover the seeded and unseeded cases:
//! - [`fold_seeded`] starts at index 0 from a caller supplied seed and cannot fail
//! - [`reduce`] uses the first element as the seed and fails on empty input
//!
//! [`fold`] accepts an optional seed and dispatches to one of the two.

use std::fmt;

/// Error returned when reducing an empty sequence without a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptySequenceError;

impl fmt::Display for EmptySequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reduce of empty sequence with no initial value")
    }
}

impl std::error::Error for EmptySequenceError {}

/// Fold `sequence` starting from `seed` at index 0.
///
/// # Example
/// ```
/// use utilkit::fold_seeded;
///
/// let total = fold_seeded(&[1, 2, 3, 4], 10, |acc, x, _, _| acc + x);
/// assert_eq!(total, 20);
///
/// // The seed may have a different type than the elements
/// let joined = fold_seeded(&["a", "b"], String::new(), |mut acc, s, i, _| {
///     if i > 0 {
///         acc.push('-');
///     }
///     acc.push_str(s);
///     acc
/// });
/// assert_eq!(joined, "a-b");
/// ```
pub fn fold_seeded<T, U, F>(sequence: &[T], seed: U, mut combiner: F) -> U
where
    F: FnMut(U, &T, usize, &[T]) -> U,
{
    let mut accumulator = seed;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = combiner(accumulator, element, index, sequence);
    }
    accumulator
}

/// Fold `sequence` using its first element as the seed.
///
/// The combiner is first called with index 1.
///
/// # Errors
/// Returns [`EmptySequenceError`] if `sequence` is empty.
///
/// # Example
/// ```
/// use utilkit::{reduce, EmptySequenceError};
///
/// assert_eq!(reduce(&[1, 2, 3, 4], |a, b, _, _| a + b), Ok(10));
/// assert_eq!(reduce(&[] as &[i32], |a, b, _, _| a + b), Err(EmptySequenceError));
/// ```
pub fn reduce<T, F>(sequence: &[T], mut combiner: F) -> Result<T, EmptySequenceError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (first, rest) = sequence.split_first().ok_or(EmptySequenceError)?;

    let mut accumulator = first.clone();
    for (offset, element) in rest.iter().enumerate() {
        accumulator = combiner(accumulator, element, offset + 1, sequence);
    }
    Ok(accumulator)
}

/// Fold `sequence` with an optional seed.
///
/// With `Some(seed)` this behaves like [`fold_seeded`]; with `None` it behaves
/// like [`reduce`].
///
/// # Errors
/// Returns [`EmptySequenceError`] if `seed` is `None` and `sequence` is empty.
///
/// # Example
/// ```
/// use utilkit::fold;
///
/// assert_eq!(fold(&[1, 2, 3, 4], |a, b, _, _| a + b, None), Ok(10));
/// assert_eq!(fold(&[1, 2, 3, 4], |a, b, _, _| a + b, Some(10)), Ok(20));
/// assert_eq!(fold(&[], |a: i32, b, _, _| a + b, Some(5)), Ok(5));
/// ```
pub fn fold<T, F>(sequence: &[T], combiner: F, seed: Option<T>) -> Result<T, EmptySequenceError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    match seed {
        Some(seed) => Ok(fold_seeded(sequence, seed, combiner)),
        None => reduce(sequence, combiner),
    }
}

/// Method-call surface for indexed folds.
///
/// Implemented for slices, so `Vec<T>` and arrays get it through deref.
///
/// ```
/// use utilkit::SequenceFold;
///
/// let words = vec!["x", "y", "z"];
/// let positions = words.fold_indexed(Vec::new(), |mut acc, w, i, all| {
///     acc.push(format!("{w}{i}/{}", all.len()));
///     acc
/// });
/// assert_eq!(positions, ["x0/3", "y1/3", "z2/3"]);
/// ```
pub trait SequenceFold<T> {
    /// See [`fold_seeded`].
    fn fold_indexed<U, F>(&self, seed: U, combiner: F) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U;

    /// See [`reduce`].
    fn reduce_indexed<F>(&self, combiner: F) -> Result<T, EmptySequenceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &[T]) -> T;
}

impl<T> SequenceFold<T> for [T] {
    fn fold_indexed<U, F>(&self, seed: U, combiner: F) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U,
    {
        fold_seeded(self, seed, combiner)
    }

    fn reduce_indexed<F>(&self, combiner: F) -> Result<T, EmptySequenceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        reduce(self, combiner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: i32, b: &i32, _: usize, _: &[i32]) -> i32 {
        a + b
    }

    #[test]
    fn test_reduce_without_seed() {
        assert_eq!(fold(&[1, 2, 3, 4], add, None), Ok(10));
    }

    #[test]
    fn test_fold_with_seed() {
        assert_eq!(fold(&[1, 2, 3, 4], add, Some(10)), Ok(20));
    }

    #[test]
    fn test_empty_without_seed_fails() {
        let result = fold(&[], add, None);
        assert_eq!(result, Err(EmptySequenceError));
    }

    #[test]
    fn test_empty_with_seed_returns_seed() {
        assert_eq!(fold(&[], add, Some(5)), Ok(5));
    }

    #[test]
    fn test_single_element_without_seed_skips_combiner() {
        let mut calls = 0;
        let result = reduce(&[42], |a, b, _, _| {
            calls += 1;
            a + b
        });
        assert_eq!(result, Ok(42));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_indices_start_at_one_without_seed() {
        let mut seen = Vec::new();
        let _ = reduce(&[10, 20, 30], |a, b, i, _| {
            seen.push(i);
            a + b
        });
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_indices_start_at_zero_with_seed() {
        let mut seen = Vec::new();
        fold_seeded(&[10, 20, 30], 0, |a, b, i, _| {
            seen.push(i);
            a + b
        });
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_combiner_sees_full_sequence() {
        let data = [3, 1, 2];
        let snapshots = fold_seeded(&data, Vec::new(), |mut acc, _, _, all| {
            acc.push(all.to_vec());
            acc
        });
        assert_eq!(snapshots.len(), 3);
        assert!(snapshots.iter().all(|s| s == &data));
    }

    #[test]
    fn test_left_to_right_order() {
        let data = ["a", "b", "c"];
        let out = fold_seeded(&data, String::new(), |acc, s, _, _| acc + *s);
        assert_eq!(out, "abc");

        // Non-commutative combiner exposes direction
        let diff = reduce(&[100, 10, 1], |a, b, _, _| a - b);
        assert_eq!(diff, Ok(89));
    }

    #[test]
    fn test_source_not_mutated() {
        let data = vec![1, 2, 3];
        let before = data.clone();
        let _ = data.reduce_indexed(|a, b, _, _| a * b);
        assert_eq!(data, before);
    }

    #[test]
    fn test_extension_trait_on_vec_and_array() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(v.reduce_indexed(add), Ok(10));
        assert_eq!([1, 2, 3, 4].fold_indexed(10, add), 20);

        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.reduce_indexed(add), Err(EmptySequenceError));
    }

    #[test]
    fn test_deterministic() {
        let data = [5, 7, 11];
        let first = fold(&data, add, Some(1));
        let second = fold(&data, add, Some(1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EmptySequenceError.to_string(),
            "reduce of empty sequence with no initial value"
        );
    }
}
