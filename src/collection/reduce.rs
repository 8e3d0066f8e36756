//! The fold primitive.
//!
//! [`reduce`] threads an accumulator through a collection. Whether an
//! initial accumulator is supplied is an explicit [`Seed`] variant:
//!
//! - [`Seed::Supplied`]: the seed is the initial accumulator and every
//!   element is passed to the iterator.
//! - [`Seed::Absent`]: the first element becomes the initial accumulator and
//!   is never passed to the iterator. The iterator first runs on the second
//!   element.
//!
//! The accumulator of [`reduce`] has the element type, since either case may
//! start from an element. [`fold`] is the supplied-seed case on its own and
//! accepts an accumulator of any type.

use super::traversal::{Collection, each};

/// The initial accumulator of a [`reduce`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Seed;
///
/// assert_eq!(Seed::from(Some(3)), Seed::Supplied(3));
/// assert_eq!(Seed::<i32>::from(None), Seed::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed<A> {
    /// No initial accumulator; the first element takes its place.
    Absent,
    /// The initial accumulator.
    Supplied(A),
}

impl<A> Seed<A> {
    /// Converts the seed into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Absent => None,
            Self::Supplied(accumulator) => Some(accumulator),
        }
    }
}

impl<A> Default for Seed<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Seed<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Absent, Self::Supplied)
    }
}

/// Reduces a collection to a single value.
///
/// Each step computes `accumulator = iterator(accumulator, element)`; the
/// final accumulator is returned. With [`Seed::Absent`] a clone of the first
/// element seeds the fold and is skipped by the iterator, and an empty
/// collection yields `None`. With [`Seed::Supplied`] the result is always
/// `Some`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{reduce, Seed};
///
/// let numbers = vec![1, 2, 3, 4];
///
/// // 1 seeds the fold and is never passed to the iterator.
/// assert_eq!(reduce(&numbers, |sum, n| sum + n, Seed::Absent), Some(10));
///
/// // All four elements are passed to the iterator.
/// assert_eq!(reduce(&numbers, |sum, n| sum + n, Seed::Supplied(10)), Some(20));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, |sum, n| sum + n, Seed::Absent), None);
/// ```
pub fn reduce<'a, C, F>(
    collection: &'a C,
    mut iterator: F,
    seed: Seed<C::Item>,
) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let mut accumulator = seed.into_option();

    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            None => value.clone(),
            Some(current) => iterator(current, value),
        });
    });
    accumulator
}

/// Folds a collection from a supplied seed.
///
/// Equivalent to `reduce` with [`Seed::Supplied`], except that the
/// accumulator need not share the element type and the elements need not be
/// `Clone`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::fold;
///
/// let words = vec!["a", "bb", "ccc"];
/// assert_eq!(fold(&words, 0, |total, word| total + word.len()), 6);
/// ```
pub fn fold<'a, C, A, F>(collection: &'a C, seed: A, mut iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Item) -> A,
{
    let mut accumulator = Some(seed);

    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    match accumulator {
        Some(result) => result,
        None => unreachable!("fold always holds an accumulator between steps"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn absent_seed_skips_first_element() {
        let values = vec![1, 2, 3];
        let mut seen = Vec::new();

        let result = reduce(
            &values,
            |accumulator, value| {
                seen.push(*value);
                accumulator + value
            },
            Seed::Absent,
        );

        assert_eq!(result, Some(6));
        assert_eq!(seen, vec![2, 3]);
    }

    #[rstest]
    fn supplied_seed_visits_every_element() {
        let values = vec![1, 2, 3];
        let mut seen = Vec::new();

        let result = reduce(
            &values,
            |accumulator, value| {
                seen.push(*value);
                accumulator + value
            },
            Seed::Supplied(0),
        );

        assert_eq!(result, Some(6));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn supplied_falsy_seed_is_still_a_seed() {
        let values = vec![5];
        let mut calls = 0;

        let result = reduce(
            &values,
            |accumulator, value| {
                calls += 1;
                accumulator * value
            },
            Seed::Supplied(0),
        );

        assert_eq!(result, Some(0));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn single_element_without_seed_never_calls_iterator() {
        let values = vec![42];
        let result = reduce(
            &values,
            |_: i32, _| unreachable!("iterator must not run"),
            Seed::Absent,
        );
        assert_eq!(result, Some(42));
    }

    #[rstest]
    fn empty_collection_with_seed_returns_seed() {
        let values: Vec<i32> = Vec::new();
        assert_eq!(reduce(&values, |sum, n| sum + n, Seed::Supplied(7)), Some(7));
    }

    #[rstest]
    fn reduce_clones_owned_first_element() {
        let words = vec![String::from("a"), String::from("b"), String::from("c")];
        let joined = reduce(
            &words,
            |mut text, word| {
                text.push_str(word);
                text
            },
            Seed::Absent,
        );
        assert_eq!(joined.as_deref(), Some("abc"));
        assert_eq!(words.len(), 3);
    }

    #[rstest]
    fn reduce_over_mapping_uses_values() {
        let scores = BTreeMap::from([("a", 3), ("b", 4)]);
        assert_eq!(reduce(&scores, |product, n| product * n, Seed::Absent), Some(12));
    }

    #[rstest]
    fn fold_accepts_unrelated_accumulator_type() {
        let values = vec![1, 2, 3];
        let joined = fold(&values, String::new(), |mut text, value| {
            text.push_str(&value.to_string());
            text
        });
        assert_eq!(joined, "123");
    }

    #[rstest]
    #[case(None, Seed::Absent)]
    #[case(Some(1), Seed::Supplied(1))]
    fn seed_from_option(#[case] option: Option<i32>, #[case] expected: Seed<i32>) {
        assert_eq!(Seed::from(option), expected);
        assert_eq!(expected.into_option(), option);
    }
}
