//! Predicate-based selection.

use super::traversal::{Collection, each};
use super::truthy::Truthy;

/// Returns the elements for which `predicate` is truthy, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(filter(&numbers, |n| n % 2 == 0), vec![&2, &4, &6]);
///
/// // Any truthy value works as a predicate result.
/// let words = ["", "a", "", "b"];
/// assert_eq!(filter(&words, |word| *word), vec![&"a", &"b"]);
/// ```
pub fn filter<'a, C, P, B>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    let mut results = Vec::new();

    each(collection, |value, _, _| {
        if predicate(value).is_truthy() {
            results.push(value);
        }
    });
    results
}

/// Returns the elements for which `predicate` is falsy, in traversal order.
///
/// This is exactly `filter` with the predicate negated.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(reject(&numbers, |n| n % 2 == 0), vec![&1, &3, &5]);
/// ```
pub fn reject<'a, C, P, B>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    filter(collection, move |value| !predicate(value).is_truthy())
}
