//! Membership and quantification, derived from [`fold`].
//!
//! Each operation is a single fold with a boolean accumulator. The fold
//! always runs to the end of the collection, but once the outcome is decided
//! neither the comparison nor the predicate is evaluated again.

use super::reduce::fold;
use super::traversal::Collection;
use super::truthy::Truthy;
use crate::function::identity;

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &5));
/// ```
pub fn contains<C, T>(collection: &C, target: &T) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq<T>,
    T: ?Sized,
{
    fold(collection, false, |was_found, item| was_found || item == target)
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// An empty collection satisfies every predicate. The predicate is not
/// called again after it first returns a falsy value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |n| n % 2 == 0));
/// assert!(!every(&[2, 3, 6], |n| n % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<'a, C, P, B>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    fold(collection, true, |accumulator, value| {
        accumulator && predicate(value).is_truthy()
    })
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// Defined as "not every element fails the predicate", so an empty
/// collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&[1, 2, 3], |n| *n > 2));
/// assert!(!some(&[1, 2, 3], |n| *n > 3));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<'a, C, P, B>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    !every(collection, |value| !predicate(value).is_truthy())
}

/// Returns `true` if every element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&["a", ""]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, identity)
}

/// Returns `true` if at least one element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&[0, 0, 3]));
/// assert!(!some_truthy(&[None::<i32>, None]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, identity)
}
