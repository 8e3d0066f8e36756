//! The traversal primitive.
//!
//! This module provides the [`Collection`] trait and [`each`], the only
//! place in the library that iterates over a collection. Every other
//! collection operation is expressed through it.
//!
//! # Visit Order
//!
//! - Ordered sequences are visited by increasing index.
//! - Keyed mappings are visited in their own iteration order: hash order for
//!   `HashMap`, key order for `BTreeMap`. Each entry is visited exactly once.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A sequence or mapping that can be traversed entry by entry.
///
/// The visitor receives the element, its key (an index for sequences, a
/// borrowed key for mappings) and the collection being traversed.
///
/// # Laws
///
/// - **Totality**: every element is visited exactly once.
/// - **Order**: sequences are visited from index `0` to `len - 1`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let letters = vec!['a', 'b', 'c'];
/// let mut visited = Vec::new();
/// letters.traverse(|letter, index, _| visited.push((index, *letter)));
/// assert_eq!(visited, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
/// ```
pub trait Collection {
    /// The element (or mapping value) type.
    type Item;

    /// The key handed to visitors alongside each element.
    type Key<'a>
    where
        Self: 'a;

    /// Calls `visitor(element, key, self)` for every entry.
    fn traverse<'a, F>(&'a self, visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self);
}

/// Calls `visitor(element, key, collection)` for every entry of `collection`.
///
/// Sequences pass the index as the key, mappings pass a reference to the
/// entry's key. The visitor's return value is ignored; it is expected to
/// work through side effects on its captured state.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::each;
///
/// let ages = BTreeMap::from([("curly", 50), ("moe", 40)]);
/// let mut lines = Vec::new();
/// each(&ages, |age, name, _| lines.push(format!("{name}={age}")));
/// assert_eq!(lines, vec!["curly=50", "moe=40"]);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, visitor: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.traverse(visitor);
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            visitor(value, key, self);
        }
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            visitor(value, key, self);
        }
    }
}
