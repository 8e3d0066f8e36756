//! Merging entries into a keyed mapping.
//!
//! Both operations walk the sources in argument order and, within a source,
//! in its own iteration order. They differ only in conflict handling:
//!
//! - [`extend`] always overwrites, so the last source wins.
//! - [`defaults`] never overwrites, so the target wins, then the first source.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A mutable keyed mapping that entries can be merged into.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::Mapping;
///
/// let mut settings = BTreeMap::new();
/// settings.set("volume", 3);
/// assert!(settings.has_key(&"volume"));
/// ```
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if an entry exists for `key`.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Inserts or overwrites the entry for `key`.
    fn set(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of every source into `target`, overwriting existing
/// keys. Returns `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::extend;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// extend(&mut target, [BTreeMap::from([("b", 2)]), BTreeMap::from([("a", 3)])]);
/// assert_eq!(target, BTreeMap::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<M, I, S>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + ?Sized,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = (M::Key, M::Value)>,
{
    for source in sources {
        for (key, value) in source {
            target.set(key, value);
        }
    }
    target
}

/// Copies entries of every source into `target` only where `target` has no
/// entry for the key yet. Returns `target`.
///
/// Presence is checked against the target as it is being filled, so an
/// earlier source takes precedence over a later one.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::defaults;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// defaults(&mut target, [BTreeMap::from([("a", 2), ("b", 2)])]);
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<M, I, S>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + ?Sized,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = (M::Key, M::Value)>,
{
    for source in sources {
        for (key, value) in source {
            if !target.has_key(&key) {
                target.set(key, value);
            }
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn extend_with_no_sources_leaves_target_untouched() {
        let mut target = HashMap::from([("a", 1)]);
        extend(&mut target, Vec::<HashMap<&str, i32>>::new());
        assert_eq!(target, HashMap::from([("a", 1)]));
    }

    #[rstest]
    fn extend_returns_target_for_chaining() {
        let mut target = BTreeMap::new();
        extend(&mut target, [[("x", 1)]]).set("y", 2);
        assert_eq!(target, BTreeMap::from([("x", 1), ("y", 2)]));
    }

    #[rstest]
    fn defaults_prefers_earlier_sources() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        defaults(&mut target, [vec![("a", 1)], vec![("a", 2), ("b", 2)]]);
        assert_eq!(target, HashMap::from([("a", 1), ("b", 2)]));
    }

    #[rstest]
    fn extend_prefers_later_sources() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        extend(&mut target, [vec![("a", 1)], vec![("a", 2), ("b", 2)]]);
        assert_eq!(target, HashMap::from([("a", 2), ("b", 2)]));
    }
}
