//! Element-wise projection.
//!
//! [`map`] applies a transform to every element; [`pluck`] is `map` with a
//! property accessor, reading one field out of every element. A missing
//! property yields `None` rather than an error.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::traversal::{Collection, each};

/// Keyed read access to a value's properties.
///
/// Mappings are accessed by key and sequences by index. The result is `None`
/// when the property is absent.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::Property;
///
/// let person = HashMap::from([("name", "moe")]);
/// assert_eq!(person.property("name"), Some(&"moe"));
/// assert_eq!(person.property("age"), None);
///
/// let row = vec![10, 20];
/// assert_eq!(row.property(&1), Some(&20));
/// ```
pub trait Property<K: ?Sized> {
    /// The type of the property values.
    type Value;

    /// Returns the property stored under `key`, if any.
    fn property(&self, key: &K) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Property<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Property<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Property<usize> for [T] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Property<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Property<usize> for [T; N] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

/// Returns `transform(element)` for every element, in traversal order.
///
/// The output always has as many elements as the input.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
/// use underbar::function::identity;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(map(&numbers, |n| n * 10), vec![10, 20, 30]);
/// assert_eq!(map(&numbers, identity), vec![&1, &2, &3]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut transform: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> U,
{
    let mut results = Vec::new();

    each(collection, |value, _, _| {
        results.push(transform(value));
    });
    results
}

/// Reads the property `key` out of every element.
///
/// Elements lacking the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::pluck;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("role", "leader")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some(&"moe"), Some(&"curly")]);
/// assert_eq!(pluck(&people, "role"), vec![Some(&"leader"), None]);
/// ```
pub fn pluck<'a, C, K>(
    collection: &'a C,
    key: &K,
) -> Vec<Option<&'a <C::Item as Property<K>>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Property<K>,
    K: ?Sized,
{
    map(collection, |item| item.property(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_preserves_cardinality() {
        let values = vec![0, 0, 0, 0];
        assert_eq!(map(&values, |value| value + 1).len(), values.len());
    }

    #[rstest]
    fn map_over_mapping_follows_key_order() {
        let lengths = BTreeMap::from([(2, "bb"), (1, "a"), (3, "ccc")]);
        assert_eq!(map(&lengths, |text| text.len()), vec![1, 2, 3]);
    }

    #[rstest]
    fn pluck_by_index_from_rows() {
        let rows = vec![vec![1, 2], vec![3], vec![]];
        assert_eq!(pluck(&rows, &1), vec![Some(&2), None, None]);
    }

    #[rstest]
    fn pluck_from_owned_string_keys() {
        let records = vec![
            BTreeMap::from([(String::from("id"), 1)]),
            BTreeMap::from([(String::from("id"), 2)]),
        ];
        assert_eq!(pluck(&records, "id"), vec![Some(&1), Some(&2)]);
    }

    #[rstest]
    fn pluck_on_empty_collection_is_empty() {
        let records: Vec<HashMap<String, i32>> = Vec::new();
        assert!(pluck(&records, "id").is_empty());
    }
}
