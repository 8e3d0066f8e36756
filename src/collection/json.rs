//! Collection operations over `serde_json` values.
//!
//! JSON input is dynamically typed: a value handed in as a collection may
//! turn out to be `null` or a scalar. [`JsonCollection`] validates the value
//! once, at the boundary, and every generic collection operation then works
//! on it unchanged.
//!
//! This module also gives JSON values the dynamic-language behaviour the
//! generic operations expect:
//!
//! - [`Truthy`]: `null`, `false`, `0` and `""` are falsy.
//! - [`Property`]: objects are read by name, arrays by index; anything
//!   missing reads as `None`.
//! - [`Mapping`]: `extend` and `defaults` work on JSON objects.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use underbar::collection::json::JsonCollection;
//! use underbar::collection::{filter, pluck};
//!
//! let stooges = json!([
//!     {"name": "moe", "age": 40},
//!     {"name": "larry", "age": 50},
//!     {"name": "curly"},
//! ]);
//! let stooges = JsonCollection::try_from(&stooges)?;
//!
//! assert_eq!(pluck(&stooges, "age"), vec![Some(&json!(40)), Some(&json!(50)), None]);
//! assert_eq!(filter(&stooges, |stooge| stooge.get("age")).len(), 2);
//! # Ok::<(), underbar::collection::InvalidArgumentError>(())
//! ```

use std::fmt;

use serde_json::{Map, Value};

use super::error::InvalidArgumentError;
use super::merge::Mapping;
use super::traversal::Collection;
use super::transform::Property;
use super::truthy::Truthy;

/// A JSON array or object, validated for use as a collection.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::collection::InvalidArgumentError;
/// use underbar::collection::json::JsonCollection;
///
/// assert!(JsonCollection::try_from(&json!([1, 2])).is_ok());
/// assert_eq!(
///     JsonCollection::try_from(&json!(null)).unwrap_err(),
///     InvalidArgumentError::NullCollection
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonCollection<'v> {
    /// An ordered sequence.
    Array(&'v Vec<Value>),
    /// A keyed mapping, visited in insertion order.
    Object(&'v Map<String, Value>),
}

impl JsonCollection<'_> {
    /// Returns the number of elements or entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Array(values) => values.len(),
            Self::Object(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements or entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'v> TryFrom<&'v Value> for JsonCollection<'v> {
    type Error = InvalidArgumentError;

    fn try_from(value: &'v Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(Self::Array(values)),
            Value::Object(entries) => Ok(Self::Object(entries)),
            Value::Null => Err(InvalidArgumentError::NullCollection),
            Value::Bool(_) => Err(InvalidArgumentError::NotACollection { found: "boolean" }),
            Value::Number(_) => Err(InvalidArgumentError::NotACollection { found: "number" }),
            Value::String(_) => Err(InvalidArgumentError::NotACollection { found: "string" }),
        }
    }
}

/// The key of an element in a [`JsonCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKey<'a> {
    /// The position of an array element.
    Index(usize),
    /// The name of an object member.
    Name(&'a str),
}

impl fmt::Display for JsonKey<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

impl Collection for JsonCollection<'_> {
    type Item = Value;
    type Key<'a>
        = JsonKey<'a>
    where
        Self: 'a;

    fn traverse<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        match self {
            Self::Array(values) => {
                for (index, element) in values.iter().enumerate() {
                    visitor(element, JsonKey::Index(index), self);
                }
            }
            Self::Object(entries) => {
                for (name, element) in entries.iter() {
                    visitor(element, JsonKey::Name(name), self);
                }
            }
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|float| float.is_truthy()),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Property<str> for Value {
    type Value = Self;

    fn property(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl Property<usize> for Value {
    type Value = Self;

    fn property(&self, key: &usize) -> Option<&Self> {
        match self {
            Self::Array(values) => values.get(*key),
            _ => None,
        }
    }
}

impl Mapping for Map<String, Value> {
    type Key = String;
    type Value = Value;

    #[inline]
    fn has_key(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn set(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }
}
