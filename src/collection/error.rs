//! Error types for collection operations.
//!
//! Typed collections cannot be null and visitors are always callable, so
//! none of the generic operations can fail. These errors surface only at the
//! boundary where dynamically typed input is turned into a collection (see
//! the `json` module).

/// Represents an argument that cannot be used as a collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::InvalidArgumentError;
///
/// let error = InvalidArgumentError::NotACollection { found: "number" };
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument: expected an array or object, found number"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The collection was null.
    NullCollection,
    /// The value is a scalar (boolean, number or string), not a collection.
    NotACollection {
        /// A short name for the kind of value that was found.
        found: &'static str,
    },
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NullCollection => {
                write!(formatter, "invalid argument: collection is null")
            }
            Self::NotACollection { found } => write!(
                formatter,
                "invalid argument: expected an array or object, found {found}"
            ),
        }
    }
}

impl std::error::Error for InvalidArgumentError {}
