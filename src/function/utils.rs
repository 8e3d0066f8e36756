//! The identity function.

/// Returns the value unchanged.
///
/// Used wherever an operation needs a transform or predicate but the caller
/// has none to give: `map(collection, identity)` copies references to the
/// elements, and `every(collection, identity)` tests the elements' own
/// truthiness.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use underbar::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_identity_returns_same_reference() {
        let value = String::from("same");
        assert!(std::ptr::eq(identity(&value), &value));
    }
}
