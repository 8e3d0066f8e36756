//! Linear search over sequences.

use super::traversal::each;

/// Returns the index of the first element equal to `target`.
///
/// The scan always runs over the whole sequence; once a match has been
/// recorded, later matches are ignored. Returns `None` when no element
/// matches.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// let values = vec![10, 20, 30, 20];
/// assert_eq!(index_of(&values, &20), Some(1));
/// assert_eq!(index_of(&values, &40), None);
/// ```
pub fn index_of<T, U>(sequence: &[T], target: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let mut result = None;

    each(sequence, |item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });
    result
}
