//! Sort-based deduplication.

/// Produces a duplicate-free, sorted version of `sequence`.
///
/// The input is consumed and sorted; each value is kept only when it
/// differs from its successor, so the output is in ascending order rather
/// than input order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(vec![3, 1, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(uniq(vec!["b", "a", "b"]), vec!["a", "b"]);
/// assert!(uniq(Vec::<i32>::new()).is_empty());
/// ```
pub fn uniq<T: Ord>(mut sequence: Vec<T>) -> Vec<T> {
    sequence.sort();

    let mut results = Vec::with_capacity(sequence.len());
    let mut sorted = sequence.into_iter().peekable();

    while let Some(value) = sorted.next() {
        if sorted.peek() != Some(&value) {
            results.push(value);
        }
    }
    results
}
