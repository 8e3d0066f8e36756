//! Positional access to the ends of a sequence.
//!
//! Requests for more elements than the sequence holds return the whole
//! sequence rather than failing.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub const fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub const fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len() - count.min(sequence.len())..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[1])]
    #[case(3, &[1, 2, 3])]
    #[case(10, &[1, 2, 3])]
    fn first_n_is_clamped(#[case] count: usize, #[case] expected: &[i32]) {
        assert_eq!(first_n(&[1, 2, 3], count), expected);
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[3])]
    #[case(3, &[1, 2, 3])]
    #[case(10, &[1, 2, 3])]
    fn last_n_is_clamped(#[case] count: usize, #[case] expected: &[i32]) {
        assert_eq!(last_n(&[1, 2, 3], count), expected);
    }

    #[rstest]
    fn ends_of_empty_sequence_are_absent() {
        let empty: Vec<char> = Vec::new();
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
    }
}
