#![cfg(feature = "function")]
//! Integration tests for the function wrappers.
//!
//! Covers:
//! - once: single invocation, cached result, wrapper independence
//! - memoize: per-argument caching, tuple keys, mixing with collection helpers
//! - identity

use std::cell::{Cell, RefCell};

use rstest::rstest;
use underbar::function::{Memoize, Once, identity, memoize, once};

// =============================================================================
// once
// =============================================================================

#[rstest]
fn once_invokes_counter_a_single_time() {
    let counter = Cell::new(0);
    let increment = once(|(): ()| {
        counter.set(counter.get() + 1);
        counter.get()
    });

    assert_eq!(*increment.call(()), 1);
    assert_eq!(*increment.call(()), 1);
    assert_eq!(counter.get(), 1);
}

#[rstest]
fn once_ignores_later_arguments() {
    let seen = RefCell::new(Vec::new());
    let record = once(|word: &str| {
        seen.borrow_mut().push(word.to_owned());
        word.len()
    });

    assert_eq!(*record.call("first"), 5);
    assert_eq!(*record.call("second"), 5);
    assert_eq!(*seen.borrow(), vec!["first".to_owned()]);
}

#[rstest]
fn separate_once_wrappers_are_independent() {
    let calls = Cell::new(0);
    let bump = |(): ()| calls.set(calls.get() + 1);

    let first = Once::new(bump);
    let second = Once::new(bump);

    first.call(());
    first.call(());
    second.call(());

    assert_eq!(calls.get(), 2);
}

#[rstest]
fn once_accepts_plain_function_pointers() {
    fn square(value: u32) -> u32 {
        value * value
    }

    let wrapped: Once<u32, u32> = Once::new(square);
    assert_eq!(*wrapped.call(9), 81);
    assert_eq!(*wrapped.call(2), 81);
}

// =============================================================================
// memoize
// =============================================================================

#[rstest]
fn memoize_returns_cached_result_without_calling_again() {
    let calls = Cell::new(0);
    let add_one = memoize(|value: i32| {
        calls.set(calls.get() + 1);
        value + 1
    });

    assert_eq!(add_one.call(1), 2);
    assert_eq!(add_one.call(1), 2);
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(vec![1, 2, 3], 3)]
#[case(vec![1, 1, 1], 1)]
#[case(vec![4, 5, 4, 5], 2)]
fn memoize_calls_once_per_distinct_argument(#[case] arguments: Vec<u16>, #[case] expected: usize) {
    let calls = Cell::new(0);
    let double = memoize(|value: u16| {
        calls.set(calls.get() + 1);
        value * 2
    });

    for argument in arguments {
        assert_eq!(double.call(argument), argument * 2);
    }

    assert_eq!(calls.get(), expected);
    assert_eq!(double.len(), expected);
}

#[rstest]
fn memoize_over_tuple_of_arguments() {
    let calls = Cell::new(0);
    let join = Memoize::new(|(left, right): (String, String)| {
        calls.set(calls.get() + 1);
        format!("{left}-{right}")
    });

    let key = (String::from("a"), String::from("b"));
    assert_eq!(join.call(key.clone()), "a-b");
    assert_eq!(join.call(key), "a-b");
    assert_eq!(join.call((String::from("b"), String::from("a"))), "b-a");
    assert_eq!(calls.get(), 2);
}

#[cfg(feature = "collection")]
#[rstest]
fn memoize_works_as_collection_transform() {
    use underbar::collection::map;

    let calls = Cell::new(0);
    let shout = memoize(|word: &str| {
        calls.set(calls.get() + 1);
        word.to_uppercase()
    });

    let words = vec!["hi", "yo", "hi", "hi"];
    let shouted = map(&words, |word| shout.call(*word));

    assert_eq!(shouted, vec!["HI", "YO", "HI", "HI"]);
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// identity
// =============================================================================

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i64::MAX)]
fn identity_returns_argument(#[case] value: i64) {
    assert_eq!(identity(value), value);
}
