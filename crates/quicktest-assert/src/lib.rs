//! Assertion primitives for quicktest
//!
//! The harness crate owns discovery, execution, and reporting; this crate
//! provides only the checks a test body calls and the failure signal they
//! raise.
//!
//! # API
//!
//! ## Basic
//! - `assert_true(expression, message)` — assert expression is true
//!
//! ## Equality
//! - `assert_equal(actual, expected, message)` — assert equality
//! - `assert_not_equal(actual, expected, message)` — assert inequality
//!
//! ## Containers
//! - `assert_list_equal(list1, list2, message)` — ordered, elementwise
//! - `assert_set_equal(set1, set2, message)` — order-insensitive
//! - `assert_tuple_equal(tuple1, tuple2, message)` — fixed-arity, ordered
//!
//! Every helper accepts an optional custom message; when supplied it
//! replaces the default template verbatim. A failed check returns
//! [`AssertionError`]; the runner treats that error kind, and only that
//! kind, as a failed test.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Outcome of a single assertion.
pub type AssertResult = Result<(), AssertionError>;

/// A failed assertion. Carries a human-readable message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message shown in the failed-test report line.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build the failure, preferring the caller's message over the default.
fn failure(message: Option<&str>, default: impl FnOnce() -> String) -> AssertionError {
    match message {
        Some(m) => AssertionError::new(m),
        None => AssertionError::new(default()),
    }
}

// ============================================================================
// Basic assertions
// ============================================================================

/// Assert that `expression` is true.
pub fn assert_true(expression: bool, message: Option<&str>) -> AssertResult {
    if !expression {
        return Err(failure(message, || {
            "Assertion failed: expression is not true".to_string()
        }));
    }
    Ok(())
}

// ============================================================================
// Equality assertions
// ============================================================================

/// Assert that `actual` equals `expected`.
pub fn assert_equal<T>(actual: T, expected: T, message: Option<&str>) -> AssertResult
where
    T: PartialEq + Debug,
{
    if actual != expected {
        return Err(failure(message, || {
            format!("Expected {:?}, but got {:?}", expected, actual)
        }));
    }
    Ok(())
}

/// Assert that `actual` does not equal `expected`.
pub fn assert_not_equal<T>(actual: T, expected: T, message: Option<&str>) -> AssertResult
where
    T: PartialEq + Debug,
{
    if actual == expected {
        return Err(failure(message, || {
            format!("{:?} and {:?} are equal", expected, actual)
        }));
    }
    Ok(())
}

// ============================================================================
// Container assertions
// ============================================================================
//
// Comparison is the element type's `PartialEq` in every case; these exist
// for input-shape documentation and for the container-flavored default
// messages. Slice and tuple equality is order- and position-sensitive;
// set equality ignores order and collapses duplicates by construction.

/// Assert that two ordered sequences are equal, elementwise.
pub fn assert_list_equal<T>(list1: &[T], list2: &[T], message: Option<&str>) -> AssertResult
where
    T: PartialEq + Debug,
{
    if list1 != list2 {
        return Err(failure(message, || {
            format!(
                "Assertion failed: {:?} is not the same as {:?}",
                list1, list2
            )
        }));
    }
    Ok(())
}

/// Assert that two sets hold the same elements, in any order.
pub fn assert_set_equal<T>(
    set1: &HashSet<T>,
    set2: &HashSet<T>,
    message: Option<&str>,
) -> AssertResult
where
    T: Eq + Hash + Debug,
{
    if set1 != set2 {
        return Err(failure(message, || {
            format!("Assertion failed: {:?} is not the same as {:?}", set1, set2)
        }));
    }
    Ok(())
}

/// Assert that two fixed-arity ordered tuples are equal.
pub fn assert_tuple_equal<T>(tuple1: T, tuple2: T, message: Option<&str>) -> AssertResult
where
    T: PartialEq + Debug,
{
    if tuple1 != tuple2 {
        return Err(failure(message, || {
            format!(
                "Assertion failed: {:?} is not the same as {:?}",
                tuple1, tuple2
            )
        }));
    }
    Ok(())
}

// ============================================================================
// Unit tests
// ============================================================================
