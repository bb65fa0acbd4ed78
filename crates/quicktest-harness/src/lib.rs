//! quicktest - a minimal test-case framework
//!
//! Register named zero-argument test closures on a builder, run them, and
//! get per-test pass/fail lines plus a summary:
//!
//! ```
//! use quicktest_harness::{assert_equal, TestCase};
//!
//! let case = TestCase::builder()
//!     .method("test_addition", || assert_equal(1 + 1, 2, None))
//!     .method("test_subtraction", || assert_equal(3 - 1, 2, None))
//!     .build();
//!
//! let result = case.run();
//! assert_eq!(result.passed, 2);
//! ```
//!
//! Only names starting with `test_` are discovered; discovery happens once
//! at `build()`. The runner counts an `Err(AssertionError)` as a failed
//! test and lets every other fault (a panic) unwind out of `run`.

pub mod case;
pub mod reporter;
pub mod runner;

pub use case::{TestCase, TestCaseBuilder, TestMethod, TEST_PREFIX};
pub use reporter::{ConsoleReporter, TestReporter, DEFAULT_RULE_WIDTH};
pub use runner::{RunResult, TestResult, TestRun, TestRunner};

// Assertion helpers, re-exported so test bodies need a single import.
pub use quicktest_assert::{
    assert_equal, assert_list_equal, assert_not_equal, assert_set_equal, assert_true,
    assert_tuple_equal, AssertResult, AssertionError,
};

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
