//! Test runner - execute discovered test methods
//!
//! Runs every method of a [`TestCase`] strictly sequentially, on the
//! calling thread. An `Err(AssertionError)` from a method body is the one
//! and only outcome counted as a failed test; a panic inside a body is a
//! harness-level fault and unwinds out of `run`, aborting the remaining
//! methods.

use crate::case::TestCase;
use crate::reporter::{ConsoleReporter, TestReporter};

/// Result of running a single test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed successfully
    Passed,
    /// Test failed with an assertion message
    Failed { message: String },
}

impl TestResult {
    /// Check if this result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Passed)
    }

    /// Check if this result is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Failed { .. })
    }
}

/// A completed test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    /// Name of the method that ran
    pub name: String,
    /// Result of running it
    pub result: TestResult,
}

/// Counters for one full run. Created fresh per `run` call.
///
/// `total == passed + failed` holds after every completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Test runner with output configuration
pub struct TestRunner {
    /// Print the `Completed` rule before the summary
    banner: bool,
    /// Disable colored output
    no_color: bool,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunner {
    /// Create a new test runner with default settings
    pub fn new() -> Self {
        Self {
            banner: false,
            no_color: false,
        }
    }

    /// Set whether to print the terminal-width `Completed` rule
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Run all methods in the case, reporting to stdout.
    pub fn run(&self, case: &TestCase) -> RunResult {
        let mut reporter = ConsoleReporter::stdout()
            .with_banner(self.banner)
            .with_no_color(self.no_color);
        self.run_with(case, &mut reporter)
    }

    /// Run all methods in the case against a caller-supplied reporter.
    ///
    /// Methods run in collection order, one at a time. Each test is
    /// reported as it finishes, so output emitted before a mid-run panic
    /// is not lost.
    pub fn run_with(&self, case: &TestCase, reporter: &mut dyn TestReporter) -> RunResult {
        let mut result = RunResult::default();

        for method in case.methods() {
            result.total += 1;

            // Only AssertionError is a test failure; panics unwind past
            // this loop and abort the remaining methods.
            match method.invoke() {
                Ok(()) => {
                    result.passed += 1;
                    reporter.on_test_complete(&TestRun {
                        name: method.name().to_string(),
                        result: TestResult::Passed,
                    });
                }
                Err(failure) => {
                    result.failed += 1;
                    reporter.on_test_complete(&TestRun {
                        name: method.name().to_string(),
                        result: TestResult::Failed {
                            message: failure.message().to_string(),
                        },
                    });
                }
            }
        }

        reporter.on_run_complete(&result);
        result
    }
}
