//! Test registration and discovery
//!
//! Test authors register named zero-argument closures on a
//! [`TestCaseBuilder`]; `build()` performs discovery once, keeping exactly
//! the registrations whose name carries the `test_` prefix, in
//! registration order. The resulting [`TestCase`] caches that collection
//! for the runner.

use crate::runner::{RunResult, TestRunner};
use quicktest_assert::AssertResult;
use std::fmt;

/// Name prefix that marks a registered closure as a test method.
pub const TEST_PREFIX: &str = "test_";

type TestFn = Box<dyn Fn() -> AssertResult>;

/// A discovered test method: a name and the closure to invoke.
pub struct TestMethod {
    name: String,
    body: TestFn,
}

impl TestMethod {
    /// Name of the test method (e.g., "test_addition")
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self) -> AssertResult {
        (self.body)()
    }
}

impl fmt::Debug for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethod")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Collects named closures before discovery.
#[derive(Debug, Default)]
pub struct TestCaseBuilder {
    registered: Vec<TestMethod>,
}

impl TestCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `name`.
    ///
    /// Registration accepts any name; only names starting with `test_`
    /// survive discovery at `build()`. The closure must be re-invocable
    /// (`Fn`) so the case can be run more than once.
    pub fn method(
        mut self,
        name: impl Into<String>,
        body: impl Fn() -> AssertResult + 'static,
    ) -> Self {
        self.registered.push(TestMethod {
            name: name.into(),
            body: Box::new(body),
        });
        self
    }

    /// Discover the test methods: keep `test_`-prefixed registrations,
    /// in registration order, and cache them on the case.
    pub fn build(self) -> TestCase {
        let methods = self
            .registered
            .into_iter()
            .filter(|m| m.name.starts_with(TEST_PREFIX))
            .collect();

        TestCase { methods }
    }
}

/// A built test case holding its discovered methods.
#[derive(Debug, Default)]
pub struct TestCase {
    methods: Vec<TestMethod>,
}

impl TestCase {
    pub fn builder() -> TestCaseBuilder {
        TestCaseBuilder::new()
    }

    /// The discovered methods, in the order they will run.
    pub fn methods(&self) -> &[TestMethod] {
        &self.methods
    }

    /// Get count of discovered methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the case has any methods
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Run every discovered method with a default runner, reporting to
    /// stdout. Counts are recomputed from scratch on every call.
    pub fn run(&self) -> RunResult {
        TestRunner::new().run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicktest_assert::assert_true;

    #[test]
    fn test_build_keeps_only_prefixed_names() {
        let case = TestCase::builder()
            .method("test_one", || Ok(()))
            .method("helper_method", || Ok(()))
            .method("test_two", || Ok(()))
            .method("setup", || Ok(()))
            .build();

        let names: Vec<_> = case.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["test_one", "test_two"]);
    }

    #[test]
    fn test_build_preserves_registration_order() {
        let case = TestCase::builder()
            .method("test_zebra", || Ok(()))
            .method("test_apple", || Ok(()))
            .method("test_mango", || Ok(()))
            .build();

        let names: Vec<_> = case.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["test_zebra", "test_apple", "test_mango"]);
    }

    #[test]
    fn test_empty_builder_yields_empty_case() {
        let case = TestCase::builder().build();
        assert!(case.is_empty());
        assert_eq!(case.len(), 0);
    }

    #[test]
    fn test_case_with_no_matching_names_is_empty() {
        let case = TestCase::builder()
            .method("helper", || Ok(()))
            .method("fixture", || Ok(()))
            .build();
        assert!(case.is_empty());
    }

    #[test]
    fn test_methods_are_reinvocable() {
        let case = TestCase::builder()
            .method("test_flag", || assert_true(true, None))
            .build();

        let method = &case.methods()[0];
        assert!(method.invoke().is_ok());
        assert!(method.invoke().is_ok());
    }
}
