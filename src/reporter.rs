//! Reporting collaborators for expectation outcomes.
//!
//! Comparisons never panic or return errors on their own. Each scalar check
//! is handed to an [`ExpectationReporter`], which decides what a pass or a
//! failure means: count it, log it, store it, or abort the test.
//!
//! # Provided Reporters
//!
//! - [`NoOpReporter`]: discards everything
//! - [`RecordingReporter`]: counts passes and stores failures for inspection
//! - [`LoggingReporter`]: emits `log` records
//! - [`FatalReporter`]: panics on the first failure (assert-style)
//! - [`CompositeReporter`]: forwards to two reporters
//!
//! # Example
//!
//! ```
//! use numeric_expectations::{expect_eq, RecordingReporter};
//! use nalgebra::Vector3;
//!
//! let mut reporter = RecordingReporter::new();
//! expect_eq(
//!     &mut reporter,
//!     &Vector3::new(1.0f32, 2.0, 3.0),
//!     &Vector3::new(1.0f32, 2.0, 3.5),
//!     1e-4,
//!     "point",
//! );
//!
//! assert_eq!(reporter.passes(), 2);
//! assert_eq!(reporter.failures().len(), 1);
//! assert_eq!(reporter.failures()[0].path.indices(), &[2]);
//! ```

use crate::compare::{ElementPath, Failure};

// ============================================================================
// ExpectationReporter Trait
// ============================================================================

/// Receives the outcome of every scalar check and every size check.
///
/// All methods have default empty implementations, so you only need to
/// override the events you care about. The trait is object safe; the
/// comparator drives it through `&mut dyn ExpectationReporter`.
///
/// # Thread Safety
///
/// Reporters use `&mut self` for callbacks and are not required to be
/// `Send + Sync`. Tests that share one reporter across threads must
/// serialize access themselves.
pub trait ExpectationReporter {
    /// Called when a scalar relation holds.
    fn on_pass(&mut self, _field: &str, _path: &ElementPath) {}

    /// Called for every failed scalar check and every size mismatch.
    fn on_failure(&mut self, _failure: &Failure) {}
}

impl<R: ExpectationReporter + ?Sized> ExpectationReporter for &mut R {
    fn on_pass(&mut self, field: &str, path: &ElementPath) {
        (**self).on_pass(field, path);
    }

    fn on_failure(&mut self, failure: &Failure) {
        (**self).on_failure(failure);
    }
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Reporter that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ExpectationReporter for NoOpReporter {}

// ============================================================================
// RecordingReporter
// ============================================================================

/// Reporter that counts passes and keeps every failure.
///
/// Failures are stored in the order they were reported, which is traversal
/// order (index 0 to N-1, outermost index first).
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    passes: usize,
    failures: Vec<Failure>,
}

impl RecordingReporter {
    /// Create a new recording reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.passes = 0;
        self.failures.clear();
    }

    /// Number of scalar checks that held.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Recorded failures.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Take ownership of the recorded failures, leaving the list empty.
    pub fn take_failures(&mut self) -> Vec<Failure> {
        std::mem::take(&mut self.failures)
    }

    /// Total number of reported outcomes.
    pub fn total_checks(&self) -> usize {
        self.passes + self.failures.len()
    }

    /// True if nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure paths, handy for positional assertions in tests.
    pub fn failed_paths(&self) -> Vec<ElementPath> {
        self.failures.iter().map(|f| f.path.clone()).collect()
    }

    /// Render the recorded failures as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.failures)
    }
}

impl ExpectationReporter for RecordingReporter {
    fn on_pass(&mut self, _field: &str, _path: &ElementPath) {
        self.passes += 1;
    }

    fn on_failure(&mut self, failure: &Failure) {
        self.failures.push(failure.clone());
    }
}

// ============================================================================
// LoggingReporter
// ============================================================================

/// Reporter that logs outcomes using the log crate.
///
/// # Log Levels
///
/// - failures: ERROR
/// - passes: TRACE, only when constructed with [`LoggingReporter::verbose`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter {
    verbose: bool,
}

impl LoggingReporter {
    /// Create a new logging reporter that only logs failures.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a logging reporter that also traces every pass.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl ExpectationReporter for LoggingReporter {
    fn on_pass(&mut self, field: &str, path: &ElementPath) {
        if self.verbose {
            log::trace!("{}{}: ok", field, path);
        }
    }

    fn on_failure(&mut self, failure: &Failure) {
        log::error!("{}", failure);
    }
}

// ============================================================================
// FatalReporter
// ============================================================================

/// Reporter that turns the first failure into a panic.
///
/// Use it where a mismatch makes the rest of the test meaningless; the
/// default behaviour elsewhere is to keep going and collect everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FatalReporter;

impl FatalReporter {
    /// Create a new fatal reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ExpectationReporter for FatalReporter {
    fn on_failure(&mut self, failure: &Failure) {
        panic!("{}", failure);
    }
}

// ============================================================================
// CompositeReporter
// ============================================================================

/// Reporter that forwards events to two child reporters.
///
/// ```
/// use numeric_expectations::{
///     expect_le, CompositeReporter, LoggingReporter, RecordingReporter,
/// };
///
/// let mut composite = CompositeReporter::new(RecordingReporter::new(), LoggingReporter::new());
/// expect_le(&mut composite, &[1, 5], &[2, 4], "bounds");
///
/// assert_eq!(composite.first().failures().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CompositeReporter<A: ExpectationReporter, B: ExpectationReporter> {
    first: A,
    second: B,
}

impl<A: ExpectationReporter, B: ExpectationReporter> CompositeReporter<A, B> {
    /// Create a new composite reporter.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Get a reference to the first reporter.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a mutable reference to the first reporter.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Get a reference to the second reporter.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Get a mutable reference to the second reporter.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    /// Consume and return both reporters.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: ExpectationReporter, B: ExpectationReporter> ExpectationReporter
    for CompositeReporter<A, B>
{
    fn on_pass(&mut self, field: &str, path: &ElementPath) {
        self.first.on_pass(field, path);
        self.second.on_pass(field, path);
    }

    fn on_failure(&mut self, failure: &Failure) {
        self.first.on_failure(failure);
        self.second.on_failure(failure);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FailureKind;

    fn not_equal(index: usize) -> Failure {
        Failure {
            field: "ids".to_string(),
            path: ElementPath::from_indices(&[index]),
            kind: FailureKind::NotEqual,
            actual: "1".to_string(),
            expected: "2".to_string(),
        }
    }

    #[test]
    fn test_noop_reporter() {
        let mut reporter = NoOpReporter::new();

        // These should all compile and do nothing
        reporter.on_pass("x", &ElementPath::root());
        reporter.on_failure(&not_equal(0));
    }

    #[test]
    fn test_recording_reporter_captures_events() {
        let mut reporter = RecordingReporter::new();
        assert_eq!(reporter.total_checks(), 0);
        assert!(reporter.is_clean());

        reporter.on_pass("ids", &ElementPath::from_indices(&[0]));
        reporter.on_failure(&not_equal(1));
        reporter.on_pass("ids", &ElementPath::from_indices(&[2]));
        reporter.on_failure(&not_equal(3));

        assert_eq!(reporter.passes(), 2);
        assert_eq!(reporter.failures().len(), 2);
        assert_eq!(reporter.total_checks(), 4);
        assert_eq!(
            reporter.failed_paths(),
            vec![
                ElementPath::from_indices(&[1]),
                ElementPath::from_indices(&[3])
            ]
        );

        reporter.clear();
        assert_eq!(reporter.total_checks(), 0);
    }

    #[test]
    fn test_recording_reporter_json() {
        let mut reporter = RecordingReporter::new();
        reporter.on_failure(&not_equal(4));

        let json = reporter.to_json().unwrap();
        let parsed: Vec<Failure> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reporter.failures());
    }

    #[test]
    fn test_take_failures_empties_list() {
        let mut reporter = RecordingReporter::new();
        reporter.on_failure(&not_equal(0));
        let taken = reporter.take_failures();
        assert_eq!(taken.len(), 1);
        assert!(reporter.is_clean());
    }

    #[test]
    #[should_panic(expected = "ids[7]: expected 2, got 1")]
    fn test_fatal_reporter_panics_with_message() {
        FatalReporter::new().on_failure(&not_equal(7));
    }

    #[test]
    fn test_fatal_reporter_ignores_passes() {
        FatalReporter::new().on_pass("ids", &ElementPath::root());
    }

    #[test]
    fn test_composite_reporter_forwards_to_both() {
        let mut composite = CompositeReporter::new(RecordingReporter::new(), RecordingReporter::new());
        composite.on_pass("ids", &ElementPath::root());
        composite.on_failure(&not_equal(0));

        let (a, b) = composite.into_parts();
        assert_eq!(a.total_checks(), 2);
        assert_eq!(b.total_checks(), 2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn report_into<R: ExpectationReporter>(mut reporter: R) {
            reporter.on_failure(&not_equal(0));
        }

        let mut inner = RecordingReporter::new();
        report_into(&mut inner);
        assert_eq!(inner.failures().len(), 1);
    }
}
