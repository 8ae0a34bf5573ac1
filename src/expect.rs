//! Expectation entry points
//!
//! Free functions take the reporter explicitly and mirror the shapes tests
//! compare: aggregates, sequences (nested to any depth), raw buffers with an
//! explicit length, and broadcast of one aggregate over a sequence.
//!
//! [`Expectations`] bundles a reporter with a failure tally so a test can run
//! every comparison and fail once at the end with the complete list.
//!
//! ```
//! use numeric_expectations::Expectations;
//! use nalgebra::Vector3;
//!
//! let normals = vec![Vector3::new(0.0f32, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0)];
//! let expected = vec![Vector3::new(0.0f32, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.00001)];
//!
//! let mut ex = Expectations::new();
//! ex.eq(&normals, &expected, "normals");
//! ex.le_each(&Vector3::new(-1.0f32, -1.0, -1.0), &normals, "normals lower bound");
//! ex.assert_passed();
//! ```

use serde::Serialize;

use crate::compare::{broadcast, ExpectScalar, Expectable, Failure, Relation, Tolerance, Walker};
use crate::config::ExpectConfig;
use crate::errors::ExpectationError;
use crate::reporter::{CompositeReporter, ExpectationReporter, NoOpReporter, RecordingReporter};

// ============================================================================
// Free functions
// ============================================================================

fn run<E>(
    reporter: &mut dyn ExpectationReporter,
    actual: &E,
    expected: &E,
    relation: Relation,
    field_name: &str,
) where
    E: Expectable + ?Sized,
{
    let mut walker = Walker::new(reporter, field_name);
    actual.expect_relation(expected, &relation, &mut walker);
}

/// Expect `actual` and `expected` to be equal element by element
///
/// Floating point elements must lie within `tolerance`; integer elements
/// must match exactly. Shapes and lengths are checked first, and a mismatch
/// is reported once instead of comparing elements.
pub fn expect_eq<E>(
    reporter: &mut dyn ExpectationReporter,
    actual: &E,
    expected: &E,
    tolerance: impl Into<Tolerance>,
    field_name: &str,
) where
    E: Expectable + ?Sized,
{
    run(
        reporter,
        actual,
        expected,
        Relation::Near(tolerance.into()),
        field_name,
    );
}

/// Expect `actual <= expected` element by element
pub fn expect_le<E>(
    reporter: &mut dyn ExpectationReporter,
    actual: &E,
    expected: &E,
    field_name: &str,
) where
    E: Expectable + ?Sized,
{
    run(reporter, actual, expected, Relation::LessOrEqual, field_name);
}

/// Expect `actual >= expected` element by element
pub fn expect_ge<E>(
    reporter: &mut dyn ExpectationReporter,
    actual: &E,
    expected: &E,
    field_name: &str,
) where
    E: Expectable + ?Sized,
{
    run(reporter, actual, expected, Relation::GreaterOrEqual, field_name);
}

/// Expect `single <= sequence[i]` for every `i`
pub fn expect_le_each<E: Expectable>(
    reporter: &mut dyn ExpectationReporter,
    single: &E,
    sequence: &[E],
    field_name: &str,
) {
    let mut walker = Walker::new(reporter, field_name);
    broadcast(single, sequence, &Relation::LessOrEqual, &mut walker);
}

/// Expect `single >= sequence[i]` for every `i`
pub fn expect_ge_each<E: Expectable>(
    reporter: &mut dyn ExpectationReporter,
    single: &E,
    sequence: &[E],
    field_name: &str,
) {
    let mut walker = Walker::new(reporter, field_name);
    broadcast(single, sequence, &Relation::GreaterOrEqual, &mut walker);
}

/// Expect the first `len` elements of two raw buffers to be equal
///
/// A buffer holding fewer than `len` elements is a length failure and no
/// element is compared.
pub fn expect_eq_buffers<T>(
    reporter: &mut dyn ExpectationReporter,
    actual: &[T],
    expected: &[T],
    len: usize,
    tolerance: impl Into<Tolerance>,
    field_name: &str,
) where
    T: ExpectScalar + Expectable,
{
    let mut walker = Walker::new(reporter, field_name);
    if !walker.buffers_hold(actual.len(), expected.len(), len) {
        return;
    }
    actual[..len].expect_relation(&expected[..len], &Relation::Near(tolerance.into()), &mut walker);
}

/// Marker for a test whose subject is not implemented yet
///
/// Logs a warning and records nothing, so the test still passes.
pub fn not_implemented(name: &str) {
    log::warn!("{}: not implemented", name);
}

// ============================================================================
// Expectations session
// ============================================================================

/// Counts from a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Reported outcomes (scalar checks plus size failures)
    pub checks: usize,
    /// Outcomes that held
    pub passed: usize,
    /// Outcomes that failed
    pub failed: usize,
}

/// A set of non-fatal expectations evaluated together
///
/// Every comparison runs to completion and is forwarded to the wrapped
/// reporter; failures are also kept here so [`Expectations::finish`] can
/// report them all at once.
#[derive(Debug, Clone, Default)]
pub struct Expectations<R: ExpectationReporter = NoOpReporter> {
    config: ExpectConfig,
    reporter: R,
    tally: RecordingReporter,
}

impl Expectations<NoOpReporter> {
    /// Session with default configuration and no extra reporter
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ExpectationReporter> Expectations<R> {
    /// Session that also forwards every outcome to `reporter`
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            config: ExpectConfig::default(),
            reporter,
            tally: RecordingReporter::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ExpectConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ExpectConfig {
        &self.config
    }

    /// The wrapped reporter
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the session and return the wrapped reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn sink(&mut self) -> CompositeReporter<&mut RecordingReporter, &mut R> {
        CompositeReporter::new(&mut self.tally, &mut self.reporter)
    }

    /// [`expect_eq`] with the configured tolerance
    pub fn eq<E: Expectable + ?Sized>(&mut self, actual: &E, expected: &E, field_name: &str) {
        let tolerance = self.config.tolerance;
        self.eq_within(actual, expected, tolerance, field_name);
    }

    /// [`expect_eq`] with an explicit tolerance
    pub fn eq_within<E: Expectable + ?Sized>(
        &mut self,
        actual: &E,
        expected: &E,
        tolerance: impl Into<Tolerance>,
        field_name: &str,
    ) {
        expect_eq(&mut self.sink(), actual, expected, tolerance, field_name);
    }

    /// [`expect_le`]
    pub fn le<E: Expectable + ?Sized>(&mut self, actual: &E, expected: &E, field_name: &str) {
        expect_le(&mut self.sink(), actual, expected, field_name);
    }

    /// [`expect_ge`]
    pub fn ge<E: Expectable + ?Sized>(&mut self, actual: &E, expected: &E, field_name: &str) {
        expect_ge(&mut self.sink(), actual, expected, field_name);
    }

    /// [`expect_le_each`]
    pub fn le_each<E: Expectable>(&mut self, single: &E, sequence: &[E], field_name: &str) {
        expect_le_each(&mut self.sink(), single, sequence, field_name);
    }

    /// [`expect_ge_each`]
    pub fn ge_each<E: Expectable>(&mut self, single: &E, sequence: &[E], field_name: &str) {
        expect_ge_each(&mut self.sink(), single, sequence, field_name);
    }

    /// [`expect_eq_buffers`] with the configured tolerance
    pub fn eq_buffers<T: ExpectScalar + Expectable>(
        &mut self,
        actual: &[T],
        expected: &[T],
        len: usize,
        field_name: &str,
    ) {
        let tolerance = self.config.tolerance;
        expect_eq_buffers(&mut self.sink(), actual, expected, len, tolerance, field_name);
    }

    /// Failures recorded so far, in report order
    pub fn failures(&self) -> &[Failure] {
        self.tally.failures()
    }

    /// Counts so far
    pub fn summary(&self) -> Summary {
        Summary {
            checks: self.tally.total_checks(),
            passed: self.tally.passes(),
            failed: self.tally.failures().len(),
        }
    }

    /// Recorded failures as pretty-printed JSON
    pub fn report_json(&self) -> Result<String, ExpectationError> {
        Ok(self.tally.to_json()?)
    }

    /// Finish the session
    ///
    /// Returns the summary when nothing failed, otherwise an error listing up
    /// to `max_listed_failures` failures.
    pub fn finish(self) -> Result<Summary, ExpectationError> {
        let summary = self.summary();
        if summary.failed == 0 {
            log::debug!("{} expectations passed", summary.checks);
            return Ok(summary);
        }
        let listed = self
            .tally
            .failures()
            .iter()
            .take(self.config.max_listed_failures)
            .cloned()
            .collect();
        Err(ExpectationError::Failed {
            checks: summary.checks,
            failed: summary.failed,
            listed,
        })
    }

    /// Panic with the failure list if anything failed
    #[track_caller]
    pub fn assert_passed(self) {
        if let Err(e) = self.finish() {
            panic!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ElementPath, FailureKind};
    use nalgebra::{Vector2, Vector3};

    #[test]
    fn test_expect_eq_reports_only_out_of_tolerance_element() {
        let mut reporter = RecordingReporter::new();
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let b = Vector3::new(1.00005f32, 2.0, 3.001);

        expect_eq(&mut reporter, &a, &b, 1e-4, "p");

        assert_eq!(reporter.passes(), 2);
        assert_eq!(reporter.failed_paths(), vec![ElementPath::from_indices(&[2])]);
    }

    #[test]
    fn test_expect_le_and_ge_flip_on_strict_inputs() {
        let lo = Vector2::new(1, 2);
        let hi = Vector2::new(3, 4);

        let mut reporter = RecordingReporter::new();
        expect_le(&mut reporter, &lo, &hi, "le");
        assert!(reporter.is_clean());

        expect_le(&mut reporter, &hi, &lo, "le reversed");
        assert_eq!(reporter.failures().len(), 2);

        let mut reporter = RecordingReporter::new();
        expect_ge(&mut reporter, &hi, &lo, "ge");
        assert!(reporter.is_clean());
    }

    #[test]
    fn test_expect_eq_buffers_short_buffer() {
        let mut reporter = RecordingReporter::new();
        expect_eq_buffers(&mut reporter, &[1u8, 2], &[1u8, 2, 3], 3, 0.0, "bytes");

        assert_eq!(reporter.passes(), 0);
        assert_eq!(reporter.failures().len(), 1);
        assert_eq!(
            reporter.failures()[0].kind,
            FailureKind::BufferTooShort {
                actual_len: 2,
                expected_len: 3,
                required: 3
            }
        );
    }

    #[test]
    fn test_expect_eq_buffers_both_short_reported_once() {
        let mut reporter = RecordingReporter::new();
        expect_eq_buffers(&mut reporter, &[1u8], &[1u8, 2], 3, 0.0, "b");

        assert_eq!(reporter.passes(), 0);
        assert_eq!(reporter.failures().len(), 1);
        let failure = &reporter.failures()[0];
        assert_eq!(
            failure.kind,
            FailureKind::BufferTooShort {
                actual_len: 1,
                expected_len: 2,
                required: 3
            }
        );
        assert_eq!(
            failure.to_string(),
            "b: buffer shorter than 3 (actual: 1, expected: 2)"
        );
    }

    #[test]
    fn test_expect_eq_infinity_not_near_finite_under_relative() {
        let mut reporter = RecordingReporter::new();
        expect_eq(&mut reporter, &f64::INFINITY, &1.0, Tolerance::relative(1e-3), "r");
        expect_eq(
            &mut reporter,
            &f64::INFINITY,
            &f64::NEG_INFINITY,
            Tolerance::hybrid(1e-6, 1e-3),
            "h",
        );
        assert_eq!(reporter.passes(), 0);
        assert_eq!(reporter.failures().len(), 2);
    }

    #[test]
    fn test_expect_eq_buffers_ignores_tail_past_len() {
        let mut reporter = RecordingReporter::new();
        expect_eq_buffers(&mut reporter, &[1.0f64, 2.0, 9.0], &[1.0, 2.0], 2, 1e-9, "xs");
        assert!(reporter.is_clean());
        assert_eq!(reporter.passes(), 2);
    }

    #[test]
    fn test_session_collects_everything() {
        let mut ex = Expectations::with_reporter(RecordingReporter::new());
        ex.eq(&vec![1, 2, 3], &vec![1, 2, 4], "ids");
        ex.le(&[1.0f32], &[0.5f32], "bound");

        let summary = ex.summary();
        assert_eq!(summary.checks, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(ex.reporter().failures().len(), 2);

        let err = ex.finish().unwrap_err();
        assert!(err.to_string().starts_with("2 of 4 expectations failed"));
    }

    #[test]
    fn test_session_finish_ok() {
        let mut ex = Expectations::new();
        ex.ge(&Vector2::new(1.0, 1.0), &Vector2::new(1.0, 0.0), "v");
        assert_eq!(
            ex.finish().unwrap(),
            Summary {
                checks: 2,
                passed: 2,
                failed: 0
            }
        );
    }

    #[test]
    fn test_session_listing_is_bounded() {
        let config = ExpectConfig::default().with_max_listed_failures(1);
        let mut ex = Expectations::new().with_config(config);
        ex.eq(&[1, 2, 3], &[4, 5, 6], "v");

        match ex.finish() {
            Err(ExpectationError::Failed { failed, listed, .. }) => {
                assert_eq!(failed, 3);
                assert_eq!(listed.len(), 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_session_uses_configured_tolerance() {
        let config = ExpectConfig::default().with_tolerance(0.5);
        let mut ex = Expectations::new().with_config(config);
        ex.eq(&1.0f64, &1.4f64, "loose");
        ex.assert_passed();
    }

    #[test]
    #[should_panic(expected = "ids[2]: expected 4, got 3")]
    fn test_assert_passed_panics_with_failures() {
        let mut ex = Expectations::new();
        ex.eq(&vec![1, 2, 3], &vec![1, 2, 4], "ids");
        ex.assert_passed();
    }

    #[test]
    fn test_not_implemented_is_noop() {
        not_implemented("mesh simplification");
    }
}
