/*!
# numeric-expectations - Non-fatal numeric expectations for geometry tests

Comparison helpers for test suites of numeric and geometry code. Values are
walked element by element and every outcome is handed to a reporter, so one
test run shows every mismatch instead of stopping at the first.

## Features

- Equality within a tolerance (absolute by default, `1e-4`), exact for integers
- Non-strict `<=` / `>=` checks, including one value broadcast over a sequence
- Works on nalgebra matrices/vectors, slices, arrays, `Vec` and `SmallVec`,
  nested to any depth
- Raw buffers compared up to an explicit length
- Checked typed views over byte buffers

## Modules

- [`compare`] - Deep element-wise comparator, tolerances, failure records
- [`expect`] - Entry points and the [`Expectations`] session
- [`reporter`] - Reporting collaborators
- [`view`] - Byte buffer views
- [`constants`] - Default threshold and zero aggregates

## Example

```rust
use numeric_expectations::{expect_eq, RecordingReporter, ZERO_3F};
use nalgebra::Vector3;

let centroids = vec![Vector3::new(0.0f32, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0)];
let expected = vec![ZERO_3F, Vector3::new(1.0, 2.0, 4.0)];

let mut reporter = RecordingReporter::new();
expect_eq(&mut reporter, &centroids, &expected, 1e-4, "centroids");

// Only the z coordinate of the second centroid is off
assert_eq!(reporter.failures().len(), 1);
assert_eq!(reporter.failures()[0].path.indices(), &[1, 2]);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Deep element-wise comparison
pub mod compare;

/// Expectation entry points and sessions
pub mod expect;

/// Reporting collaborators (recording, logging, fatal)
pub mod reporter;

/// Typed views over byte buffers
pub mod view;

/// Session configuration
pub mod config;

/// Default thresholds and zero aggregates
pub mod constants;

/// Error types
pub mod errors;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Comparator
pub use compare::{ElementPath, Expectable, ExpectScalar, Failure, FailureKind, Relation, Tolerance};

// Entry points
pub use expect::{
    expect_eq, expect_eq_buffers, expect_ge, expect_ge_each, expect_le, expect_le_each,
    not_implemented, Expectations, Summary,
};

// Reporters
pub use reporter::{
    CompositeReporter, ExpectationReporter, FatalReporter, LoggingReporter, NoOpReporter,
    RecordingReporter,
};

// Configuration and constants
pub use config::ExpectConfig;
pub use constants::{Vector6f, THRESHOLD_1E_4, ZERO_2F, ZERO_2I, ZERO_3F, ZERO_6F};

// Errors
pub use errors::{ExpectationError, ViewError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
