//! Failure records produced by the comparator

use serde::{Deserialize, Serialize};
use std::fmt;

use super::path::ElementPath;

/// What went wrong for one compared pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// Sequences or buffers with different element counts
    LengthMismatch {
        /// Length of the actual value
        actual_len: usize,
        /// Length of the expected value
        expected_len: usize,
    },

    /// Raw buffers that do not hold the requested number of elements
    BufferTooShort {
        /// Length of the actual buffer
        actual_len: usize,
        /// Length of the expected buffer
        expected_len: usize,
        /// Element count the comparison asked for
        required: usize,
    },

    /// Matrices with different (rows, cols)
    ShapeMismatch {
        /// Shape of the actual value
        actual_shape: (usize, usize),
        /// Shape of the expected value
        expected_shape: (usize, usize),
    },

    /// Floating point values further apart than the tolerance allows
    NotNear {
        /// Absolute difference
        diff: f64,
        /// Largest accepted difference for this pair
        tolerance: f64,
    },

    /// Integer values that are not identical
    NotEqual,

    /// `actual <= expected` does not hold
    NotLessOrEqual,

    /// `actual >= expected` does not hold
    NotGreaterOrEqual,
}

impl FailureKind {
    /// True for length, buffer and shape mismatches
    pub fn is_size_mismatch(&self) -> bool {
        matches!(
            self,
            FailureKind::LengthMismatch { .. }
                | FailureKind::BufferTooShort { .. }
                | FailureKind::ShapeMismatch { .. }
        )
    }
}

/// One recorded expectation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    /// Label given by the caller (e.g. "normals")
    pub field: String,
    /// Where inside the value the failure occurred
    pub path: ElementPath,
    /// Failure classification
    #[serde(flatten)]
    pub kind: FailureKind,
    /// Rendered actual value (or length/shape for size mismatches)
    pub actual: String,
    /// Rendered expected value (or length/shape for size mismatches)
    pub expected: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}: ", self.field, self.path)?;
        match &self.kind {
            FailureKind::LengthMismatch {
                actual_len,
                expected_len,
            } => write!(
                f,
                "length mismatch (actual: {}, expected: {})",
                actual_len, expected_len
            ),
            FailureKind::BufferTooShort {
                actual_len,
                expected_len,
                required,
            } => write!(
                f,
                "buffer shorter than {} (actual: {}, expected: {})",
                required, actual_len, expected_len
            ),
            FailureKind::ShapeMismatch {
                actual_shape,
                expected_shape,
            } => write!(
                f,
                "dimension mismatch (actual: {}x{}, expected: {}x{})",
                actual_shape.0, actual_shape.1, expected_shape.0, expected_shape.1
            ),
            FailureKind::NotNear { diff, tolerance } => write!(
                f,
                "expected {}, got {} (diff: {}, tolerance: {})",
                self.expected, self.actual, diff, tolerance
            ),
            FailureKind::NotEqual => {
                write!(f, "expected {}, got {}", self.expected, self.actual)
            }
            FailureKind::NotLessOrEqual => {
                write!(f, "expected {} <= {}", self.actual, self.expected)
            }
            FailureKind::NotGreaterOrEqual => {
                write!(f, "expected {} >= {}", self.actual, self.expected)
            }
        }
    }
}
