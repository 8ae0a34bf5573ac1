//! Error types for expectation sessions and byte views
//!
//! Comparisons themselves never fail with an error; mismatches are reported.
//! Errors only appear when a session is finished with failures recorded, or
//! when raw bytes cannot be viewed as the requested scalar type.

use std::fmt;

use crate::compare::Failure;

/// Outcome of [`Expectations::finish`](crate::Expectations::finish) when at
/// least one expectation failed
#[derive(Debug, Clone)]
pub enum ExpectationError {
    /// One or more expectations failed
    Failed {
        /// Total number of reported outcomes
        checks: usize,
        /// Total number of failures
        failed: usize,
        /// The first failures, in report order
        listed: Vec<Failure>,
    },

    /// The failure report could not be serialized
    Report {
        /// Description of the serialization issue
        description: String,
    },
}

impl ExpectationError {
    /// Number of failures not included in `listed`
    pub fn omitted(&self) -> usize {
        match self {
            ExpectationError::Failed { failed, listed, .. } => failed.saturating_sub(listed.len()),
            ExpectationError::Report { .. } => 0,
        }
    }
}

impl fmt::Display for ExpectationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectationError::Failed {
                checks,
                failed,
                listed,
            } => {
                write!(f, "{} of {} expectations failed", failed, checks)?;
                for failure in listed {
                    write!(f, "\n  {}", failure)?;
                }
                let omitted = self.omitted();
                if omitted > 0 {
                    write!(f, "\n  ... and {} more", omitted)?;
                }
                Ok(())
            }
            ExpectationError::Report { description } => {
                write!(f, "Failed to serialize failure report: {}", description)
            }
        }
    }
}

impl std::error::Error for ExpectationError {}

impl From<serde_json::Error> for ExpectationError {
    fn from(e: serde_json::Error) -> Self {
        ExpectationError::Report {
            description: e.to_string(),
        }
    }
}

/// Errors from viewing a byte buffer as a typed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Fewer bytes than the requested element count needs
    TooShort {
        /// Bytes needed
        required: usize,
        /// Bytes available
        available: usize,
    },

    /// Requested element count does not fit in a byte length
    LengthOverflow {
        /// Requested element count
        len: usize,
        /// Size of one element in bytes
        element_size: usize,
    },

    /// Byte length is not a multiple of the element size
    TrailingBytes {
        /// Byte length of the input
        len: usize,
        /// Size of one element in bytes
        element_size: usize,
    },

    /// Start address does not satisfy the element alignment
    Misaligned {
        /// Required alignment in bytes
        align: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::TooShort {
                required,
                available,
            } => write!(
                f,
                "Byte buffer too short: need {} bytes, have {}",
                required, available
            ),
            ViewError::LengthOverflow { len, element_size } => write!(
                f,
                "{} elements of {} bytes overflow the addressable length",
                len, element_size
            ),
            ViewError::TrailingBytes { len, element_size } => write!(
                f,
                "Byte length {} is not a multiple of element size {}",
                len, element_size
            ),
            ViewError::Misaligned { align } => {
                write!(f, "Byte buffer is not aligned to {} bytes", align)
            }
        }
    }
}

impl std::error::Error for ViewError {}
