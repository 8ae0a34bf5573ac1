//! Session configuration

use serde::{Deserialize, Serialize};

use crate::compare::Tolerance;
use crate::constants::DEFAULT_MAX_LISTED_FAILURES;

/// Settings for an [`Expectations`](crate::Expectations) session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectConfig {
    /// Tolerance used by `eq` when no explicit tolerance is given
    pub tolerance: Tolerance,
    /// How many failures a summary spells out before truncating
    pub max_listed_failures: usize,
}

impl ExpectConfig {
    /// Create a configuration
    pub fn new(tolerance: Tolerance, max_listed_failures: usize) -> Self {
        Self {
            tolerance,
            max_listed_failures,
        }
    }

    /// Replace the default tolerance
    pub fn with_tolerance(mut self, tolerance: impl Into<Tolerance>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    /// Replace the failure listing limit
    pub fn with_max_listed_failures(mut self, max_listed_failures: usize) -> Self {
        self.max_listed_failures = max_listed_failures;
        self
    }
}

impl Default for ExpectConfig {
    fn default() -> Self {
        Self::new(Tolerance::default(), DEFAULT_MAX_LISTED_FAILURES)
    }
}
