//! Floating point tolerance
//!
//! A fixed absolute threshold is the historical behaviour and stays the
//! default. Relative and hybrid tolerances exist for values whose magnitude
//! varies widely (e.g. squared distances next to unit normals).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::THRESHOLD_1E_4;

/// Maximum allowed difference for two floating point values to be equal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tolerance {
    /// `|a - b| <= eps`
    Absolute(f64),
    /// `|a - b| <= rel * max(|a|, |b|)`
    Relative(f64),
    /// `|a - b| <= max(absolute, relative * max(|a|, |b|))`
    Hybrid {
        /// Floor used near zero
        absolute: f64,
        /// Fraction of the larger magnitude
        relative: f64,
    },
}

impl Tolerance {
    /// Absolute tolerance
    pub fn absolute(eps: f64) -> Self {
        Tolerance::Absolute(eps)
    }

    /// Relative tolerance
    pub fn relative(rel: f64) -> Self {
        Tolerance::Relative(rel)
    }

    /// Hybrid tolerance
    pub fn hybrid(absolute: f64, relative: f64) -> Self {
        Tolerance::Hybrid { absolute, relative }
    }

    /// Largest difference accepted for this particular pair
    pub fn bound(&self, actual: f64, expected: f64) -> f64 {
        let magnitude = actual.abs().max(expected.abs());
        match *self {
            Tolerance::Absolute(eps) => eps,
            Tolerance::Relative(rel) => rel * magnitude,
            Tolerance::Hybrid { absolute, relative } => absolute.max(relative * magnitude),
        }
    }

    /// Check a pair against this tolerance
    ///
    /// Returns the offending difference and bound when the pair is rejected.
    /// Identical values (including equal infinities) are always accepted and
    /// NaN is never accepted.
    pub fn check(&self, actual: f64, expected: f64) -> Result<(), (f64, f64)> {
        if actual == expected {
            return Ok(());
        }
        let diff = (actual - expected).abs();
        let bound = self.bound(actual, expected);
        // An infinite operand makes a relative bound infinite too
        if diff.is_finite() && diff <= bound {
            Ok(())
        } else {
            Err((diff, bound))
        }
    }

    /// Convenience wrapper around [`Tolerance::check`]
    #[inline]
    pub fn accepts(&self, actual: f64, expected: f64) -> bool {
        self.check(actual, expected).is_ok()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(THRESHOLD_1E_4)
    }
}

impl From<f64> for Tolerance {
    fn from(eps: f64) -> Self {
        Tolerance::Absolute(eps)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Absolute(eps) => write!(f, "abs {}", eps),
            Tolerance::Relative(rel) => write!(f, "rel {}", rel),
            Tolerance::Hybrid { absolute, relative } => {
                write!(f, "abs {} / rel {}", absolute, relative)
            }
        }
    }
}
