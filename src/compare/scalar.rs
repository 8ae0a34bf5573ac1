//! Terminal scalar predicates
//!
//! Floating point scalars are compared within a [`Tolerance`]; every integer
//! type (bytes included) is compared exactly and ignores the tolerance.

use std::fmt;

use super::failure::FailureKind;
use super::tolerance::Tolerance;

/// Relation checked between an actual and an expected scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    /// Equal within tolerance (exact for integers)
    Near(Tolerance),
    /// `actual <= expected`
    LessOrEqual,
    /// `actual >= expected`
    GreaterOrEqual,
}

impl Relation {
    /// Evaluate the relation for one pair of scalars
    pub fn check<T: ExpectScalar>(&self, actual: T, expected: T) -> Result<(), FailureKind> {
        match self {
            Relation::Near(tolerance) => actual.check_near(expected, tolerance),
            // NaN fails both inequalities
            Relation::LessOrEqual => {
                if actual <= expected {
                    Ok(())
                } else {
                    Err(FailureKind::NotLessOrEqual)
                }
            }
            Relation::GreaterOrEqual => {
                if actual >= expected {
                    Ok(())
                } else {
                    Err(FailureKind::NotGreaterOrEqual)
                }
            }
        }
    }
}

/// Scalar types that can terminate a comparison
pub trait ExpectScalar: Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {
    /// Equality check used by [`Relation::Near`]
    fn check_near(self, expected: Self, tolerance: &Tolerance) -> Result<(), FailureKind>;
}

macro_rules! impl_expect_scalar_float {
    ($($t:ty),*) => {
        $(
            impl ExpectScalar for $t {
                fn check_near(self, expected: Self, tolerance: &Tolerance) -> Result<(), FailureKind> {
                    tolerance
                        .check(self as f64, expected as f64)
                        .map_err(|(diff, bound)| FailureKind::NotNear { diff, tolerance: bound })
                }
            }
        )*
    };
}

macro_rules! impl_expect_scalar_exact {
    ($($t:ty),*) => {
        $(
            impl ExpectScalar for $t {
                #[inline]
                fn check_near(self, expected: Self, _tolerance: &Tolerance) -> Result<(), FailureKind> {
                    if self == expected {
                        Ok(())
                    } else {
                        Err(FailureKind::NotEqual)
                    }
                }
            }
        )*
    };
}

impl_expect_scalar_float!(f32, f64);
impl_expect_scalar_exact!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
