//! Deep element-wise comparator.
//!
//! A single traversal ([`Expectable`]) walks scalars, nalgebra matrices and
//! sequences of either, and ends in a pluggable [`Relation`] (near, `<=`,
//! `>=`). Outcomes go to an [`ExpectationReporter`](crate::ExpectationReporter).

pub mod failure;
pub mod path;
pub mod scalar;
pub mod tolerance;
pub mod traverse;

pub use failure::{Failure, FailureKind};
pub use path::ElementPath;
pub use scalar::{ExpectScalar, Relation};
pub use tolerance::Tolerance;
pub use traverse::{broadcast, Expectable, Walker};
