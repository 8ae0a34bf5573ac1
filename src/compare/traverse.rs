//! Recursive descent over container shapes
//!
//! [`Expectable`] is implemented once per shape (scalar, nalgebra matrix,
//! slice/array/`Vec`/`SmallVec`). Every shape checks its size, then descends
//! into its children in index order; scalars hand the pair to the
//! [`Relation`]. Nesting such as `Vec<SmallVec<[Vector3<f32>; 8]>>` needs no
//! extra code.

use nalgebra::{Dim, Matrix, RawStorage, Scalar};
use smallvec::{Array, SmallVec};

use super::failure::{Failure, FailureKind};
use super::path::ElementPath;
use super::scalar::{ExpectScalar, Relation};
use crate::reporter::ExpectationReporter;

/// Traversal state for one top-level comparison
pub struct Walker<'a> {
    reporter: &'a mut dyn ExpectationReporter,
    field: &'a str,
    path: ElementPath,
}

impl<'a> Walker<'a> {
    /// Start a traversal that reports under `field`
    pub fn new(reporter: &'a mut dyn ExpectationReporter, field: &'a str) -> Self {
        Self {
            reporter,
            field,
            path: ElementPath::root(),
        }
    }

    /// Current position
    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    /// Run `f` one level deeper, at child `index`
    pub fn descend<F>(&mut self, index: usize, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.path.push(index);
        f(self);
        self.path.pop();
    }

    /// Check one scalar pair and report the outcome
    pub fn scalar<T: ExpectScalar>(&mut self, actual: T, expected: T, relation: &Relation) {
        match relation.check(actual, expected) {
            Ok(()) => self.reporter.on_pass(self.field, &self.path),
            Err(kind) => self.fail(kind, actual.to_string(), expected.to_string()),
        }
    }

    /// Compare lengths; reports and returns `false` on mismatch
    pub fn same_len(&mut self, actual: usize, expected: usize) -> bool {
        if actual == expected {
            return true;
        }
        self.fail(
            FailureKind::LengthMismatch {
                actual_len: actual,
                expected_len: expected,
            },
            actual.to_string(),
            expected.to_string(),
        );
        false
    }

    /// Check that both buffers hold `required` elements; reports once and
    /// returns `false` otherwise
    pub fn buffers_hold(&mut self, actual: usize, expected: usize, required: usize) -> bool {
        if actual >= required && expected >= required {
            return true;
        }
        self.fail(
            FailureKind::BufferTooShort {
                actual_len: actual,
                expected_len: expected,
                required,
            },
            actual.to_string(),
            expected.to_string(),
        );
        false
    }

    /// Compare (rows, cols); reports and returns `false` on mismatch
    pub fn same_shape(&mut self, actual: (usize, usize), expected: (usize, usize)) -> bool {
        if actual == expected {
            return true;
        }
        self.fail(
            FailureKind::ShapeMismatch {
                actual_shape: actual,
                expected_shape: expected,
            },
            format!("{}x{}", actual.0, actual.1),
            format!("{}x{}", expected.0, expected.1),
        );
        false
    }

    fn fail(&mut self, kind: FailureKind, actual: String, expected: String) {
        let failure = Failure {
            field: self.field.to_string(),
            path: self.path.clone(),
            kind,
            actual,
            expected,
        };
        self.reporter.on_failure(&failure);
    }
}

/// Values the comparator can walk element by element
///
/// `self` is always the actual value and `expected` the reference; for the
/// inequality relations this reads `self REL expected`.
pub trait Expectable {
    /// Compare against `expected` under `relation`, reporting through `walker`
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>);
}

macro_rules! impl_expectable_scalar {
    ($($t:ty),*) => {
        $(
            impl Expectable for $t {
                #[inline]
                fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
                    walker.scalar(*self, *expected, relation);
                }
            }
        )*
    };
}

impl_expectable_scalar!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// Linear (column-major) element order, matching `Matrix::iter`
impl<T, R, C, S> Expectable for Matrix<T, R, C, S>
where
    T: Scalar + ExpectScalar,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
        if !walker.same_shape(self.shape(), expected.shape()) {
            return;
        }
        for (i, (a, e)) in self.iter().zip(expected.iter()).enumerate() {
            walker.descend(i, |w| w.scalar(*a, *e, relation));
        }
    }
}

impl<E: Expectable> Expectable for [E] {
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
        if !walker.same_len(self.len(), expected.len()) {
            return;
        }
        for (i, (a, e)) in self.iter().zip(expected.iter()).enumerate() {
            walker.descend(i, |w| a.expect_relation(e, relation, w));
        }
    }
}

impl<E: Expectable, const N: usize> Expectable for [E; N] {
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
        self.as_slice().expect_relation(expected.as_slice(), relation, walker);
    }
}

impl<E: Expectable> Expectable for Vec<E> {
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
        self.as_slice().expect_relation(expected.as_slice(), relation, walker);
    }
}

impl<A> Expectable for SmallVec<A>
where
    A: Array,
    A::Item: Expectable,
{
    fn expect_relation(&self, expected: &Self, relation: &Relation, walker: &mut Walker<'_>) {
        self.as_slice().expect_relation(expected.as_slice(), relation, walker);
    }
}

/// Compare one value against every element of `sequence`
///
/// No length check applies; an empty sequence yields no outcomes.
pub fn broadcast<E: Expectable>(
    single: &E,
    sequence: &[E],
    relation: &Relation,
    walker: &mut Walker<'_>,
) {
    for (i, e) in sequence.iter().enumerate() {
        walker.descend(i, |w| single.expect_relation(e, relation, w));
    }
}
