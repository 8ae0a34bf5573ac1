//! Default thresholds and zero-valued aggregates
//!
//! The zero aggregates are what tests usually reach for when building an
//! expected value before filling in the interesting coordinates.

use nalgebra::{ArrayStorage, SVector, Vector2, Vector3};

/// Default absolute threshold for floating point equality
///
/// Single precision results from geometry kernels are routinely compared
/// against this value, so it is deliberately loose for `f64`.
pub const THRESHOLD_1E_4: f64 = 1e-4;

/// Upper bound on failures spelled out in a panic message or error summary
pub const DEFAULT_MAX_LISTED_FAILURES: usize = 20;

/// 6-dimensional single precision column vector (e.g. stacked point + normal)
pub type Vector6f = SVector<f32, 6>;

/// Zero 2-vector of `f32`
pub const ZERO_2F: Vector2<f32> = Vector2::from_array_storage(ArrayStorage([[0.0; 2]; 1]));

/// Zero 3-vector of `f32`
pub const ZERO_3F: Vector3<f32> = Vector3::from_array_storage(ArrayStorage([[0.0; 3]; 1]));

/// Zero 6-vector of `f32`
pub const ZERO_6F: Vector6f = Vector6f::from_array_storage(ArrayStorage([[0.0; 6]; 1]));

/// Zero 2-vector of `i32`
pub const ZERO_2I: Vector2<i32> = Vector2::from_array_storage(ArrayStorage([[0; 2]; 1]));
