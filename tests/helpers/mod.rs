//! Shared generators for comparator tests
//!
//! Values come from a seeded `StdRng` so failures reproduce exactly.

#![allow(dead_code)]

use nalgebra::{SMatrix, SVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for a test
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random fixed-size f32 matrix with entries in [-scale, scale)
pub fn random_matrix<const R: usize, const C: usize>(
    rng: &mut StdRng,
    scale: f32,
) -> SMatrix<f32, R, C> {
    SMatrix::from_fn(|_, _| rng.gen_range(-scale..scale))
}

/// Random f32 column vector
pub fn random_vector<const N: usize>(rng: &mut StdRng, scale: f32) -> SVector<f32, N> {
    random_matrix::<N, 1>(rng, scale)
}

/// Sequence of random vectors
pub fn random_sequence<const N: usize>(
    rng: &mut StdRng,
    len: usize,
    scale: f32,
) -> Vec<SVector<f32, N>> {
    (0..len).map(|_| random_vector::<N>(rng, scale)).collect()
}

/// Copy of `v` with every entry moved by at most `max_shift`
pub fn jitter<const N: usize>(
    rng: &mut StdRng,
    v: &SVector<f32, N>,
    max_shift: f32,
) -> SVector<f32, N> {
    v.map(|x| x + rng.gen_range(-max_shift..=max_shift))
}
