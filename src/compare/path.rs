//! Positional addresses of compared elements

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Index path from the top-level value down to one scalar
///
/// `[2][5]` means element 5 (column-major) of aggregate 2 in a sequence.
/// Nesting rarely goes deeper than a sequence of sequences of matrices, so
/// the indices live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPath(SmallVec<[usize; 4]>);

impl ElementPath {
    /// Empty path (the top-level value itself)
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from explicit indices
    pub fn from_indices(indices: &[usize]) -> Self {
        Self(SmallVec::from_slice(indices))
    }

    /// Indices from outermost to innermost
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True for the top-level value
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in &self.0 {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}
