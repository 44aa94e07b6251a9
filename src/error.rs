//! Error type shared by the disjoint-set structures.

/// Errors returned by [`UnionFind`](crate::collections::UnionFind) and
/// [`DisjointSetForest`](crate::collections::DisjointSetForest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    /// The element is not part of the universe.
    NotFound(String),
    /// Construction input rejected (duplicate under a strict policy).
    InvalidInput(String),
}

impl std::fmt::Display for DisjointSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisjointSetError::NotFound(msg) => write!(f, "element not found: {msg}"),
            DisjointSetError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for DisjointSetError {}
