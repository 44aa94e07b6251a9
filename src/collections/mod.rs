//! Disjoint-set collections.
//!
//! - [`UnionFind`] — index-based arena over `0..n`
//! - [`DisjointSetForest`] — keyed forest over any hashable element type

mod forest;
mod union_find;

pub use forest::{DisjointSetForest, DuplicatePolicy};
pub use union_find::UnionFind;
