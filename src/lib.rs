//! # u-disjoint
//!
//! Disjoint-set (union-find) primitives for the U-Engine ecosystem.
//!
//! This crate partitions a fixed universe of elements into disjoint sets
//! and answers merge and same-set queries in amortized O(α(n)). It knows
//! nothing about graphs, clustering, or any consumer domain.
//!
//! ## Modules
//!
//! - [`collections`] — [`UnionFind`](collections::UnionFind) arena and the
//!   keyed [`DisjointSetForest`](collections::DisjointSetForest)
//! - [`error`] — [`DisjointSetError`]
//!
//! ## Design Philosophy
//!
//! - **Arena, not pointers**: parents are indices into one vector, and a
//!   root is a node that is its own parent
//! - **Validate, then mutate**: a failing call never rewrites a pointer
//! - **Property-based testing**: partition invariants verified via proptest
//!
//! ## Concurrency
//!
//! `find` compresses paths and therefore takes `&mut self`. Sharing a
//! structure across threads means wrapping the whole thing in one lock.

pub mod collections;
pub mod error;

pub use error::DisjointSetError;
