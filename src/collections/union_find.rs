//! Index-based disjoint-set arena.
//!
//! Maintains a partition of the elements `0..n` into disjoint sets with
//! near-constant-time merge and same-set queries. Nodes live in parallel
//! vectors; a node is a root exactly when `parent[i] == i`.
//!
//! # Algorithm
//!
//! Uses **full path compression** during `find` and **union by rank**
//! during `union` to achieve amortized O(α(n)) per operation, where α is
//! the inverse Ackermann function.
//!
//! Without compression, union by rank alone bounds every tree's height at
//! ⌊log₂ n⌋, which is also why a `u8` rank is sufficient.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::DisjointSetError;

/// Disjoint-set forest over `0..n` with path compression and union by rank.
///
/// Every operation validates its indices before mutating anything, so a
/// failed call leaves the structure untouched.
///
/// # Examples
/// ```
/// use u_disjoint::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1)?;
/// uf.union(2, 3)?;
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1)?);
/// assert!(!uf.connected(0, 2)?);
///
/// uf.union(1, 3)?;
/// assert!(uf.connected(0, 2)?); // transitivity
/// assert!(uf.find(9).is_err());
/// # Ok::<(), u_disjoint::DisjointSetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`, each of rank 0.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, x: usize) -> Result<(), DisjointSetError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::NotFound(format!(
                "index {x} out of range for {} elements",
                self.parent.len()
            )))
        }
    }

    /// Walks to the root, then points every node on the path straight at it.
    /// `x` must already be validated.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Applies **full path compression**: every node on the path from `x`
    /// to the root becomes a direct child of the root. This rewrites
    /// parent pointers but never changes the partition itself.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if `x >= len()`; nothing is mutated.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn find(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Finds the root of `x` by following parent pointers without
    /// compressing the path.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if `x >= len()`.
    ///
    /// # Complexity
    /// O(log n) worst case
    pub fn root_of(&self, x: usize) -> Result<usize, DisjointSetError> {
        self.check(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Uses **union by rank**: the root with smaller rank is attached under
    /// the root with larger rank. On equal ranks the root of `y` goes under
    /// the root of `x`, whose rank then grows by one.
    ///
    /// # Returns
    /// `true` if `x` and `y` were in different sets (and are now merged),
    /// `false` if they were already in the same set.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if either index is out of range;
    /// nothing is mutated.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, DisjointSetError> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }

        let (winner, loser) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => (root_y, root_x),
            Ordering::Greater => (root_x, root_y),
            Ordering::Equal => {
                self.rank[root_x] += 1;
                (root_x, root_y)
            }
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.components -= 1;

        trace!(
            "merged root {loser} under {winner} (rank {}, size {})",
            self.rank[winner],
            self.size[winner]
        );
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if either index is out of range.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, DisjointSetError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Returns the rank recorded on `x`'s own node.
    ///
    /// Only meaningful as a height bound when `x` is a root.
    pub fn rank(&self, x: usize) -> Result<u8, DisjointSetError> {
        self.check(x)?;
        Ok(self.rank[x])
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn component_size(&mut self, x: usize) -> Result<usize, DisjointSetError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Appends a new singleton set and returns its index.
    pub fn push(&mut self) -> usize {
        let idx = self.parent.len();
        self.parent.push(idx);
        self.rank.push(0);
        self.size.push(1);
        self.components += 1;
        debug!("grew union-find to {} elements", idx + 1);
        idx
    }

    /// Returns every set as a sorted list of its members.
    ///
    /// Groups are ordered by their smallest member.
    ///
    /// # Complexity
    /// O(n α(n))
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);

        for i in 0..n {
            let root = self.find_root(i);
            match slot_of_root[root] {
                Some(slot) => groups[slot].push(i),
                None => {
                    slot_of_root[root] = Some(groups.len());
                    groups.push(vec![i]);
                }
            }
        }
        groups
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn build(n: usize, ops: &[(usize, usize)]) -> UnionFind {
        let mut uf = UnionFind::new(n);
        for &(x, y) in ops {
            if x < n && y < n {
                uf.union(x, y).unwrap();
            }
        }
        uf
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = build(n, &ops);
            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y)? && uf.connected(y, z)? {
                            prop_assert!(
                                uf.connected(x, z)?,
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn merged_pairs_never_split(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 1..50),
        ) {
            let mut uf = UnionFind::new(n);
            let mut merged: Vec<(usize, usize)> = Vec::new();
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y)?;
                    merged.push((x, y));
                }
                for &(a, b) in &merged {
                    prop_assert!(uf.connected(a, b)?);
                }
            }
        }

        #[test]
        fn repeated_union_is_idempotent(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..40),
        ) {
            let doubled: Vec<(usize, usize)> =
                ops.iter().flat_map(|&op| [op, op]).collect();
            let mut once = build(n, &ops);
            let mut twice = build(n, &doubled);
            prop_assert_eq!(once.groups(), twice.groups());
            prop_assert_eq!(once.component_count(), twice.component_count());
        }

        #[test]
        fn compressed_find_matches_naive_walk(
            n in 1_usize..30,
            ops in proptest::collection::vec((0_usize..30, 0_usize..30, any::<bool>()), 0..60),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y, query) in &ops {
                if x >= n || y >= n {
                    continue;
                }
                if query {
                    let naive = uf.root_of(x)?;
                    prop_assert_eq!(uf.find(x)?, naive);
                } else {
                    uf.union(x, y)?;
                }
            }
            for x in 0..n {
                let naive = uf.root_of(x)?;
                prop_assert_eq!(uf.find(x)?, naive);
                // Compressed: the root is now the direct parent.
                prop_assert_eq!(uf.parent[x], naive);
            }
        }

        #[test]
        fn ranks_never_decrease(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    let before = uf.rank.clone();
                    uf.union(x, y)?;
                    for i in 0..n {
                        prop_assert!(uf.rank[i] >= before[i]);
                    }
                    let changed = (0..n).filter(|&i| uf.rank[i] != before[i]).count();
                    prop_assert!(changed <= 1);
                }
            }
        }

        #[test]
        fn component_count_invariant(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            let mut expected_components = n;

            for &(x, y) in &ops {
                if x < n && y < n && uf.union(x, y)? {
                    expected_components -= 1;
                }
            }

            prop_assert_eq!(uf.component_count(), expected_components);
            prop_assert_eq!(uf.groups().len(), expected_components);
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = build(n, &ops);
            let mut total = 0;
            for i in 0..n {
                if uf.find(i)? == i {
                    total += uf.component_size(i)?;
                }
            }
            prop_assert_eq!(total, n, "component sizes should sum to n");
        }
    }
}
