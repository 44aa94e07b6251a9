//! Disjoint-set forest over arbitrary hashable elements.
//!
//! [`DisjointSetForest`] maps each element of a caller-supplied universe to
//! a slot in an index-based [`UnionFind`] arena. Elements keep their
//! insertion order, so set listings are reproducible across runs.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use log::debug;

use super::union_find::UnionFind;
use crate::error::DisjointSetError;

/// How construction treats an element that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later copies collapse into the first one silently.
    #[default]
    Collapse,
    /// Construction fails with [`DisjointSetError::InvalidInput`].
    Reject,
}

/// Partition of a fixed universe of elements into disjoint sets.
///
/// # Examples
/// ```
/// use u_disjoint::collections::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new([1, 2, 3, 4, 5]);
/// forest.union(&1, &3)?;
/// assert!(forest.connected(&1, &3)?);
/// assert!(!forest.connected(&1, &2)?);
///
/// forest.union(&1, &2)?;
/// assert!(forest.connected(&2, &3)?);
/// assert_eq!(forest.find(&3)?, &1);
///
/// assert!(forest.find(&9).is_err());
/// # Ok::<(), u_disjoint::DisjointSetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSetForest<T> {
    elements: IndexSet<T>,
    arena: UnionFind,
}

impl<T: Hash + Eq + fmt::Debug> DisjointSetForest<T> {
    /// Creates one singleton set per distinct element.
    ///
    /// Duplicates collapse into the first occurrence
    /// ([`DuplicatePolicy::Collapse`]).
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = IndexSet::new();
        let mut supplied = 0_usize;
        for element in elements {
            supplied += 1;
            set.insert(element);
        }
        Self::from_set(set, supplied)
    }

    /// Creates one singleton set per element, handling duplicates per `policy`.
    ///
    /// # Errors
    /// [`DisjointSetError::InvalidInput`] naming the first repeated element
    /// when `policy` is [`DuplicatePolicy::Reject`].
    pub fn with_policy<I: IntoIterator<Item = T>>(
        elements: I,
        policy: DuplicatePolicy,
    ) -> Result<Self, DisjointSetError> {
        match policy {
            DuplicatePolicy::Collapse => Ok(Self::new(elements)),
            DuplicatePolicy::Reject => {
                let mut set = IndexSet::new();
                for element in elements {
                    if set.contains(&element) {
                        return Err(DisjointSetError::InvalidInput(format!(
                            "duplicate element {element:?}"
                        )));
                    }
                    set.insert(element);
                }
                let supplied = set.len();
                Ok(Self::from_set(set, supplied))
            }
        }
    }

    fn from_set(elements: IndexSet<T>, supplied: usize) -> Self {
        let n = elements.len();
        if supplied > n {
            debug!(
                "built forest of {n} elements ({} duplicates collapsed)",
                supplied - n
            );
        } else {
            debug!("built forest of {n} elements");
        }
        Self {
            elements,
            arena: UnionFind::new(n),
        }
    }

    fn index_of(&self, element: &T) -> Result<usize, DisjointSetError> {
        self.elements
            .get_index_of(element)
            .ok_or_else(|| DisjointSetError::NotFound(format!("{element:?}")))
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `element` belongs to the universe.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Iterates over the universe in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Compresses the path it walks, so this takes `&mut self` even though
    /// the partition itself never changes.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if `element` is outside the universe.
    pub fn find(&mut self, element: &T) -> Result<&T, DisjointSetError> {
        let idx = self.index_of(element)?;
        let root = self.arena.find(idx)?;
        Ok(&self.elements[root])
    }

    /// Returns the representative of `element`'s set without compressing.
    pub fn root_of(&self, element: &T) -> Result<&T, DisjointSetError> {
        let idx = self.index_of(element)?;
        let root = self.arena.root_of(idx)?;
        Ok(&self.elements[root])
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` when they already shared a set. On equal ranks the
    /// representative of `a` survives.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if either element is outside the
    /// universe; nothing is mutated.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool, DisjointSetError> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.arena.union(a, b)
    }

    /// Returns `true` if `a` and `b` share a representative.
    ///
    /// # Errors
    /// [`DisjointSetError::NotFound`] if either element is outside the universe.
    pub fn connected(&mut self, a: &T, b: &T) -> Result<bool, DisjointSetError> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.arena.connected(a, b)
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.arena.component_count()
    }

    /// Returns the number of elements sharing `element`'s set.
    pub fn component_size(&mut self, element: &T) -> Result<usize, DisjointSetError> {
        let idx = self.index_of(element)?;
        self.arena.component_size(idx)
    }

    /// Adds `element` as a new singleton set.
    ///
    /// Returns `false`, leaving the forest unchanged, if it is already present.
    pub fn insert(&mut self, element: T) -> bool {
        if self.elements.contains(&element) {
            return false;
        }
        self.elements.insert(element);
        self.arena.push();
        true
    }

    /// Lists every set; members and sets follow insertion order.
    pub fn sets(&mut self) -> Vec<Vec<&T>> {
        let groups = self.arena.groups();
        groups
            .into_iter()
            .map(|group| group.into_iter().map(|i| &self.elements[i]).collect())
            .collect()
    }
}

impl<T: Hash + Eq + fmt::Debug> FromIterator<T> for DisjointSetForest<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
