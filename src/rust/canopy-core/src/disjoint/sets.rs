use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::error::Result;

/// A dynamic partition of elements into disjoint equivalence classes
///
/// Each class is identified by one of its members, the representative. A
/// representative stays stable until its class is merged into another one.
///
/// Queries that only ask "which class" treat an unregistered element as a
/// normal outcome and return `None`. Operations that need the element to be a
/// member (`union`, `elements_of_set_containing`) fail with
/// [`Error::NotRegistered`](crate::Error::NotRegistered) instead.
pub trait DisjointSets<E: Clone + Eq + Hash> {
    /// Whether `e` has been registered with [`make_set`](Self::make_set)
    fn is_present(&self, e: &E) -> bool;

    /// Register `e` as a new singleton class
    ///
    /// # Errors
    /// [`Error::AlreadyRegistered`](crate::Error::AlreadyRegistered) if `e`
    /// is already present.
    fn make_set(&mut self, e: E) -> Result<()>;

    /// Representative of the class containing `e`, or `None` if `e` was never
    /// registered
    fn find_set(&mut self, e: &E) -> Option<E>;

    /// Merge the classes containing `e1` and `e2`
    ///
    /// Returns `true` if two distinct classes were merged and `false` if both
    /// elements already shared a representative.
    fn union(&mut self, e1: &E, e2: &E) -> Result<bool>;

    /// Every element that currently represents a class
    fn current_representatives(&self) -> FxHashSet<E>;

    /// Every registered element in the same class as `e`, `e` included
    fn elements_of_set_containing(&mut self, e: &E) -> Result<FxHashSet<E>>;

    /// Forget every element and class
    fn clear(&mut self);
}
