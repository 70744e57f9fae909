//! Disjoint-set forest with path compression and union-by-rank
//!
//! Nodes live in an arena and refer to their parent by index. A root is the
//! node whose parent index equals its own index.
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

use super::sets::DisjointSets;
use crate::error::{Error, Result};

/// One tree node: the element it stands for, its parent slot and its rank
#[derive(Debug, Clone)]
struct Node<E> {
    item: E,
    parent: usize,
    /// Upper bound on the height of the subtree rooted here. Never decreases.
    rank: u32,
}

impl<E> Node<E> {
    fn root(item: E, slot: usize) -> Self {
        Self {
            item,
            parent: slot,
            rank: 0,
        }
    }
}

/// Forest of rooted trees, one tree per disjoint class
///
/// Features:
/// - Two-pass path compression on every lookup
/// - Union-by-rank, ties resolved in favour of the second argument's root
/// - Elements of any hashable type, mapped to arena slots
///
/// Lookups rewrite parent links, so they take `&mut self`. The forest has no
/// internal synchronisation: a single writer owns it for the duration of any
/// sequence of operations.
#[derive(Clone)]
pub struct ForestDisjointSets<E> {
    /// Arena of nodes in registration order
    nodes: Vec<Node<E>>,

    /// Element to arena slot
    slots: FxHashMap<E, usize>,

    /// Number of disjoint classes
    sets: usize,
}

impl<E: Clone + Eq + Hash> ForestDisjointSets<E> {
    /// Create an empty forest
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            slots: FxHashMap::default(),
            sets: 0,
        }
    }

    /// Create an empty forest with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            sets: 0,
        }
    }

    /// Number of registered elements
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint classes currently in the forest
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Rank of the node holding `e`
    pub fn rank_of(&self, e: &E) -> Option<u32> {
        self.slots.get(e).map(|&slot| self.nodes[slot].rank)
    }

    /// Whether `a` and `b` belong to the same class
    ///
    /// # Errors
    /// [`Error::NotRegistered`] if either element is unknown.
    pub fn same_set(&mut self, a: &E, b: &E) -> Result<bool> {
        let a = self.slot_of(a)?;
        let b = self.slot_of(b)?;
        Ok(self.find_root(a) == self.find_root(b))
    }

    /// All classes, each listed in registration order
    ///
    /// Classes are ordered by their earliest registered member. This walk does
    /// not compress paths.
    pub fn partition(&self) -> Vec<Vec<E>> {
        self.classes()
            .into_iter()
            .map(|(_, members)| {
                members
                    .into_iter()
                    .map(|slot| self.nodes[slot].item.clone())
                    .collect()
            })
            .collect()
    }

    fn slot_of(&self, e: &E) -> Result<usize> {
        self.slots.get(e).copied().ok_or(Error::NotRegistered)
    }

    /// Root slot of `slot`, re-pointing every node on the path at the root
    ///
    /// The first pass walks up to the root, the second pass rewrites the
    /// parent links. Stack usage stays constant however deep the tree is.
    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        let mut current = slot;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }

        root
    }

    /// Root slot of `slot` without touching any link
    fn peek_root(&self, mut slot: usize) -> usize {
        while self.nodes[slot].parent != slot {
            slot = self.nodes[slot].parent;
        }
        slot
    }

    /// Link two distinct roots
    ///
    /// The root with the strictly higher rank becomes the parent. On a tie
    /// `second` becomes the parent and its rank grows by one.
    fn link(&mut self, first: usize, second: usize) {
        let first_rank = self.nodes[first].rank;
        let second_rank = self.nodes[second].rank;

        if first_rank > second_rank {
            self.nodes[second].parent = first;
        } else {
            self.nodes[first].parent = second;
            if first_rank == second_rank {
                self.nodes[second].rank += 1;
            }
        }
        self.sets -= 1;
    }

    /// Root slot and member slots of every class, by earliest member
    fn classes(&self) -> Vec<(usize, Vec<usize>)> {
        let mut order: FxHashMap<usize, usize> = FxHashMap::default();
        let mut classes: Vec<(usize, Vec<usize>)> = Vec::with_capacity(self.sets);

        for slot in 0..self.nodes.len() {
            let root = self.peek_root(slot);
            let position = *order.entry(root).or_insert_with(|| {
                classes.push((root, Vec::new()));
                classes.len() - 1
            });
            classes[position].1.push(slot);
        }

        classes
    }
}

impl<E: Clone + Eq + Hash> DisjointSets<E> for ForestDisjointSets<E> {
    fn is_present(&self, e: &E) -> bool {
        self.slots.contains_key(e)
    }

    fn make_set(&mut self, e: E) -> Result<()> {
        if self.slots.contains_key(&e) {
            return Err(Error::AlreadyRegistered);
        }

        let slot = self.nodes.len();
        self.slots.insert(e.clone(), slot);
        self.nodes.push(Node::root(e, slot));
        self.sets += 1;
        Ok(())
    }

    fn find_set(&mut self, e: &E) -> Option<E> {
        let slot = self.slots.get(e).copied()?;
        let root = self.find_root(slot);
        Some(self.nodes[root].item.clone())
    }

    fn union(&mut self, e1: &E, e2: &E) -> Result<bool> {
        // Both memberships are checked before any link is rewritten
        let first = self.slot_of(e1)?;
        let second = self.slot_of(e2)?;

        let first = self.find_root(first);
        let second = self.find_root(second);
        if first == second {
            return Ok(false);
        }

        self.link(first, second);
        Ok(true)
    }

    fn current_representatives(&self) -> FxHashSet<E> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(slot, node)| node.parent == *slot)
            .map(|(_, node)| node.item.clone())
            .collect()
    }

    fn elements_of_set_containing(&mut self, e: &E) -> Result<FxHashSet<E>> {
        let slot = self.slot_of(e)?;
        let root = self.find_root(slot);

        let mut members = FxHashSet::default();
        for other in 0..self.nodes.len() {
            if self.find_root(other) == root {
                members.insert(self.nodes[other].item.clone());
            }
        }
        Ok(members)
    }

    fn clear(&mut self) {
        debug!(elements = self.nodes.len(), sets = self.sets, "clearing forest");
        self.nodes.clear();
        self.slots.clear();
        self.sets = 0;
    }
}

impl<E: Clone + Eq + Hash> Default for ForestDisjointSets<E> {
    fn default() -> Self {
        Self::new()
    }
}

struct AsSet<'a, E>(&'a [Node<E>], &'a [usize]);

impl<E: fmt::Debug> fmt::Debug for AsSet<'_, E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set()
            .entries(self.1.iter().map(|&slot| &self.0[slot].item))
            .finish()
    }
}

/// Renders `{representative: {members..}, ..}`
impl<E: Clone + Eq + Hash + fmt::Debug> fmt::Debug for ForestDisjointSets<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self.classes();
        fmt.debug_map()
            .entries(
                classes
                    .iter()
                    .map(|(root, members)| (&self.nodes[*root].item, AsSet(&self.nodes, members))),
            )
            .finish()
    }
}
