//! Max-heap of overlap edges with lazy deletion.
//!
//! Removing an interior element from a binary heap is O(n), so deletions are
//! recorded in a tombstone set instead and resolved when the entry surfaces
//! at the top. A popped tombstoned entry is dropped for good.

use crate::error::{AssemblyError, Result};
use crate::overlap::{OverlapEdge, ReadId};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by overlap length. Equal overlaps fall back to the ids
/// only so that `Ord` is total; callers must not rely on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry(OverlapEdge);

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .overlap
            .cmp(&other.0.overlap)
            .then_with(|| other.0.source.cmp(&self.0.source))
            .then_with(|| other.0.target.cmp(&self.0.target))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct LazyMaxHeap {
    heap: BinaryHeap<Entry>,
    deleted: FxHashSet<(ReadId, ReadId)>,
}

impl LazyMaxHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heapify `edges` in O(n).
    pub fn from_edges(edges: Vec<OverlapEdge>) -> Self {
        Self {
            heap: edges.into_iter().map(Entry).collect(),
            deleted: FxHashSet::default(),
        }
    }

    pub fn push(&mut self, edge: OverlapEdge) -> &mut Self {
        self.heap.push(Entry(edge));
        self
    }

    /// Remove and return the live edge with the largest overlap.
    pub fn pop_max(&mut self) -> Result<OverlapEdge> {
        while let Some(Entry(edge)) = self.heap.pop() {
            if !self.deleted.contains(&edge.key()) {
                return Ok(edge);
            }
        }
        Err(AssemblyError::EmptyQueue)
    }

    /// Mark `(source, target)` as deleted. Idempotent, and also applies to an
    /// edge pushed later with the same ids.
    pub fn delete(&mut self, source: ReadId, target: ReadId) -> &mut Self {
        self.deleted.insert((source, target));
        self
    }

    pub fn is_deleted(&self, source: ReadId, target: ReadId) -> bool {
        self.deleted.contains(&(source, target))
    }

    /// Physical slots, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
