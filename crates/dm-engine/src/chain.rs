//! Per-pass bookkeeping of which faces have already fired.

use std::collections::HashSet;

use dm_core::FaceId;

/// The set of faces that have fired (or are in the middle of firing)
/// within one top-level trigger pass.
///
/// The set only grows, and a face already present is never re-triggered,
/// so the total trigger count in a pass is bounded by the number of
/// visible faces: recursion through mutually-referencing effects always
/// terminates. Two independent effects may both select the same target,
/// but only the first to reach it pays it.
#[derive(Debug, Clone, Default)]
pub struct TriggerChain {
    fired: HashSet<FaceId>,
}

impl TriggerChain {
    /// An empty chain for a fresh top-level trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a face as fired. Idempotent; returns false if it was
    /// already present.
    pub fn insert(&mut self, face: FaceId) -> bool {
        self.fired.insert(face)
    }

    /// Whether a face has already fired in this pass.
    pub fn contains(&self, face: FaceId) -> bool {
        self.fired.contains(&face)
    }

    /// Number of faces fired so far.
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    /// Returns true if nothing has fired yet.
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
