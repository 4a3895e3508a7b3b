//! Faces owned by the player but not mounted on any die.

use serde::{Deserialize, Serialize};

use dm_core::FaceId;

use crate::error::{GameError, GameResult};

/// An ordered list of unmounted face handles. A face is either here or
/// in exactly one die slot, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    faces: Vec<FaceId>,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a face handle.
    pub fn add(&mut self, face: FaceId) {
        self.faces.push(face);
    }

    /// The face handle at a slot.
    pub fn get(&self, slot: usize) -> GameResult<FaceId> {
        self.faces
            .get(slot)
            .copied()
            .ok_or(GameError::InventoryOutOfRange(slot))
    }

    /// Replace the face handle at a slot, returning the previous one.
    /// Used when swapping with a die slot.
    pub fn set(&mut self, slot: usize, face: FaceId) -> GameResult<FaceId> {
        let entry = self
            .faces
            .get_mut(slot)
            .ok_or(GameError::InventoryOutOfRange(slot))?;
        Ok(std::mem::replace(entry, face))
    }

    /// Whether the inventory holds a face.
    pub fn contains(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Iterate over held face handles.
    pub fn iter(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().copied()
    }

    /// Number of held faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
