//! Arena storage for faces, addressed by stable handles.
//!
//! Every face in play lives here exactly once; die slots, the inventory,
//! and trigger chains all refer to faces by `FaceId`. Swapping faces is a
//! handle exchange between slots, and "already fired" bookkeeping is a set
//! of handles, so face identity is never ambiguous.

use serde::{Deserialize, Serialize};

use crate::face::Face;

/// Stable handle to a face stored in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(u32);

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "face#{}", self.0)
    }
}

/// Append-only arena owning every face in the game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceArena {
    faces: Vec<Face>,
}

impl FaceArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a face and return its handle.
    pub fn insert(&mut self, face: Face) -> FaceId {
        let id = FaceId(u32::try_from(self.faces.len()).unwrap_or(u32::MAX));
        self.faces.push(face);
        id
    }

    /// Look up a face by handle.
    pub fn get(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.0 as usize)
    }

    /// Look up a face mutably by handle.
    pub fn get_mut(&mut self, id: FaceId) -> Option<&mut Face> {
        self.faces.get_mut(id.0 as usize)
    }

    /// Iterate over all faces with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, face)| (FaceId(i as u32), face))
    }

    /// Number of faces in the arena.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no faces have been inserted.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut arena = FaceArena::new();
        let id = arena.insert(Face::new(3));
        assert_eq!(arena.get(id).map(|f| f.value), Some(3));
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
    }

    #[test]
    fn handles_are_distinct_and_stable() {
        let mut arena = FaceArena::new();
        let a = arena.insert(Face::new(1));
        let b = arena.insert(Face::new(2));
        assert_ne!(a, b);
        assert_eq!(arena.get(a).map(|f| f.value), Some(1));
        assert_eq!(arena.get(b).map(|f| f.value), Some(2));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = FaceArena::new();
        let id = arena.insert(Face::new(2));
        if let Some(face) = arena.get_mut(id) {
            face.upgrade(5, 0.0);
        }
        assert_eq!(arena.get(id).map(|f| f.add_modifier), Some(5));
    }

    #[test]
    fn iter_yields_all_handles() {
        let mut arena = FaceArena::new();
        for v in 1..=4 {
            arena.insert(Face::new(v));
        }
        let collected: Vec<u32> = arena.iter().map(|(_, f)| f.value).collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display_format() {
        let mut arena = FaceArena::new();
        let id = arena.insert(Face::new(1));
        assert_eq!(id.to_string(), "face#0");
    }
}
