//! Dice: six face slots on a cube and roll outcome selection.
//!
//! A roll exposes three faces (top, left, right). Only 24 slot triples are
//! geometrically possible on a cube — 6 choices of top, 4 rotations each —
//! and they are precomputed in [`SIDE_PAIRS`]. Opposite slots (0–5, 1–4,
//! 2–3) can never be visible together.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::arena::{FaceArena, FaceId};
use crate::error::{CoreError, CoreResult};
use crate::face::Face;

/// Number of face slots on a die.
pub const SLOTS_PER_DIE: usize = 6;

/// Valid (left, right) slot pairs for each top slot index.
pub const SIDE_PAIRS: [[(usize, usize); 4]; 6] = [
    [(1, 3), (3, 4), (4, 2), (2, 1)],
    [(0, 2), (2, 5), (5, 3), (3, 0)],
    [(1, 0), (0, 4), (4, 5), (5, 1)],
    [(0, 1), (1, 5), (5, 4), (4, 0)],
    [(0, 3), (3, 5), (5, 2), (2, 0)],
    [(1, 2), (2, 4), (4, 3), (3, 1)],
];

/// One of the three visible positions after a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The upward-facing slot.
    Top,
    /// The front-left slot.
    Left,
    /// The front-right slot.
    Right,
}

impl Side {
    /// All three sides in display order.
    pub const ALL: [Side; 3] = [Side::Top, Side::Left, Side::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Slot indices selected by a roll, before resolving to face handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTriple {
    /// Slot index landing on top.
    pub top: usize,
    /// Slot index landing on the left.
    pub left: usize,
    /// Slot index landing on the right.
    pub right: usize,
}

/// A committed roll outcome: the three visible face handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Face on top.
    pub top: FaceId,
    /// Face on the left.
    pub left: FaceId,
    /// Face on the right.
    pub right: FaceId,
}

impl RollOutcome {
    /// The face exposed on the given side.
    pub fn face(&self, side: Side) -> FaceId {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// All three visible faces with their sides.
    pub fn faces(&self) -> [(Side, FaceId); 3] {
        [
            (Side::Top, self.top),
            (Side::Left, self.left),
            (Side::Right, self.right),
        ]
    }
}

/// A six-slot die plus its transient committed roll outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Die {
    slots: [FaceId; SLOTS_PER_DIE],
    outcome: Option<RollOutcome>,
}

impl Die {
    /// A die over the given face handles, with no committed outcome.
    pub fn new(slots: [FaceId; SLOTS_PER_DIE]) -> Self {
        Self {
            slots,
            outcome: None,
        }
    }

    /// A standard die: six plain faces valued 1 through 6, freshly
    /// inserted into the arena.
    pub fn standard(arena: &mut FaceArena) -> Self {
        let slots = std::array::from_fn(|i| arena.insert(Face::new(i as u32 + 1)));
        Self::new(slots)
    }

    /// All six slot handles.
    pub fn slots(&self) -> &[FaceId; SLOTS_PER_DIE] {
        &self.slots
    }

    /// The face handle in a slot.
    pub fn slot(&self, index: usize) -> CoreResult<FaceId> {
        self.slots
            .get(index)
            .copied()
            .ok_or(CoreError::SlotOutOfRange(index))
    }

    /// Replace the face handle in a slot, returning the previous one.
    pub fn set_slot(&mut self, index: usize, id: FaceId) -> CoreResult<FaceId> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CoreError::SlotOutOfRange(index))?;
        Ok(std::mem::replace(slot, id))
    }

    /// Pick a random valid slot triple: uniform top slot, then a uniform
    /// rotation from the adjacency table for that top.
    pub fn select_slots(&self, rng: &mut StdRng) -> SlotTriple {
        let top = rng.random_range(0..SLOTS_PER_DIE);
        let (left, right) = SIDE_PAIRS[top][rng.random_range(0..SIDE_PAIRS[top].len())];
        SlotTriple { top, left, right }
    }

    /// Resolve a slot triple to the face handles currently in those slots.
    pub fn outcome_for(&self, triple: SlotTriple) -> RollOutcome {
        RollOutcome {
            top: self.slots[triple.top],
            left: self.slots[triple.left],
            right: self.slots[triple.right],
        }
    }

    /// Select and commit a final outcome in one step.
    pub fn roll(&mut self, rng: &mut StdRng) -> RollOutcome {
        let outcome = self.outcome_for(self.select_slots(rng));
        self.outcome = Some(outcome);
        outcome
    }

    /// Store a committed outcome.
    pub fn commit(&mut self, outcome: RollOutcome) {
        self.outcome = Some(outcome);
    }

    /// The committed outcome, if this die has been rolled.
    pub fn outcome(&self) -> Option<RollOutcome> {
        self.outcome
    }

    /// Discard the committed outcome.
    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }
}
