//! The board: every die in play plus its committed outcome snapshot.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::arena::{FaceArena, FaceId};
use crate::die::{Die, Side};
use crate::error::{CoreError, CoreResult};

/// One face currently exposed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleFace {
    /// Index of the die exposing the face.
    pub die: usize,
    /// Which side the face landed on.
    pub side: Side,
    /// Handle of the exposed face.
    pub face: FaceId,
}

/// All dice in play. Special effects read the board's visible faces as a
/// snapshot of the committed outcomes; nothing here mutates mid-resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    dice: Vec<Die>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board of `count` standard dice.
    pub fn standard(count: usize, arena: &mut FaceArena) -> Self {
        let dice = (0..count).map(|_| Die::standard(arena)).collect();
        Self { dice }
    }

    /// Add a die, returning its index.
    pub fn add_die(&mut self, die: Die) -> usize {
        self.dice.push(die);
        self.dice.len() - 1
    }

    /// All dice.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// A die by index.
    pub fn die(&self, index: usize) -> CoreResult<&Die> {
        self.dice.get(index).ok_or(CoreError::DieOutOfRange(index))
    }

    /// A die by index, mutably.
    pub fn die_mut(&mut self, index: usize) -> CoreResult<&mut Die> {
        self.dice
            .get_mut(index)
            .ok_or(CoreError::DieOutOfRange(index))
    }

    /// Number of dice on the board.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the board has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll every die, committing a fresh outcome on each.
    pub fn roll_all(&mut self, rng: &mut StdRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Exchange the faces in two slots. Touches nothing else and is its
    /// own inverse. The two slots may be on the same die.
    pub fn swap_slots(
        &mut self,
        die_a: usize,
        slot_a: usize,
        die_b: usize,
        slot_b: usize,
    ) -> CoreResult<()> {
        let a = self.die(die_a)?.slot(slot_a)?;
        let b = self.die(die_b)?.slot(slot_b)?;
        self.die_mut(die_a)?.set_slot(slot_a, b)?;
        self.die_mut(die_b)?.set_slot(slot_b, a)?;
        Ok(())
    }

    /// The three visible faces of every die, in die order then
    /// top/left/right order. Fails if any die has no committed outcome:
    /// resolution must never run against a partially-committed board.
    pub fn visible_faces(&self) -> CoreResult<Vec<VisibleFace>> {
        let mut visible = Vec::with_capacity(self.dice.len() * 3);
        for (index, die) in self.dice.iter().enumerate() {
            let outcome = die.outcome().ok_or(CoreError::UncommittedDie(index))?;
            for (side, face) in outcome.faces() {
                visible.push(VisibleFace {
                    die: index,
                    side,
                    face,
                });
            }
        }
        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn standard_board_has_standard_dice() {
        let mut arena = FaceArena::new();
        let board = Board::standard(2, &mut arena);
        assert_eq!(board.len(), 2);
        assert_eq!(arena.len(), 12);
        assert!(!board.is_empty());
    }

    #[test]
    fn visible_faces_require_committed_outcomes() {
        let mut arena = FaceArena::new();
        let board = Board::standard(1, &mut arena);
        assert!(matches!(
            board.visible_faces(),
            Err(CoreError::UncommittedDie(0))
        ));
    }

    #[test]
    fn visible_faces_cover_three_per_die() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(3, &mut arena);
        board.roll_all(&mut StdRng::seed_from_u64(11));
        let visible = board.visible_faces().unwrap();
        assert_eq!(visible.len(), 9);
        assert_eq!(visible[4].die, 1);
        assert_eq!(visible[0].side, Side::Top);
    }

    #[test]
    fn partially_committed_board_is_rejected() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(2, &mut arena);
        let mut rng = StdRng::seed_from_u64(3);
        board.die_mut(0).unwrap().roll(&mut rng);
        assert!(matches!(
            board.visible_faces(),
            Err(CoreError::UncommittedDie(1))
        ));
    }

    #[test]
    fn swap_exchanges_exactly_two_slots() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(2, &mut arena);
        let before: Vec<_> = board.dice().iter().map(|d| *d.slots()).collect();

        board.swap_slots(0, 2, 1, 5).unwrap();
        for (die, d) in board.dice().iter().enumerate() {
            for (slot, id) in d.slots().iter().enumerate() {
                match (die, slot) {
                    (0, 2) => assert_eq!(*id, before[1][5]),
                    (1, 5) => assert_eq!(*id, before[0][2]),
                    _ => assert_eq!(*id, before[die][slot]),
                }
            }
        }
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(2, &mut arena);
        let before: Vec<_> = board.dice().iter().map(|d| *d.slots()).collect();
        board.swap_slots(0, 2, 1, 5).unwrap();
        board.swap_slots(0, 2, 1, 5).unwrap();
        let after: Vec<_> = board.dice().iter().map(|d| *d.slots()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn swap_rejects_bad_indices() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        assert!(matches!(
            board.swap_slots(0, 0, 4, 0),
            Err(CoreError::DieOutOfRange(4))
        ));
        assert!(matches!(
            board.swap_slots(0, 9, 0, 0),
            Err(CoreError::SlotOutOfRange(9))
        ));
    }
}
