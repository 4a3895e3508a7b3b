//! Currency balance and display-normalization bookkeeping.

use serde::{Deserialize, Serialize};

use dm_core::{Board, FaceArena};

use crate::error::{GameError, GameResult};

/// The player's currency balance plus the running maximum single-face
/// yield, which the display layer uses to normalize floating-text colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Economy {
    balance: f64,
    max_face_value: f64,
}

impl Economy {
    /// An economy with the given starting balance.
    pub fn new(starting_balance: f64) -> Self {
        Self {
            balance: starting_balance,
            max_face_value: 1.0,
        }
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add a roll payout to the balance.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Spend currency. Fails with `InsufficientFunds` and leaves the
    /// balance untouched if the cost exceeds it.
    pub fn spend(&mut self, cost: f64) -> GameResult<()> {
        if cost > self.balance {
            return Err(GameError::InsufficientFunds {
                cost,
                balance: self.balance,
            });
        }
        self.balance -= cost;
        Ok(())
    }

    /// Current maximum single-face yield, floored at 1.0.
    pub fn max_face_value(&self) -> f64 {
        self.max_face_value
    }

    /// Rescan every face mounted on the board for the highest base
    /// yield. Call after faces are added, upgraded, or swapped in.
    pub fn refresh_max(&mut self, arena: &FaceArena, board: &Board) {
        let mut max_found: f64 = 1.0;
        for die in board.dice() {
            for &id in die.slots() {
                if let Some(face) = arena.get(id) {
                    max_found = max_found.max(face.base_yield());
                }
            }
        }
        self.max_face_value = max_found;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::Face;

    #[test]
    fn deposit_and_spend() {
        let mut economy = Economy::new(10.0);
        economy.deposit(5.0);
        economy.spend(12.0).unwrap();
        assert_eq!(economy.balance(), 3.0);
    }

    #[test]
    fn overspend_is_an_atomic_no_op() {
        let mut economy = Economy::new(10.0);
        let err = economy.spend(10.01).unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { .. }));
        assert_eq!(economy.balance(), 10.0);
    }

    #[test]
    fn spend_exact_balance_is_allowed() {
        let mut economy = Economy::new(30.0);
        economy.spend(30.0).unwrap();
        assert_eq!(economy.balance(), 0.0);
    }

    #[test]
    fn refresh_max_scans_mounted_faces() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        let mut economy = Economy::new(0.0);

        economy.refresh_max(&arena, &board);
        assert_eq!(economy.max_face_value(), 6.0);

        let boosted = arena.insert(Face::with_modifiers(6, 4, 2.0));
        board.die_mut(0).unwrap().set_slot(0, boosted).unwrap();
        economy.refresh_max(&arena, &board);
        assert_eq!(economy.max_face_value(), 20.0);
    }

    #[test]
    fn max_never_drops_below_one() {
        let arena = FaceArena::new();
        let board = Board::new();
        let mut economy = Economy::new(0.0);
        economy.refresh_max(&arena, &board);
        assert_eq!(economy.max_face_value(), 1.0);
    }
}
