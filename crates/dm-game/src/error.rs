//! Error types for session operations.

use dm_core::CoreError;
use dm_engine::EngineError;

/// Convenience result type for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A purchase would spend more than the current balance. The balance
    /// and inventory are left untouched.
    #[error("insufficient funds: cost {cost:.2}, balance {balance:.2}")]
    InsufficientFunds {
        /// Price of the attempted purchase.
        cost: f64,
        /// Balance at the time of the attempt.
        balance: f64,
    },

    /// A roll was requested while one is already in flight.
    #[error("a roll is already in flight")]
    RollBusy,

    /// The board already holds the maximum number of dice.
    #[error("maximum dice reached ({0})")]
    MaxDiceReached(usize),

    /// No shop offer exists at the given slot.
    #[error("no shop offer at slot {0}")]
    OfferOutOfRange(usize),

    /// No inventory face exists at the given slot.
    #[error("no inventory face at slot {0}")]
    InventoryOutOfRange(usize),

    /// A board operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Roll resolution failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
