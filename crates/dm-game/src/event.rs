//! Events surfaced to the session's front end.

use serde::{Deserialize, Serialize};

use dm_engine::FaceFired;

/// Something the front end may want to show, produced by session ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// A die's roll animation finished and its outcome is committed.
    /// Emitted exactly once per die per roll.
    DieSettled {
        /// Index of the settled die.
        die: usize,
    },
    /// A face fired during resolution (floating-text contract).
    FaceFired(FaceFired),
    /// The roll's total payout was added to the balance. Emitted exactly
    /// once per roll.
    PayoutApplied {
        /// Total currency gained by the roll.
        amount: f64,
        /// Balance after the deposit.
        balance: f64,
    },
}
