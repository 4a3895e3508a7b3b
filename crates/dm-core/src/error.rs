//! Error types for core board operations.

use crate::arena::FaceId;

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating the board model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A die index was outside the board.
    #[error("die index out of range: {0}")]
    DieOutOfRange(usize),

    /// A slot index was outside a die's six slots.
    #[error("slot index out of range: {0}")]
    SlotOutOfRange(usize),

    /// A face handle did not resolve to a face in the arena.
    #[error("face not found: {0}")]
    FaceNotFound(FaceId),

    /// Resolution was attempted against a die with no committed outcome.
    #[error("die {0} has no committed roll outcome")]
    UncommittedDie(usize),
}
