//! Error types for roll resolution.

use dm_core::{CoreError, FaceId};

/// Convenience result type for resolution operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resolving a roll.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A board precondition failed (uncommitted die, bad index).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A visible face handle did not resolve to a face in the arena.
    #[error("visible face {0} missing from arena")]
    MissingFace(FaceId),
}
