//! Core types for the Dicemill incremental dice game.
//!
//! Provides the face value/cost model, the arena that owns every face,
//! cube geometry for outcome selection, and the board of dice whose
//! committed outcomes the resolution engine reads.

pub mod arena;
pub mod board;
pub mod die;
pub mod error;
pub mod face;

pub use arena::{FaceArena, FaceId};
pub use board::{Board, VisibleFace};
pub use die::{Die, RollOutcome, SIDE_PAIRS, SLOTS_PER_DIE, Side, SlotTriple};
pub use error::{CoreError, CoreResult};
pub use face::{EffectKind, Face};
