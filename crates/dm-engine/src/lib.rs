//! Roll resolution engine for Dicemill.
//!
//! Given a board whose dice all carry committed outcomes, computes the
//! total currency yield of a roll: every visible face fires once at the
//! top level, and faces with special effects fan out to other visible
//! faces through a per-pass trigger chain that rules out cycles and
//! double payment.

pub mod chain;
pub mod combo;
pub mod error;
pub mod event;
pub mod resolve;

pub use chain::TriggerChain;
pub use combo::{combo_fires, has_of_a_kind, is_straight};
pub use error::{EngineError, EngineResult};
pub use event::FaceFired;
pub use resolve::{Resolution, Resolver};
