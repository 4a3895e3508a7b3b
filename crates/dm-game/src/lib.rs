//! Game session layer for Dicemill.
//!
//! Wraps the board model and resolution engine with everything a playable
//! session needs: a currency balance, a shop that restocks with offers
//! scaled to the player's wealth, an inventory of unmounted faces, and a
//! frame-driven roll scheduler that joins all per-die animations before
//! applying the payout once.

pub mod config;
pub mod economy;
pub mod error;
pub mod event;
pub mod inventory;
pub mod roll;
pub mod session;
pub mod shop;

pub use config::GameConfig;
pub use economy::Economy;
pub use error::{GameError, GameResult};
pub use event::GameEvent;
pub use inventory::Inventory;
pub use roll::RollInFlight;
pub use session::GameSession;
pub use shop::{Shop, ShopOffer};
