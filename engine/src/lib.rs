//! Parlor game engine.
//!
//! This crate contains the game-rules core of a small two-game casino: a
//! Keno-style lottery ([`casino::keno`]) and a single-hit blackjack variant
//! ([`casino::blackjack`]), both played against one persisted cash balance.
//!
//! The presentation layer (window, buttons, prompts) lives outside this
//! crate. It hands the core already-resolved raw inputs (a comma-separated
//! selection string, a bet string, a hit/stand string) and renders what the
//! core returns: a [`parlor_types::RoundReport`] narrative plus the updated
//! balance. No validation failure ever crosses this boundary as an error;
//! rejected rounds are reports like any other.
//!
//! The primary entrypoint is [`GameController`].

pub mod casino;
pub mod controller;
pub mod store;

pub use casino::{blackjack, keno, GameRng};
pub use controller::GameController;
pub use store::{BalanceStore, StoreError, BALANCE_FILE};
