//! Common types shared by the parlor game engines and their callers.

pub mod casino;

pub use casino::{
    GameKind, Outcome, RoundReport, BLACKJACK_BUST, DEALER_STAND, DEFAULT_BALANCE, KENO_DRAW_SIZE,
    KENO_MAX_PICKS, KENO_UNIVERSE,
};
