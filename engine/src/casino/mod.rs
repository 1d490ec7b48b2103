//! Casino game engines.
//!
//! Each game resolves one round synchronously from raw player inputs.
//! Invalid inputs produce [`parlor_types::Outcome::Rejected`] reports rather
//! than errors, so callers only ever handle reports.
//!
//! All randomness flows through [`GameRng`], which is seedable so every
//! random codepath can be exercised deterministically in tests.

pub mod blackjack;
pub mod keno;

use parlor_types::{KENO_DRAW_SIZE, KENO_UNIVERSE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Write;

/// Source of randomness for game rounds.
pub struct GameRng(ChaCha8Rng);

impl GameRng {
    /// An rng seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// A deterministic rng for reproducible rounds.
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Deal one card, uniform over 1..=11 (1 is an Ace).
    ///
    /// Draws are independent; there is no finite deck, so the same value
    /// can recur within a hand.
    pub fn deal_card(&mut self) -> u8 {
        self.0.gen_range(1..=11)
    }

    /// Draw the winning keno numbers: 20 distinct values from 1..=80,
    /// uniform without replacement.
    pub fn keno_draw(&mut self) -> Vec<u8> {
        let mut universe: Vec<u8> = (1..=KENO_UNIVERSE).collect();
        let (drawn, _) = universe.partial_shuffle(&mut self.0, KENO_DRAW_SIZE);
        drawn.to_vec()
    }
}

/// Parse a raw bet string. Returns `None` unless the bet is a positive
/// number; the games report `None` as a rejected round.
pub(crate) fn parse_bet(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|bet| *bet > 0.0)
}

/// Render a card or number list the way the narratives display it.
pub(crate) fn format_list(values: &[u8]) -> String {
    let mut out = String::with_capacity(values.len().saturating_mul(4));
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", value);
    }
    out
}
