//! Round orchestration.
//!
//! [`GameController`] is the seam between the presentation layer and the
//! game engines: it holds the one in-memory balance, forwards raw inputs
//! to the requested game, applies the resolved delta, and hands the report
//! back for display. It keeps no state across rounds beyond the balance
//! and persists only on an explicit [`GameController::save`].

use crate::casino::blackjack::{BlackjackRound, Decision};
use crate::casino::{keno, GameRng};
use crate::store::{BalanceStore, StoreError};
use parlor_types::RoundReport;
use tracing::debug;

pub struct GameController {
    store: BalanceStore,
    balance: f64,
    rng: GameRng,
}

impl GameController {
    /// Load the persisted balance and start with OS-seeded randomness.
    pub fn new(store: BalanceStore) -> Self {
        Self::with_rng(store, GameRng::from_entropy())
    }

    /// As [`GameController::new`] but with caller-provided randomness, for
    /// deterministic rounds.
    pub fn with_rng(store: BalanceStore, rng: GameRng) -> Self {
        let balance = store.load();
        Self {
            store,
            balance,
            rng,
        }
    }

    /// Current in-memory balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Play one keno round from raw presentation inputs.
    pub fn play_keno(&mut self, raw_selection: &str, raw_bet: &str) -> RoundReport {
        let report = keno::play(raw_selection, raw_bet, &mut self.rng);
        self.apply(report)
    }

    /// Start a blackjack round. `Err` carries the rejection report for a
    /// bet that failed validation; no cards were dealt and the balance is
    /// untouched.
    pub fn deal_blackjack(&mut self, raw_bet: &str) -> Result<BlackjackRound, RoundReport> {
        BlackjackRound::deal(raw_bet, self.balance, &mut self.rng)
    }

    /// Finish a dealt blackjack round with the player's raw hit/stand
    /// input.
    pub fn finish_blackjack(&mut self, round: BlackjackRound, raw_decision: &str) -> RoundReport {
        let report = round.resolve(Decision::parse(raw_decision), &mut self.rng);
        self.apply(report)
    }

    /// Persist the balance. Called on explicit exit only; rounds never
    /// autosave.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(self.balance)
    }

    fn apply(&mut self, report: RoundReport) -> RoundReport {
        self.balance += report.outcome.delta();
        debug!(
            game = report.game.name(),
            outcome = ?report.outcome,
            balance = self.balance,
            "round resolved"
        );
        report
    }
}
