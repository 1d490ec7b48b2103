/// Default balance granted when no stored balance can be read.
pub const DEFAULT_BALANCE: f64 = 100.0;

/// Size of the keno number universe (numbers 1..=KENO_UNIVERSE).
pub const KENO_UNIVERSE: u8 = 80;

/// Numbers drawn per keno round.
pub const KENO_DRAW_SIZE: usize = 20;

/// Maximum numbers a player may pick per keno round.
pub const KENO_MAX_PICKS: usize = 10;

/// Hand total above which a blackjack hand is bust.
pub const BLACKJACK_BUST: u8 = 21;

/// Dealer draws while below this total.
pub const DEALER_STAND: u8 = 17;

/// Casino game kinds offered by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Keno,
    Blackjack,
}

impl GameKind {
    /// Human-readable game name for logs and display.
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Keno => "keno",
            GameKind::Blackjack => "blackjack",
        }
    }
}

/// Classification of a resolved round.
///
/// `Rejected` covers rounds that never ran (bad bet, oversized selection);
/// it carries no amount because nothing was wagered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Player receives the amount.
    Win(f64),
    /// Player forfeits the amount.
    Loss(f64),
    /// Tie or zero-effect outcome; no balance change.
    Push,
    /// Inputs were invalid; no round was played.
    Rejected,
}

impl Outcome {
    /// Signed balance adjustment for this outcome.
    pub fn delta(&self) -> f64 {
        match self {
            Outcome::Win(amount) => *amount,
            Outcome::Loss(amount) => -*amount,
            Outcome::Push | Outcome::Rejected => 0.0,
        }
    }
}

/// Result of one round: the outcome plus the narrative a presentation
/// layer displays verbatim.
#[derive(Clone, Debug)]
pub struct RoundReport {
    pub game: GameKind,
    pub outcome: Outcome,
    pub narrative: String,
}

impl RoundReport {
    pub fn rejected(game: GameKind, narrative: impl Into<String>) -> Self {
        Self {
            game,
            outcome: Outcome::Rejected,
            narrative: narrative.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_delta() {
        assert_eq!(Outcome::Win(25.0).delta(), 25.0);
        assert_eq!(Outcome::Loss(10.0).delta(), -10.0);
        assert_eq!(Outcome::Push.delta(), 0.0);
        assert_eq!(Outcome::Rejected.delta(), 0.0);
    }

    #[test]
    fn test_rejected_report_has_no_effect() {
        let report = RoundReport::rejected(GameKind::Keno, "too many numbers");
        assert_eq!(report.outcome, Outcome::Rejected);
        assert_eq!(report.outcome.delta(), 0.0);
        assert_eq!(report.game.name(), "keno");
    }
}
