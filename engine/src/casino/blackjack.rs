//! Blackjack game implementation (single-hit variant).
//!
//! House rules:
//! - Cards are values 1..=11 drawn independently and uniformly; 1 is an
//!   Ace. There is no finite deck, so values repeat freely.
//! - The player gets exactly one decision: hit (one card, then the turn
//!   ends regardless of total) or stand. There is no repeated hitting.
//! - Dealer draws to 17 and stands (no soft/hard distinction beyond the
//!   Ace rule).
//! - Wins and losses move the full bet; ties push.
//!
//! Round stages: `AwaitingBet -> InitialDeal -> PlayerDecision ->
//! DealerPlay -> Resolved`. [`BlackjackRound::deal`] walks the first three
//! (the bet must clear validation before any card is dealt) and returns an
//! in-flight round so the presentation layer can show the player's hand and
//! the dealer's upcard before asking for the decision.
//! [`BlackjackRound::resolve`] walks the rest.

use super::{format_list, parse_bet, GameRng};
use parlor_types::{GameKind, Outcome, RoundReport, BLACKJACK_BUST, DEALER_STAND};
use std::fmt::Write;

/// Stages of one blackjack round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Bet not yet validated; no cards exist.
    AwaitingBet,
    /// Two cards each are being dealt to player and dealer.
    InitialDeal,
    /// Player has seen their hand and the dealer's upcard and must choose.
    PlayerDecision,
    /// Dealer is drawing to 17.
    DealerPlay,
    /// Outcome settled.
    Resolved,
}

/// The player's single decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    /// `"h"` (ignoring surrounding whitespace and case) hits; any other
    /// input stands. Parsing never fails.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("h") {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

/// Total a hand with greedy Ace upgrades.
///
/// Raw values are summed first; then, while the total is at most 11 and an
/// unconverted Ace remains, one Ace is promoted from 1 to 11. This handles
/// multiple Aces (`[1,1,9]` totals 21, not 31) and never busts a hand that
/// could stay soft.
pub fn hand_total(cards: &[u8]) -> u8 {
    let mut total: u16 = cards.iter().map(|&card| card as u16).sum();
    let mut aces = cards.iter().filter(|&&card| card == 1).count();
    while total <= 11 && aces > 0 {
        total += 10;
        aces -= 1;
    }
    total.min(255) as u8
}

/// Draw dealer cards until the total reaches [`DEALER_STAND`].
fn dealer_play(dealer: &mut Vec<u8>, rng: &mut GameRng) {
    while hand_total(dealer) < DEALER_STAND {
        dealer.push(rng.deal_card());
    }
}

/// An in-flight blackjack round, produced by [`BlackjackRound::deal`] and
/// consumed by [`BlackjackRound::resolve`].
#[derive(Clone, Debug)]
pub struct BlackjackRound {
    stage: Stage,
    bet: f64,
    player: Vec<u8>,
    dealer: Vec<u8>,
    narrative: String,
}

impl BlackjackRound {
    /// Validate the bet and deal the opening hands.
    ///
    /// The bet must parse, be positive, and not exceed `balance`;
    /// otherwise the round terminates immediately with a `Rejected` report
    /// and no cards are dealt. On success the round sits at
    /// [`Stage::PlayerDecision`] with a narrative showing the player's
    /// full hand and only the dealer's first card.
    pub fn deal(raw_bet: &str, balance: f64, rng: &mut GameRng) -> Result<Self, RoundReport> {
        let mut round = Self {
            stage: Stage::AwaitingBet,
            bet: 0.0,
            player: Vec::with_capacity(3),
            dealer: Vec::with_capacity(3),
            narrative: String::new(),
        };

        round.bet = match parse_bet(raw_bet) {
            Some(bet) if bet <= balance => bet,
            _ => {
                return Err(RoundReport::rejected(
                    GameKind::Blackjack,
                    "Invalid bet amount. Please enter a positive number \
                     that does not exceed your balance.",
                ))
            }
        };

        round.stage = Stage::InitialDeal;
        for _ in 0..2 {
            round.player.push(rng.deal_card());
            round.dealer.push(rng.deal_card());
        }

        let _ = writeln!(
            round.narrative,
            "Your hand: {} (Total: {})",
            format_list(&round.player),
            hand_total(&round.player)
        );
        // Hole-card convention: both dealer cards exist, only the first is
        // shown until the dealer plays.
        let _ = writeln!(round.narrative, "Dealer shows: {}", round.dealer[0]);

        round.stage = Stage::PlayerDecision;
        Ok(round)
    }

    /// Current stage of the round.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Amount wagered on this round.
    pub fn bet(&self) -> f64 {
        self.bet
    }

    /// Narrative accumulated so far; what the player sees before deciding.
    pub fn player_view(&self) -> &str {
        &self.narrative
    }

    /// Apply the player's decision and settle the round.
    ///
    /// A hit deals exactly one card. If the recomputed player total then
    /// exceeds 21 the round is an immediate full-bet loss and the dealer
    /// draws nothing. Otherwise the dealer plays to 17 and the final
    /// totals are compared: dealer bust or lower total wins the bet,
    /// higher total loses it, equal totals push.
    pub fn resolve(mut self, decision: Decision, rng: &mut GameRng) -> RoundReport {
        if decision == Decision::Hit {
            self.player.push(rng.deal_card());
            let total = hand_total(&self.player);
            let _ = writeln!(
                self.narrative,
                "Your new hand: {} (Total: {})",
                format_list(&self.player),
                total
            );
            if total > BLACKJACK_BUST {
                let bet = self.bet;
                let _ = write!(self.narrative, "You bust! You lose your bet of ${}.", bet);
                self.stage = Stage::Resolved;
                return self.report(Outcome::Loss(bet));
            }
        }

        self.stage = Stage::DealerPlay;
        dealer_play(&mut self.dealer, rng);

        let dealer_total = hand_total(&self.dealer);
        let player_total = hand_total(&self.player);
        let _ = writeln!(
            self.narrative,
            "Dealer's hand: {} (Total: {})",
            format_list(&self.dealer),
            dealer_total
        );

        let (outcome, sentence) = if dealer_total > BLACKJACK_BUST {
            (Outcome::Win(self.bet), "Dealer busts! You win!")
        } else if player_total > dealer_total {
            (Outcome::Win(self.bet), "You win!")
        } else if player_total < dealer_total {
            (Outcome::Loss(self.bet), "You lose!")
        } else {
            (Outcome::Push, "It's a tie!")
        };
        self.narrative.push_str(sentence);

        self.stage = Stage::Resolved;
        self.report(outcome)
    }

    fn report(self, outcome: Outcome) -> RoundReport {
        RoundReport {
            game: GameKind::Blackjack,
            outcome,
            narrative: self.narrative,
        }
    }

    /// Build a round at the decision stage with known hands.
    #[cfg(test)]
    pub(crate) fn with_hands(bet: f64, player: Vec<u8>, dealer: Vec<u8>) -> Self {
        let mut narrative = String::new();
        let _ = writeln!(
            narrative,
            "Your hand: {} (Total: {})",
            format_list(&player),
            hand_total(&player)
        );
        let _ = writeln!(narrative, "Dealer shows: {}", dealer[0]);
        Self {
            stage: Stage::PlayerDecision,
            bet,
            player,
            dealer,
            narrative,
        }
    }
}
