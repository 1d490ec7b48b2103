//! Keno game implementation.
//!
//! One round: the player picks up to 10 numbers from 1..=80 and places a
//! bet; 20 distinct winning numbers are drawn; the payout depends only on
//! how many picks land in the draw.
//!
//! Payout table (flat amounts, independent of bet size):
//! 0 matches  -> lose the bet
//! 1..=10     -> win $1, $2, $5, $10, $20, $50, $100, $200, $500, $1000
//!
//! The bet is deliberately not checked against the player's balance, so a
//! lost round can take the balance negative. The card game does enforce
//! that bound; the asymmetry is inherited product behavior.

use super::{format_list, parse_bet, GameRng};
use parlor_types::{GameKind, Outcome, RoundReport, KENO_MAX_PICKS, KENO_UNIVERSE};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Flat win amount by match count. Index 0 is unused; zero matches loses
/// the bet instead.
const PAYTABLE: [f64; 11] = [
    0.0, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0,
];

/// Parse a raw selection string: split on commas, trim, keep values in
/// 1..=80. Malformed or out-of-range tokens are dropped silently, and
/// duplicates collapse.
pub fn parse_selection(raw: &str) -> BTreeSet<u8> {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<u8>().ok())
        .filter(|n| (1..=KENO_UNIVERSE).contains(n))
        .collect()
}

/// Resolve the outcome and its narrative sentence for a scored round.
fn resolve(matches: usize, bet: f64) -> (Outcome, String) {
    match matches {
        0 => (
            Outcome::Loss(bet),
            format!("You lose your bet of ${}.", bet),
        ),
        1 => (
            Outcome::Win(PAYTABLE[1]),
            "You win $1 for matching 1 number!".to_string(),
        ),
        10 => (
            Outcome::Win(PAYTABLE[10]),
            "Jackpot! You win $1000 for matching all 10 numbers!".to_string(),
        ),
        m @ 2..=9 => (
            Outcome::Win(PAYTABLE[m]),
            format!("You win ${} for matching {} numbers!", PAYTABLE[m], m),
        ),
        // Unreachable with <= 10 picks; degrade to a no-op rather than pay.
        _ => (Outcome::Push, "No payout.".to_string()),
    }
}

/// Score a selection against a draw and build the round report.
pub(crate) fn score(selection: &BTreeSet<u8>, draw: &[u8], bet: f64) -> RoundReport {
    let mut sorted = draw.to_vec();
    sorted.sort_unstable();

    let matches = selection.iter().filter(|n| sorted.contains(*n)).count();
    let (outcome, sentence) = resolve(matches, bet);

    let mut narrative = String::new();
    let _ = writeln!(narrative, "Winning numbers are: {}", format_list(&sorted));
    narrative.push_str(&sentence);

    RoundReport {
        game: GameKind::Keno,
        outcome,
        narrative,
    }
}

/// Play one keno round from raw presentation inputs.
///
/// Rejects (no draw, no balance effect) when more than
/// [`KENO_MAX_PICKS`] numbers survive parsing or the bet is missing or
/// non-positive.
pub fn play(raw_selection: &str, raw_bet: &str, rng: &mut GameRng) -> RoundReport {
    let selection = parse_selection(raw_selection);
    if selection.len() > KENO_MAX_PICKS {
        return RoundReport::rejected(
            GameKind::Keno,
            format!("You can only choose up to {} numbers.", KENO_MAX_PICKS),
        );
    }
    let Some(bet) = parse_bet(raw_bet) else {
        return RoundReport::rejected(
            GameKind::Keno,
            "Invalid bet amount. Please enter a positive number.",
        );
    };

    let draw = rng.keno_draw();
    score(&selection, &draw, bet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(values: &[u8]) -> BTreeSet<u8> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_parse_selection_drops_bad_tokens() {
        let parsed = parse_selection("1, oops, 80, 81, , 0, 7");
        assert_eq!(parsed, picks(&[1, 7, 80]));
    }

    #[test]
    fn test_parse_selection_collapses_duplicates() {
        let parsed = parse_selection("5,5,5,9");
        assert_eq!(parsed, picks(&[5, 9]));
    }

    #[test]
    fn test_parse_selection_empty() {
        assert!(parse_selection("").is_empty());
        assert!(parse_selection("a,b,c").is_empty());
    }

    #[test]
    fn test_payout_table() {
        // A draw that contains 1..=20; selections of 1..=n match exactly n.
        let draw: Vec<u8> = (1..=20).collect();
        for n in 1..=10u8 {
            let selection: BTreeSet<u8> = (1..=n).collect();
            let report = score(&selection, &draw, 10.0);
            assert_eq!(report.outcome, Outcome::Win(PAYTABLE[n as usize]));
        }
    }

    #[test]
    fn test_zero_matches_loses_bet() {
        let draw: Vec<u8> = (1..=20).collect();
        let report = score(&picks(&[50, 60, 70]), &draw, 12.5);
        assert_eq!(report.outcome, Outcome::Loss(12.5));
        assert!(report.narrative.contains("You lose your bet of $12.5."));
    }

    #[test]
    fn test_two_matches_pays_two() {
        // Exactly 2 of the selection fall inside the draw.
        let draw: Vec<u8> = (1..=20).collect();
        let report = score(&picks(&[1, 2, 30]), &draw, 10.0);
        assert_eq!(report.outcome, Outcome::Win(2.0));
        assert_eq!(report.outcome.delta(), 2.0);
        assert!(report.narrative.contains("matching 2 numbers"));
    }

    #[test]
    fn test_jackpot_narrative() {
        let draw: Vec<u8> = (1..=20).collect();
        let selection: BTreeSet<u8> = (1..=10).collect();
        let report = score(&selection, &draw, 10.0);
        assert_eq!(report.outcome, Outcome::Win(1000.0));
        assert!(report.narrative.contains("Jackpot!"));
    }

    #[test]
    fn test_narrative_lists_draw() {
        let draw = vec![12, 3, 44];
        let report = score(&picks(&[]), &draw, 1.0);
        assert!(report.narrative.contains("Winning numbers are: 3, 12, 44"));
    }

    #[test]
    fn test_reject_too_many_picks() {
        let report = play("1,2,3,4,5,6,7,8,9,10,11", "10", &mut GameRng::from_seed(1));
        assert_eq!(report.outcome, Outcome::Rejected);
        assert!(report.narrative.contains("up to 10 numbers"));
    }

    #[test]
    fn test_ten_picks_with_duplicates_is_valid() {
        // Eleven tokens but only ten distinct values: not a reject.
        let report = play("1,1,2,3,4,5,6,7,8,9,10", "10", &mut GameRng::from_seed(1));
        assert_ne!(report.outcome, Outcome::Rejected);
    }

    #[test]
    fn test_reject_bad_bet() {
        for bet in ["", "0", "-5", "lots"] {
            let report = play("1,2,3", bet, &mut GameRng::from_seed(1));
            assert_eq!(report.outcome, Outcome::Rejected);
            assert!(report.narrative.contains("Invalid bet amount"));
        }
    }

    #[test]
    fn test_empty_selection_loses_bet() {
        // Picking nothing can never match: the round plays and loses.
        let report = play("", "10", &mut GameRng::from_seed(3));
        assert_eq!(report.outcome, Outcome::Loss(10.0));
        assert!(report.narrative.contains("Winning numbers are:"));
    }

    #[test]
    fn test_matches_bounded_by_selection_size() {
        for seed in 0..20 {
            let mut rng = GameRng::from_seed(seed);
            let report = play("1,2,3", "10", &mut rng);
            // Three picks can pay at most the 3-match entry.
            match report.outcome {
                Outcome::Win(amount) => assert!(amount <= PAYTABLE[3]),
                Outcome::Loss(amount) => assert_eq!(amount, 10.0),
                other => panic!("unexpected outcome: {:?}", other),
            }
        }
    }
}
