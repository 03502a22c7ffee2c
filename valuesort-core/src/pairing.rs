/// Deterministic pair selection for the card sort.
///
/// Candidates are every unordered pair of deck cards not yet compared,
/// enumerated in deck order. Each candidate gets a desirability score and the
/// maximum wins; ties keep the first candidate encountered, so the result is
/// a pure function of the scoreboard and the previous pair.
use crate::constants::{
    EXPOSURE_WEIGHT, FRESH_PAIR_BONUS, PARTIAL_OVERLAP_BONUS, STANDING_GAP_WEIGHT,
};
use crate::types::{Card, Deck, ScoreBoard};

/// Pick the next pair to show, or `None` once every pair has been compared.
///
/// `last_pair` is the pair shown immediately before, threaded explicitly by
/// the caller — there is no hidden session state here. The returned cards are
/// in deck order (lower position first); orientation carries no meaning.
pub fn select_next_pair<'d>(
    deck: &'d Deck,
    scores: &ScoreBoard,
    last_pair: Option<(&str, &str)>,
) -> Option<(&'d Card, &'d Card)> {
    let mut best: Option<(i64, usize, usize)> = None;

    for i in 0..deck.len() {
        for j in (i + 1)..deck.len() {
            let a = deck.card(i);
            let b = deck.card(j);
            if scores.already_compared(&a.id, &b.id) {
                continue;
            }

            let score = desirability(scores, a, b, last_pair);
            // Strict > keeps the first-encountered candidate on ties.
            if best.map_or(true, |(top, _, _)| score > top) {
                best = Some((score, i, j));
            }
        }
    }

    best.map(|(_, i, j)| (deck.card(i), deck.card(j)))
}

/// Heuristic desirability of showing `a` vs `b` next.
///
/// Rewards pairs that don't repeat cards from the previous comparison, then
/// penalizes exposure (how often either card has already appeared) and the
/// gap in current standing, so under-shown cards of similar strength float to
/// the top.
fn desirability(scores: &ScoreBoard, a: &Card, b: &Card, last_pair: Option<(&str, &str)>) -> i64 {
    let mut score = 0i64;

    match last_pair {
        Some((x, y)) => {
            let a_fresh = a.id != x && a.id != y;
            let b_fresh = b.id != x && b.id != y;
            if a_fresh && b_fresh {
                score += FRESH_PAIR_BONUS;
            } else if a_fresh || b_fresh {
                score += PARTIAL_OVERLAP_BONUS;
            }
        }
        // First comparison of the session: every candidate is fresh.
        None => score += FRESH_PAIR_BONUS,
    }

    let exposure =
        (scores.get(&a.id).times_compared() + scores.get(&b.id).times_compared()) as i64;
    score -= exposure * EXPOSURE_WEIGHT;

    let gap = (scores.get(&a.id).net_score() - scores.get(&b.id).net_score()).abs() as i64;
    score -= gap * STANDING_GAP_WEIGHT;

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;
    use std::collections::HashSet;

    fn deck_of(ids: &[&str]) -> Deck {
        Deck::from_cards(
            ids.iter()
                .map(|id| Card {
                    id: id.to_string(),
                    name: id.to_uppercase(),
                    description: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_pair_is_first_two_cards() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let scores = ScoreBoard::new(&deck);

        let (x, y) = select_next_pair(&deck, &scores, None).unwrap();
        assert_eq!(x.id, "a");
        assert_eq!(y.id, "b");
    }

    #[test]
    fn test_compared_pair_never_offered_again() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("a", "b");

        let mut last: Option<(String, String)> = Some(("a".into(), "b".into()));
        // Walk every remaining selection; (a, b) must not come back.
        loop {
            let pair = {
                let lp = last.as_ref().map(|(x, y)| (x.as_str(), y.as_str()));
                match select_next_pair(&deck, &scores, lp) {
                    Some((x, y)) => (x.id.clone(), y.id.clone()),
                    None => break,
                }
            };
            assert!(
                !(pair.0 == "a" && pair.1 == "b"),
                "already-compared pair was offered again"
            );
            scores.record_outcome(&pair.0, &pair.1);
            last = Some(pair);
        }
    }

    #[test]
    fn test_prefers_pair_disjoint_from_last() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("a", "b");

        // With (a, b) just shown, (c, d) is the only fully fresh candidate.
        let (x, y) = select_next_pair(&deck, &scores, Some(("a", "b"))).unwrap();
        assert_eq!(x.id, "c");
        assert_eq!(y.id, "d");
    }

    #[test]
    fn test_balances_exposure() {
        let deck = deck_of(&["a", "b", "c", "d", "e", "f"]);
        let mut scores = ScoreBoard::new(&deck);
        // "a" has been in three comparisons; e and f in none.
        scores.record_outcome("a", "b");
        scores.record_outcome("a", "c");
        scores.record_outcome("a", "d");

        let (x, y) = select_next_pair(&deck, &scores, Some(("a", "d"))).unwrap();
        assert_eq!((x.id.as_str(), y.id.as_str()), ("e", "f"));
    }

    #[test]
    fn test_prefers_similar_standing() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let mut scores = ScoreBoard::new(&deck);
        // Nets: a +1, b -1, c +1, d -1. Every remaining candidate overlaps the
        // last pair by exactly one card and has the same exposure, so only the
        // standing gap separates them: (a, c) and (b, d) have gap 0, (a, d)
        // and (b, c) have gap 2. First-encountered winner is (a, c).
        scores.record_outcome("a", "b");
        scores.record_outcome("c", "d");

        let (x, y) = select_next_pair(&deck, &scores, Some(("c", "d"))).unwrap();
        assert_eq!((x.id.as_str(), y.id.as_str()), ("a", "c"));
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let mut scores = ScoreBoard::new(&deck);

        let mut offered = HashSet::new();
        let mut last: Option<(String, String)> = None;
        let mut count = 0;
        loop {
            let pair = {
                let lp = last.as_ref().map(|(x, y)| (x.as_str(), y.as_str()));
                match select_next_pair(&deck, &scores, lp) {
                    Some((x, y)) => (x.id.clone(), y.id.clone()),
                    None => break,
                }
            };
            assert!(offered.insert(pair.clone()), "pair {:?} offered twice", pair);
            scores.record_outcome(&pair.0, &pair.1);
            last = Some(pair);
            count += 1;
        }

        // C(4, 2) = 6 distinct pairs, then nothing.
        assert_eq!(count, 6);
        assert!(select_next_pair(&deck, &scores, None).is_none());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let deck = deck_of(&["a", "b", "c", "d", "e"]);
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("b", "c");

        let first = select_next_pair(&deck, &scores, Some(("b", "c")))
            .map(|(x, y)| (x.id.clone(), y.id.clone()));
        let second = select_next_pair(&deck, &scores, Some(("b", "c")))
            .map(|(x, y)| (x.id.clone(), y.id.clone()));
        assert_eq!(first, second);
    }
}
