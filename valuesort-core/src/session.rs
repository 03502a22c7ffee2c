/// Session wrapper around the pure selection/ranking functions.
///
/// Owns the deck and scoreboard, threads the last-shown pair into the
/// selector, and enforces the exactly-once recording contract: an outcome is
/// only accepted for the pair currently on offer. Strictly sequential — one
/// `next_pair`, one `record_choice`, repeat.
use crate::constants::MIN_COMPARISONS;
use crate::pairing::select_next_pair;
use crate::ranking::rank_cards;
use crate::types::{Card, Deck, ScoreBoard};

pub struct SortSession {
    deck: Deck,
    scores: ScoreBoard,
    completed: u32,
    target: u32,
    /// Pair shown before the one currently on offer, as deck indices' ids.
    last_pair: Option<(String, String)>,
    /// Pair currently on offer, as deck indices. Cleared by `record_choice`.
    offered: Option<(usize, usize)>,
}

impl SortSession {
    /// Start a session over `deck` with the default comparison target.
    pub fn new(deck: Deck) -> Self {
        Self::with_target(deck, MIN_COMPARISONS)
    }

    /// Start a session with a custom comparison target. The termination rule
    /// is unchanged: the session completes at `target` comparisons or when
    /// every pair has been compared, whichever comes first.
    pub fn with_target(deck: Deck, target: u32) -> Self {
        assert!(deck.len() >= 2, "SortSession requires at least two cards to compare.");
        let scores = ScoreBoard::new(&deck);
        SortSession {
            deck,
            scores,
            completed: 0,
            target,
            last_pair: None,
            offered: None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn comparisons_completed(&self) -> u32 {
        self.completed
    }

    pub fn target_comparisons(&self) -> u32 {
        self.target
    }

    /// Fraction of the target completed, clamped to 1.0.
    pub fn progress(&self) -> f64 {
        (self.completed as f64 / self.target as f64).min(1.0)
    }

    /// The pair to show next, selecting one if none is on offer. Returns the
    /// same pair until `record_choice` consumes it; `None` once every pair
    /// has been compared.
    pub fn next_pair(&mut self) -> Option<(&Card, &Card)> {
        if self.offered.is_none() {
            let last = self.last_pair.as_ref().map(|(x, y)| (x.as_str(), y.as_str()));
            let (a, b) = select_next_pair(&self.deck, &self.scores, last)?;
            let idx = (self.deck.index_of(&a.id), self.deck.index_of(&b.id));
            self.offered = Some(idx);
        }
        let (i, j) = self.offered.unwrap();
        Some((self.deck.card(i), self.deck.card(j)))
    }

    /// Record the user's decision for the pair currently on offer.
    ///
    /// The winner/loser must be exactly the two offered cards; anything else
    /// is a shell programming error and fails fast rather than corrupting the
    /// tallies.
    pub fn record_choice(&mut self, winner: &str, loser: &str) {
        let (i, j) = self
            .offered
            .expect("record_choice called with no pair on offer");
        let a = self.deck.card(i).id.clone();
        let b = self.deck.card(j).id.clone();
        assert!(
            (winner == a && loser == b) || (winner == b && loser == a),
            "Outcome ({} over {}) does not match the offered pair ({} vs {})",
            winner,
            loser,
            a,
            b
        );

        self.scores.record_outcome(winner, loser);
        self.completed += 1;
        self.last_pair = Some((a, b));
        self.offered = None;
    }

    /// Whether any uncompared pair remains.
    pub fn has_remaining_pair(&self) -> bool {
        if self.offered.is_some() {
            return true;
        }
        let last = self.last_pair.as_ref().map(|(x, y)| (x.as_str(), y.as_str()));
        select_next_pair(&self.deck, &self.scores, last).is_some()
    }

    /// The session is complete once the comparison target is reached or the
    /// pair supply is exhausted. An explicit skip needs no call here — the
    /// ranking below is available at any time.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.target || !self.has_remaining_pair()
    }

    /// Current ranking over all deck cards, from the scores accumulated so
    /// far. Total and always available, complete session or not.
    pub fn ranking(&self) -> Vec<&Card> {
        rank_cards(&self.deck, &self.scores)
    }

    /// Throw away all tallies and start over with the same deck.
    pub fn restart(&mut self) {
        self.scores = ScoreBoard::new(&self.deck);
        self.completed = 0;
        self.last_pair = None;
        self.offered = None;
    }
}
