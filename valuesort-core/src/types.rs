use std::collections::{HashMap, HashSet};

/// One card in the candidate deck: a value the person is ranking.
///
/// Ids are stable string slugs chosen by whoever builds the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Stable identifier, e.g. "connection".
    pub id: String,
    /// Display name, e.g. "Connection".
    pub name: String,
    /// One-sentence description shown alongside the name.
    pub description: String,
}

/// The fixed candidate list for a session, immutable once built.
///
/// Holds the cards in their canonical order plus an id lookup. Enumeration
/// order everywhere in the crate is deck order, which is what makes pair
/// selection and tie-breaking deterministic.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    id_to_idx: HashMap<String, usize>,
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut id_to_idx = HashMap::with_capacity(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            let prev = id_to_idx.insert(card.id.clone(), idx);
            assert!(prev.is_none(), "Duplicate card id: {}", card.id);
        }
        Deck { cards, id_to_idx }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a deck position.
    pub fn card(&self, idx: usize) -> &Card {
        &self.cards[idx]
    }

    /// Deck position of a card id. Unknown ids are caller programming errors.
    pub fn index_of(&self, id: &str) -> usize {
        *self
            .id_to_idx
            .get(id)
            .unwrap_or_else(|| panic!("Unknown card id: {}", id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_idx.contains_key(id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

/// Win/loss tally for one card, plus the opponents it has already faced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    pub wins: u32,
    pub losses: u32,
    /// Ids of cards this card has been compared against. Never contains the
    /// card's own id; symmetric with the opponents' sets.
    pub opponents: HashSet<String>,
}

impl ScoreRecord {
    /// Wins minus losses.
    pub fn net_score(&self) -> i32 {
        self.wins as i32 - self.losses as i32
    }

    /// How many comparisons this card has appeared in. Each pair is compared
    /// at most once, so the opponent set size is the exposure count.
    pub fn times_compared(&self) -> usize {
        self.opponents.len()
    }
}

/// Mapping from card id to its `ScoreRecord` — the only mutable state of a
/// session. Records start empty and are touched exactly once per completed
/// comparison.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    records: HashMap<String, ScoreRecord>,
}

impl ScoreBoard {
    /// Empty records for every card in the deck.
    pub fn new(deck: &Deck) -> Self {
        let records = deck
            .iter()
            .map(|card| (card.id.clone(), ScoreRecord::default()))
            .collect();
        ScoreBoard { records }
    }

    /// Record of a card. Unknown ids are caller programming errors.
    pub fn get(&self, id: &str) -> &ScoreRecord {
        self.records
            .get(id)
            .unwrap_or_else(|| panic!("Unknown card id: {}", id))
    }

    /// Apply one comparison outcome: the winner gains a win, the loser a
    /// loss, and each enters the other's opponent set.
    ///
    /// Not idempotent — calling this twice for the same pair double-counts.
    /// `SortSession` guarantees exactly-once by checking against the pair it
    /// offered; direct callers carry that contract themselves.
    pub fn record_outcome(&mut self, winner: &str, loser: &str) {
        assert!(winner != loser, "A card cannot be compared against itself: {}", winner);
        assert!(self.records.contains_key(winner), "Unknown card id: {}", winner);
        assert!(self.records.contains_key(loser), "Unknown card id: {}", loser);

        let record = self.records.get_mut(winner).unwrap();
        record.wins += 1;
        record.opponents.insert(loser.to_string());

        let record = self.records.get_mut(loser).unwrap();
        record.losses += 1;
        record.opponents.insert(winner.to_string());
    }

    /// Whether these two cards have already been compared.
    pub fn already_compared(&self, a: &str, b: &str) -> bool {
        self.get(a).opponents.contains(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
        }
    }

    fn small_deck() -> Deck {
        Deck::from_cards(vec![card("a"), card("b"), card("c")])
    }

    #[test]
    fn test_deck_lookup() {
        let deck = small_deck();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.index_of("b"), 1);
        assert_eq!(deck.card(2).id, "c");
        assert!(deck.contains("a"));
        assert!(!deck.contains("z"));
    }

    #[test]
    #[should_panic(expected = "Duplicate card id")]
    fn test_deck_rejects_duplicate_ids() {
        Deck::from_cards(vec![card("a"), card("b"), card("a")]);
    }

    #[test]
    #[should_panic(expected = "Unknown card id")]
    fn test_deck_unknown_id_panics() {
        small_deck().index_of("z");
    }

    #[test]
    fn test_record_outcome_updates_both_sides() {
        let deck = small_deck();
        let mut scores = ScoreBoard::new(&deck);

        scores.record_outcome("a", "b");

        let a = scores.get("a");
        assert_eq!(a.wins, 1);
        assert_eq!(a.losses, 0);
        assert!(a.opponents.contains("b"));
        assert!(!a.opponents.contains("a"));

        let b = scores.get("b");
        assert_eq!(b.wins, 0);
        assert_eq!(b.losses, 1);
        assert!(b.opponents.contains("a"));

        assert!(scores.already_compared("a", "b"));
        assert!(scores.already_compared("b", "a"));
        assert!(!scores.already_compared("a", "c"));
    }

    #[test]
    fn test_net_score_and_exposure() {
        let deck = small_deck();
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("a", "b");
        scores.record_outcome("c", "a");

        assert_eq!(scores.get("a").net_score(), 0);
        assert_eq!(scores.get("b").net_score(), -1);
        assert_eq!(scores.get("c").net_score(), 1);
        assert_eq!(scores.get("a").times_compared(), 2);
        assert_eq!(scores.get("b").times_compared(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot be compared against itself")]
    fn test_record_outcome_rejects_self_comparison() {
        let deck = small_deck();
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("a", "a");
    }

    #[test]
    #[should_panic(expected = "Unknown card id")]
    fn test_record_outcome_rejects_unknown_id() {
        let deck = small_deck();
        let mut scores = ScoreBoard::new(&deck);
        scores.record_outcome("a", "z");
    }
}
