/// valuesort-core: Pure-computation card-sort engine.
///
/// Pairwise choices → win/loss tallies → ranked list. No IO, no randomness,
/// no hidden state — the presentation shell brings the human.
///
/// The deck is a fixed candidate list; a session offers one uncompared pair
/// at a time, chosen by a deterministic desirability heuristic (vary the
/// cards shown, balance exposure, match similar standings), and the ranking
/// is a total order available at any point, so skipping ahead to results
/// always works.
///
/// # Quick start
///
/// ```rust
/// use valuesort_core::{standard_deck, SortSession};
///
/// let mut session = SortSession::new(standard_deck());
///
/// while !session.is_complete() {
///     let (winner, loser) = {
///         let (a, b) = session.next_pair().expect("incomplete sessions offer a pair");
///         // The person picks a side; here the first card always wins.
///         (a.id.clone(), b.id.clone())
///     };
///     session.record_choice(&winner, &loser);
/// }
///
/// for (rank, card) in session.ranking().iter().enumerate() {
///     println!("{}. {}", rank + 1, card.name);
/// }
/// ```

pub mod constants;
pub mod deck;
pub mod pairing;
pub mod ranking;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use constants::MIN_COMPARISONS;
pub use deck::standard_deck;
pub use pairing::select_next_pair;
pub use ranking::{move_item, rank_cards};
pub use session::SortSession;
pub use types::{Card, Deck, ScoreBoard, ScoreRecord};
