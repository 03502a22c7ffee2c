/// Ranking projection and manual reordering.
///
/// The ranking is a total order derived from the scoreboard on demand — it
/// can be asked for at any point in a session, not just at the end, which is
/// what makes "skip to results" free.
use crate::types::{Card, Deck, ScoreBoard};

/// Rank every deck card: descending net score, ties broken by descending raw
/// wins, remaining ties in deck order (the sort is stable).
pub fn rank_cards<'d>(deck: &'d Deck, scores: &ScoreBoard) -> Vec<&'d Card> {
    let mut ranked: Vec<&Card> = deck.iter().collect();
    ranked.sort_by(|a, b| {
        let ra = scores.get(&a.id);
        let rb = scores.get(&b.id);
        rb.net_score()
            .cmp(&ra.net_score())
            .then(rb.wins.cmp(&ra.wins))
    });
    ranked
}

/// Move the element at `from` to position `to`, shifting the rest — the same
/// splice a drag-and-drop reorder performs. Positions are 0-based and must be
/// in bounds.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) {
    assert!(from < list.len(), "move_item: from {} out of bounds (len {})", from, list.len());
    assert!(to < list.len(), "move_item: to {} out of bounds (len {})", to, list.len());
    let item = list.remove(from);
    list.insert(to, item);
}
