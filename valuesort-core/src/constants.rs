/// Desirability bonus for a candidate pair that shares no card with the
/// previously shown pair. The very first selection of a session, with no
/// previous pair, gets this bonus unconditionally.
pub const FRESH_PAIR_BONUS: i64 = 100;

/// Desirability bonus when exactly one card of the candidate pair also
/// appeared in the previous pair. A candidate repeating both cards would get
/// no bonus, though such a candidate is always filtered out first: it would
/// be the pair that was just compared.
pub const PARTIAL_OVERLAP_BONUS: i64 = 30;

/// Penalty per prior comparison already involving either card of the
/// candidate pair. Biases selection toward cards the person has seen less,
/// balancing exposure across the deck.
pub const EXPOSURE_WEIGHT: i64 = 2;

/// Penalty per point of net-score difference between the two cards.
/// Comparing cards of similar standing is more informative, the same idea as
/// Swiss-tournament pairing.
pub const STANDING_GAP_WEIGHT: i64 = 3;

/// Default number of comparisons before a session offers its results.
///
/// Twelve cards have 66 possible pairs; 20 rounds is enough for the standings
/// to separate under Swiss-style pairing without asking the person to sit
/// through the full grid. These weights and this threshold are tuning choices
/// carried over from the shipped behavior — change them and recorded sessions
/// stop being comparable, so they stay as named constants.
pub const MIN_COMPARISONS: u32 = 20;
