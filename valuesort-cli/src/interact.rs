/// Terminal interaction: prompt rendering and input parsing.
///
/// The comparer here is the person at the keyboard — the session loop shows
/// one pair at a time and reads a one-letter verdict back.
use valuesort_core::{Card, Deck};

/// A decision about the pair on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The first card wins.
    First,
    /// The second card wins.
    Second,
    /// Stop comparing and show results now.
    Skip,
    /// Leave without results.
    Quit,
}

/// Parse a sorting-phase input line. Returns None for anything unrecognized.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(Choice::First),
        "2" => Some(Choice::Second),
        "s" | "skip" => Some(Choice::Skip),
        "q" | "quit" => Some(Choice::Quit),
        _ => None,
    }
}

/// A command in the post-results adjust loop. Ranks are 1-based as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: usize, to: usize },
    Export,
    Restart,
    Done,
}

/// Parse an adjust-loop input line. Returns None for anything unrecognized,
/// including zero or missing ranks in a move.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut words = input.split_whitespace();
    let command = match words.next()?.to_lowercase().as_str() {
        "move" | "m" => {
            let from: usize = words.next()?.parse().ok()?;
            let to: usize = words.next()?.parse().ok()?;
            if from == 0 || to == 0 {
                return None;
            }
            Command::Move { from, to }
        }
        "export" | "e" => Command::Export,
        "restart" => Command::Restart,
        "done" | "d" | "q" | "quit" => Command::Done,
        _ => return None,
    };

    // Trailing junk means the line wasn't what we thought it was.
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

/// The intro screen: how it works, plus the deck being sorted.
pub fn render_intro(deck: &Deck) -> String {
    let mut out = String::new();
    out.push_str("Values Sort — discover what matters most to you\n\n");
    out.push_str("You'll see two values at a time. Pick whichever feels more\n");
    out.push_str("important to you right now — there are no wrong answers.\n");
    out.push_str("At the end you'll get your personal ranking.\n\n");
    out.push_str("The values:\n");
    for card in deck.iter() {
        out.push_str(&format!("  - {}\n", card.name));
    }
    out
}

/// One comparison prompt. `number` is the 1-based comparison about to happen.
pub fn render_pair(a: &Card, b: &Card, number: u32, target: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Comparison {} of {} — which matters more to you right now?\n\n",
        number, target
    ));
    out.push_str(&format!("  [1] {}\n", a.name));
    if !a.description.is_empty() {
        out.push_str(&format!("      {}\n", a.description));
    }
    out.push('\n');
    out.push_str(&format!("  [2] {}\n", b.name));
    if !b.description.is_empty() {
        out.push_str(&format!("      {}\n", b.description));
    }
    out.push('\n');
    out.push_str(CHOICE_PROMPT);
    out
}

pub const CHOICE_PROMPT: &str = "Pick 1 or 2 (s = skip to results, q = quit): ";

pub const ADJUST_HELP: &str = "Adjust your ranking: \"move FROM TO\" re-ranks, \"export\" prints a \
copyable list, \"restart\" starts over, \"done\" finishes.";
