/// Custom deck loading.
///
/// Accepts a JSON array (of names, or of {id, name, description} objects) or
/// plain text with one "Name: description" line per card. Missing ids are
/// slugified from the name and de-duplicated.
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use valuesort_core::{Card, Deck};

use crate::bail;

#[derive(Deserialize)]
#[serde(untagged)]
enum CardSpec {
    Name(String),
    Full {
        #[serde(default)]
        id: Option<String>,
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
}

/// Load a deck from a file. Auto-detects JSON array vs one-per-line text.
pub fn load_deck(path: &Path) -> Deck {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read cards file {}: {e}", path.display())));
    parse_deck_from_str(&content)
}

/// Parse a string as either a JSON array of cards or plain text lines.
pub fn parse_deck_from_str(content: &str) -> Deck {
    let trimmed = content.trim();
    let specs: Vec<CardSpec> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("Cards file looks like JSON but failed to parse: {e}")))
    } else {
        // Plain text: "Name" or "Name: description", one card per line.
        trimmed
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|line| match line.split_once(':') {
                Some((name, description)) => CardSpec::Full {
                    id: None,
                    name: name.trim().to_string(),
                    description: Some(description.trim().to_string()),
                },
                None => CardSpec::Name(line.to_string()),
            })
            .collect()
    };

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(specs.len());

    for (index, spec) in specs.into_iter().enumerate() {
        let (id, name, description) = match spec {
            CardSpec::Name(name) => (None, name, String::new()),
            CardSpec::Full { id, name, description } => {
                (id, name, description.unwrap_or_default())
            }
        };

        let name = name.trim().to_string();
        if name.is_empty() {
            bail(format!("Card {} has an empty name", index + 1));
        }

        let mut base = id.unwrap_or_else(|| slugify(&name));
        if base.is_empty() {
            base = format!("card-{}", index + 1);
        }
        let id = ensure_unique_id(&mut seen, base);

        cards.push(Card { id, name, description });
    }

    if cards.len() < 2 {
        bail(format!("Need at least 2 cards to sort, got {}", cards.len()));
    }

    Deck::from_cards(cards)
}

fn ensure_unique_id(seen: &mut HashSet<String>, base: String) -> String {
    if seen.insert(base.clone()) {
        return base;
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

fn slugify(input: &str) -> String {
    let mut slug = String::new();

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || matches!(ch, '-' | '_') {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Inner Peace"), "inner-peace");
        assert_eq!(slugify("  Fun!!!  "), "fun");
    }

    #[test]
    fn test_parse_plain_lines() {
        let deck = parse_deck_from_str("Courage: Facing fear head on\nHonesty\n");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.card(0).id, "courage");
        assert_eq!(deck.card(0).name, "Courage");
        assert_eq!(deck.card(0).description, "Facing fear head on");
        assert_eq!(deck.card(1).id, "honesty");
        assert_eq!(deck.card(1).description, "");
    }

    #[test]
    fn test_parse_json_strings() {
        let deck = parse_deck_from_str(r#"["Courage", "Honesty", "Patience"]"#);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.card(2).id, "patience");
    }

    #[test]
    fn test_parse_json_objects() {
        let deck = parse_deck_from_str(
            r#"[
                {"id": "courage", "name": "Courage", "description": "Facing fear"},
                {"name": "Inner Peace"}
            ]"#,
        );
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.card(0).description, "Facing fear");
        assert_eq!(deck.card(1).id, "inner-peace");
    }

    #[test]
    fn test_duplicate_names_get_unique_ids() {
        let deck = parse_deck_from_str("Courage\nCourage\nCourage");
        assert_eq!(deck.card(0).id, "courage");
        assert_eq!(deck.card(1).id, "courage-2");
        assert_eq!(deck.card(2).id, "courage-3");
    }
}
