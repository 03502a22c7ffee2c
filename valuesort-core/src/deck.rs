/// The standard deck: twelve personal values drawn from ACT (Acceptance and
/// Commitment Therapy) values work, in their canonical order.
use crate::types::{Card, Deck};

const STANDARD_CARDS: [(&str, &str, &str); 12] = [
    (
        "connection",
        "Connection",
        "Building and nurturing close relationships with others",
    ),
    (
        "growth",
        "Growth",
        "Continuously learning and developing as a person",
    ),
    (
        "health",
        "Health",
        "Taking care of your physical and mental wellbeing",
    ),
    (
        "creativity",
        "Creativity",
        "Expressing yourself and bringing new ideas to life",
    ),
    (
        "adventure",
        "Adventure",
        "Seeking new experiences and embracing the unknown",
    ),
    (
        "compassion",
        "Compassion",
        "Showing kindness and care for yourself and others",
    ),
    (
        "achievement",
        "Achievement",
        "Setting goals and working hard to accomplish them",
    ),
    (
        "authenticity",
        "Authenticity",
        "Being true to yourself and living with integrity",
    ),
    (
        "contribution",
        "Contribution",
        "Making a positive difference in the world around you",
    ),
    (
        "freedom",
        "Freedom",
        "Having autonomy and independence in your choices",
    ),
    (
        "security",
        "Security",
        "Creating stability and safety in your life",
    ),
    ("fun", "Fun", "Enjoying life and making time for play and pleasure"),
];

/// Build the standard 12-card values deck.
pub fn standard_deck() -> Deck {
    let cards = STANDARD_CARDS
        .iter()
        .map(|&(id, name, description)| Card {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect();
    Deck::from_cards(cards)
}
