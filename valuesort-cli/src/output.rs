/// Output formatting: terminal table, JSON, and the plain-text export.
use serde::Serialize;
use valuesort_core::{Card, ScoreBoard};

#[derive(Serialize)]
struct JsonRankedCard {
    rank: usize,
    id: String,
    name: String,
    wins: u32,
    losses: u32,
    net: i32,
}

#[derive(Serialize)]
struct JsonOutput {
    values: Vec<JsonRankedCard>,
    total_comparisons: u32,
}

/// The clipboard-friendly export: one "{rank}. {name}" line per card,
/// 1-based, newline-joined. Downstream tooling pastes this verbatim, so the
/// format is load-bearing.
pub fn render_plain(ranking: &[Card]) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}. {}", i + 1, card.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the ranking as a formatted terminal table.
pub fn print_table(ranking: &[Card], scores: &ScoreBoard, total_comparisons: u32) {
    // Find the widest card name for padding
    let name_width = ranking
        .iter()
        .map(|card| card.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Card"

    // Header
    println!(" # | {:<name_width$} | Wins | Losses | Net | Compared", "Card");
    println!("---|-{}-|------|--------|-----|---------", "-".repeat(name_width));

    // Rows
    for (i, card) in ranking.iter().enumerate() {
        let record = scores.get(&card.id);
        println!(
            "{:>2} | {:<name_width$} | {:>4} | {:>6} | {:>3} | {:>8}",
            i + 1,
            card.name,
            record.wins,
            record.losses,
            record.net_score(),
            record.times_compared(),
        );
    }

    println!(
        "\n{} values ranked after {} comparisons",
        ranking.len(),
        total_comparisons,
    );

    if ranking.len() >= 3 {
        println!("\nYour top 3 values:");
        for (i, card) in ranking.iter().take(3).enumerate() {
            println!("  {}. {}", i + 1, card.name);
        }
    }
}

/// Print the ranking as JSON.
pub fn print_json(ranking: &[Card], scores: &ScoreBoard, total_comparisons: u32) {
    let values: Vec<JsonRankedCard> = ranking
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let record = scores.get(&card.id);
            JsonRankedCard {
                rank: i + 1,
                id: card.id.clone(),
                name: card.name.clone(),
                wins: record.wins,
                losses: record.losses,
                net: record.net_score(),
            }
        })
        .collect();

    let output = JsonOutput {
        values,
        total_comparisons,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
