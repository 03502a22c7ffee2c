mod cards;
mod config;
mod interact;
mod output;

use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use valuesort_core::{move_item, standard_deck, Card, SortSession, MIN_COMPARISONS};

use crate::interact::{
    parse_choice, parse_command, render_intro, render_pair, Choice, Command, ADJUST_HELP,
    CHOICE_PROMPT,
};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "valuesort", version, about = "Rank personal values through pairwise card comparisons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive card sort
    Sort(SortArgs),
    /// Create a default config file at ~/.config/valuesort/config.toml
    Init,
}

#[derive(Parser)]
struct SortArgs {
    /// File with custom cards (JSON array, or "Name: description" lines)
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Comparisons before results are offered
    #[arg(long)]
    comparisons: Option<u32>,

    /// Output JSON instead of the table
    #[arg(long)]
    json: bool,

    /// Output plain "1. Name" lines (clipboard-friendly)
    #[arg(long)]
    plain: bool,

    /// Skip the intro screen
    #[arg(long)]
    no_intro: bool,

    /// Path to config file (default: ~/.config/valuesort/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

type StdinLines = io::Lines<io::StdinLock<'static>>;

fn read_line(lines: &mut StdinLines) -> Option<String> {
    lines.next().map(|l| l.expect("Failed to read from stdin"))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort(args) => run_sort(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set a default deck file or comparison target.");
        }
    }
}

enum SortOutcome {
    ShowResults,
    Quit,
}

enum AdjustOutcome {
    Restart,
    Done,
}

fn run_sort(args: SortArgs) {
    if args.json && args.plain {
        bail("--json and --plain are mutually exclusive");
    }

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let deck = match args.cards.clone().or(cfg.cards.map(PathBuf::from)) {
        Some(path) => cards::load_deck(&path),
        None => standard_deck(),
    };
    let target = args.comparisons.or(cfg.comparisons).unwrap_or(MIN_COMPARISONS);
    if target == 0 {
        bail("--comparisons must be at least 1");
    }

    let mut session = SortSession::with_target(deck, target);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    if !args.no_intro {
        eprintln!("{}", render_intro(session.deck()));
    }

    loop {
        match run_comparisons(&mut session, &mut lines) {
            SortOutcome::ShowResults => {}
            SortOutcome::Quit => return,
        }

        let mut ranking: Vec<Card> = session.ranking().into_iter().cloned().collect();

        if args.json {
            output::print_json(&ranking, session.scores(), session.comparisons_completed());
            return;
        }
        if args.plain {
            println!("{}", output::render_plain(&ranking));
            return;
        }

        output::print_table(&ranking, session.scores(), session.comparisons_completed());

        if !interactive {
            return;
        }

        match run_adjust(&mut ranking, &session, &mut lines) {
            AdjustOutcome::Restart => {
                session.restart();
                eprintln!("Starting over with fresh scores.\n");
            }
            AdjustOutcome::Done => return,
        }
    }
}

/// Sorting phase: offer one pair per user decision until the session
/// completes, the person skips ahead, or stdin runs dry (piped input).
fn run_comparisons(session: &mut SortSession, lines: &mut StdinLines) -> SortOutcome {
    while !session.is_complete() {
        let number = session.comparisons_completed() + 1;
        let target = session.target_comparisons();

        let Some((a, b)) = session.next_pair() else {
            break;
        };
        let first_id = a.id.clone();
        let second_id = b.id.clone();
        let prompt = render_pair(a, b, number, target);

        eprint!("{prompt}");
        loop {
            let Some(line) = read_line(lines) else {
                // EOF counts as skip-to-results.
                return SortOutcome::ShowResults;
            };
            match parse_choice(&line) {
                Some(Choice::First) => {
                    session.record_choice(&first_id, &second_id);
                    break;
                }
                Some(Choice::Second) => {
                    session.record_choice(&second_id, &first_id);
                    break;
                }
                Some(Choice::Skip) => return SortOutcome::ShowResults,
                Some(Choice::Quit) => return SortOutcome::Quit,
                None => eprint!("{CHOICE_PROMPT}"),
            }
        }
    }

    SortOutcome::ShowResults
}

/// Post-results loop: manual reordering and export until the person is done.
fn run_adjust(
    ranking: &mut Vec<Card>,
    session: &SortSession,
    lines: &mut StdinLines,
) -> AdjustOutcome {
    eprintln!("\n{ADJUST_HELP}");
    loop {
        eprint!("> ");
        let Some(line) = read_line(lines) else {
            return AdjustOutcome::Done;
        };
        match parse_command(&line) {
            Some(Command::Move { from, to }) => {
                if from > ranking.len() || to > ranking.len() {
                    eprintln!("Ranks must be between 1 and {}", ranking.len());
                    continue;
                }
                move_item(ranking, from - 1, to - 1);
                output::print_table(ranking, session.scores(), session.comparisons_completed());
            }
            Some(Command::Export) => println!("{}", output::render_plain(ranking)),
            Some(Command::Restart) => return AdjustOutcome::Restart,
            Some(Command::Done) => return AdjustOutcome::Done,
            None => eprintln!("Commands: move FROM TO, export, restart, done"),
        }
    }
}
