//! pursuit -- loads and reports the starting snapshot of a pursuit game.
//!
//! Reads the board and game data directories, builds the board, players and
//! (for the pursuers' view) the hidden evader's estimate, then prints a
//! summary or the whole snapshot as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pursuit::board::{Board, TicketCounts, ALL_TICKET_KINDS};
use pursuit::layout::{load_layout, DataLayout};
use pursuit::setup::{initialize_game, GameMode, GameSetup, Player};

#[derive(Debug, Parser)]
#[command(name = "pursuit", version, about)]
struct Args {
    /// Directory holding `board-data/` and `game-data/`.
    #[arg(long, default_value = ".")]
    data_root: PathBuf,

    /// JSON layout overriding directory and file names; its relative
    /// directories are resolved against `--data-root`.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Whose view to load: evader, pursuers or full.
    #[arg(long, default_value = "full")]
    mode: GameMode,

    /// Print the whole snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let layout = match &args.layout {
        Some(path) => match load_layout(path) {
            Ok(layout) => layout.rebased(&args.data_root),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DataLayout::rooted(&args.data_root),
    };

    let setup = match initialize_game(&layout, args.mode) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("error: {} setup failed: {}", args.mode, e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&setup) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&setup);
    }
    ExitCode::SUCCESS
}

fn print_summary(setup: &GameSetup) {
    print_board(&setup.board);
    if let Some(evader) = &setup.evader {
        print_player("evader", evader);
    }
    for (i, pursuer) in setup.pursuers.iter().enumerate() {
        print_player(&format!("pursuer {}", i + 1), pursuer);
    }
    if let Some(estimate) = &setup.estimate {
        let positions: Vec<String> = estimate.positions().iter().map(|p| p.to_string()).collect();
        println!("estimate positions {}: {}", estimate.len(), positions.join(" "));
        println!("estimate tickets {}", tickets_line(&estimate.tickets));
    }
}

fn print_board(board: &Board) {
    println!("positions {}", board.positions_count());
    println!("edges {}", board.edge_count());
    for kind in ALL_TICKET_KINDS.into_iter().filter(|k| k.tags_edges()) {
        println!("edges {} {}", kind, board.edge_count_of(kind));
    }
}

fn print_player(label: &str, player: &Player) {
    println!("{} at {} tickets {}", label, player.position, tickets_line(&player.tickets));
}

fn tickets_line(tickets: &TicketCounts) -> String {
    tickets
        .iter()
        .map(|(kind, count)| format!("{}={}", kind, count))
        .collect::<Vec<_>>()
        .join(" ")
}
