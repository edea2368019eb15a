//! Single-shot CLI: one process invocation per move. Reads a request body
//! from stdin, writes `{"move": "..."}` to stdout, and traces search
//! progress (depth, timing, node rate) to stderr.

use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use wyrmsnake::wire::GameRequest;
use wyrmsnake_core::driver::decide_with_budget;
use wyrmsnake_core::Board;

/// Move-selection engine, single-request mode.
#[derive(Parser)]
struct Args {
    /// Per-depth search time budget in milliseconds.
    #[arg(long, default_value_t = wyrmsnake_core::config::SEARCH_TIME.as_millis() as u64)]
    search_time_ms: u64,

    /// Extended time budget used once the best move repeats the snake's
    /// previous move.
    #[arg(long, default_value_t = wyrmsnake_core::config::TOTAL_TIME.as_millis() as u64)]
    total_time_ms: u64,
}

fn run(args: Args) -> color_eyre::Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let request: GameRequest = serde_json::from_str(&text)?;
    let mut board = Board::new(request.into_board_input())?;

    let decision = decide_with_budget(
        &mut board,
        Duration::from_millis(args.search_time_ms),
        Duration::from_millis(args.total_time_ms),
    );

    for d in &decision.depths {
        eprintln!(
            "{}\t{:06}\t{:06}\t{:7}\t{:7}",
            d.depth,
            d.elapsed.as_micros(),
            d.total_elapsed.as_micros(),
            d.nodes,
            d.nodes_per_sec
        );
    }
    for m in wyrmsnake_core::Move::ALL {
        eprintln!("{}\t{}\t{}", m.name(), decision.root_evals[m.index()], m == decision.mv);
    }

    println!("{}", json!({ "move": decision.mv.name() }));
    Ok(())
}

fn main() -> ExitCode {
    color_eyre::install().ok();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
