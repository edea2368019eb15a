use std::time::{Duration, Instant};

use wyrmsnake_core::config::{EVAL_MAX, EVAL_MIN};
use wyrmsnake_core::search::Search;
use wyrmsnake_core::{Board, Move};

use super::Agent;

/// A fixed-depth alpha-beta search with no iterative deepening and no time
/// pressure — what [`super::EngineAgent`] would be without the driver's
/// time budget wrapped around it. Useful as a control: differences against
/// `EngineAgent` at the same nominal depth isolate what iterative deepening
/// and move-ordering reuse actually buy.
pub struct MinimaxAgent {
    name: String,
    depth: i32,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        Self::with_name("Minimax", depth)
    }

    pub fn with_name(name: impl Into<String>, depth: u32) -> Self {
        Self { name: name.into(), depth: depth as i32 }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Move {
        let mut board = board.clone();
        let mut cache = vec![[0i32; 4]; self.depth as usize + 1];
        let deadline = Instant::now() + Duration::from_secs(60);
        let mut search = Search::new(&mut board, deadline);
        search
            .turn(&mut cache, EVAL_MIN, EVAL_MAX, self.depth)
            .map(|scored| scored.mv)
            .unwrap_or(Move::Up)
    }
}
