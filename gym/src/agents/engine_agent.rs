use std::time::Duration;

use wyrmsnake_core::driver::decide_with_budget;
use wyrmsnake_core::{Board, Move};

use super::Agent;

/// The real thing: wraps [`wyrmsnake_core::driver::decide_with_budget`], the
/// same time-budgeted iterative-deepening search the server uses. Every
/// other agent in this crate exists only to give it something to beat.
pub struct EngineAgent {
    name: String,
    search_time: Duration,
    total_time: Duration,
}

impl EngineAgent {
    pub fn new(search_time: Duration) -> Self {
        Self::with_name("Engine", search_time)
    }

    pub fn with_name(name: impl Into<String>, search_time: Duration) -> Self {
        Self { name: name.into(), search_time, total_time: search_time }
    }
}

impl Default for EngineAgent {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl Agent for EngineAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Move {
        let mut board = board.clone();
        decide_with_budget(&mut board, self.search_time, self.total_time).mv
    }
}
