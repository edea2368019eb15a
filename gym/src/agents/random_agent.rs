use rand::seq::SliceRandom;

use wyrmsnake_core::{Board, Move};

use super::Agent;

/// Picks a uniformly random move that stays on the board and off its own
/// body. Useful as a tournament floor: anything that can't beat this isn't
/// playing at all.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self { name: "Random".to_string() }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Move {
        let head = board.snakes[0].head;
        let legal: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|&mv| {
                board.move_in_bounds(head, mv) && board.shift_head(head, mv) & board.bodies == 0
            })
            .collect();

        let mut rng = rand::rng();
        legal.choose(&mut rng).copied().unwrap_or(Move::Up)
    }
}
