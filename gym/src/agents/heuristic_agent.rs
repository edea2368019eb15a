use wyrmsnake_core::bitboard::popcount;
use wyrmsnake_core::{Board, Move};

use crate::sim::preview_own_move;
use super::Agent;

/// A rule-based agent with no search: for each legal move, previews the
/// resulting board and scores it by reachable space plus a food-seeking
/// bonus below a hunger threshold. No adversarial reasoning at all — it
/// exists as a benchmark rung between [`super::RandomAgent`] and a real
/// search agent.
pub struct HeuristicAgent {
    name: String,
    /// Health below which food-seeking dominates the score.
    hunger_threshold: u8,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        Self { name: "Heuristic".to_string(), hunger_threshold: 30 }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into(), hunger_threshold: 30 }
    }

    pub fn with_hunger_threshold(mut self, threshold: u8) -> Self {
        self.hunger_threshold = threshold;
        self
    }

    fn score_move(&self, board: &Board, mv: Move) -> i32 {
        let head = board.snakes[0].head;
        if !board.move_in_bounds(head, mv) {
            return i32::MIN;
        }
        let new_head = board.shift_head(head, mv);
        if new_head & board.bodies != 0 {
            return i32::MIN;
        }

        let next = preview_own_move(board, mv);
        let mut score = 0i32;

        // reward open space around the new head.
        let reachable = next.adj(new_head) & !next.bodies;
        score += popcount(reachable) as i32 * 10;

        let health = board.snakes[0].health;
        if health < self.hunger_threshold && board.food != 0 {
            let (hx, hy) = cell_xy(board, head);
            let mut best_dist = i32::MAX;
            let mut food = board.food;
            while food != 0 {
                let bit = food & food.wrapping_neg();
                let (fx, fy) = cell_xy(board, bit);
                let dist = (hx - fx).abs() + (hy - fy).abs();
                best_dist = best_dist.min(dist);
                food &= food - 1;
            }
            score += (20 - best_dist).max(0) * 5;
        }

        score += board.snakes[0].length as i32;
        if health < 20 {
            score -= (20 - health as i32) * 2;
        }

        score
    }
}

fn cell_xy(board: &Board, bit: u128) -> (i32, i32) {
    let idx = bit.trailing_zeros() as i32;
    (idx % board.width as i32, idx / board.width as i32)
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Move {
        Move::ALL
            .into_iter()
            .max_by_key(|&mv| self.score_move(board, mv))
            .unwrap_or(Move::Up)
    }
}
