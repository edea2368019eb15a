//! Time-budgeted iterative deepening on top of [`crate::search`].

use std::time::{Duration, Instant};

use rand::Rng;

use crate::bitboard::Move;
use crate::board::Board;
use crate::config::{EVAL_MAX, EVAL_MIN, MAX_DEPTH, SEARCH_TIME, TOTAL_TIME};
use crate::search::Search;

/// One completed depth's telemetry, the Rust equivalent of the original's
/// per-depth stderr trace line.
#[derive(Debug, Clone, Copy)]
pub struct DepthStats {
    pub depth: i32,
    pub elapsed: Duration,
    pub total_elapsed: Duration,
    pub nodes: u64,
    pub nodes_per_sec: u64,
}

/// Everything a caller might want after [`decide`] returns: the chosen
/// move, the depth trace, and the root-level cached eval for every
/// candidate move (whether or not it ended up chosen).
#[derive(Debug, Clone)]
pub struct Decision {
    pub mv: Move,
    pub depths: Vec<DepthStats>,
    pub root_evals: [i32; 4],
}

/// Runs iterative deepening from depth 0 up to [`MAX_DEPTH`], stopping
/// early once the per-depth time budget is spent. `board.prev_move` widens
/// the budget from [`SEARCH_TIME`] to [`TOTAL_TIME`] when the best move so
/// far repeats it — the game engine will re-send our last move on timeout
/// anyway, so there's no harm in spending a little longer chasing a better
/// answer that still lands on the same move.
pub fn decide(board: &mut Board) -> Decision {
    decide_with_budget(board, SEARCH_TIME, TOTAL_TIME)
}

/// Same as [`decide`] but with the per-depth time budget passed in rather
/// than taken from [`SEARCH_TIME`]/[`TOTAL_TIME`] — lets tests and the gym
/// harness exercise short, deterministic cutoffs.
pub fn decide_with_budget(board: &mut Board, search_time: Duration, total_time: Duration) -> Decision {
    let mut rng = rand::rng();
    let mut evals: Vec<[i32; 4]> = (0..=MAX_DEPTH)
        .map(|_| std::array::from_fn(|_| (rng.random::<u16>() as i32) & !1))
        .collect();

    let mut mv = Move::Left;
    let mut root_evals = [0i32; 4];
    let mut depths = Vec::new();

    let start = Instant::now();
    let mut prev_instant = start;
    let mut nodes_total: u64 = 0;

    for depth in 0..=(MAX_DEPTH as i32) {
        let cutoff = if Some(mv) == board.prev_move { start + total_time } else { start + search_time };

        let mut search = Search::new(board, cutoff);
        let outcome = search.turn(&mut evals, EVAL_MIN, EVAL_MAX, depth);
        nodes_total += search.nodes;

        match outcome {
            Ok(scored) => {
                mv = scored.mv;
                root_evals = evals[0];
                let now = Instant::now();
                let total_elapsed = now - start;
                depths.push(DepthStats {
                    depth,
                    elapsed: now - prev_instant,
                    total_elapsed,
                    nodes: nodes_total,
                    nodes_per_sec: (nodes_total as f64 / total_elapsed.as_secs_f64().max(1e-9)) as u64,
                });
                prev_instant = now;
                tracing::debug!(
                    depth,
                    eval = scored.eval,
                    mv = mv.name(),
                    nodes = nodes_total,
                    "completed iterative-deepening pass"
                );
            }
            Err(_aborted) => {
                tracing::debug!(depth, nodes = nodes_total, "search aborted, reusing last completed depth's move");
                break;
            }
        }
    }

    for m in Move::ALL {
        tracing::trace!(mv = m.name(), eval = root_evals[m.index()], best = m == mv, "root move");
    }

    Decision { mv, depths, root_evals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardInput, Point, SnakeInput};

    fn p(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    #[test]
    fn decide_returns_a_legal_move_on_empty_board() {
        let mut board = Board::new(BoardInput {
            width: 11,
            height: 11,
            food: vec![],
            you_id: "you".into(),
            snakes: vec![SnakeInput {
                id: "you".into(),
                length: 3,
                health: 100,
                head: p(5, 5),
                body: vec![p(5, 5), p(5, 4), p(5, 3)],
            }],
        })
        .unwrap();

        let decision = decide(&mut board);
        assert!(board.move_in_bounds(board.snakes[0].head, decision.mv));
        assert!(!decision.depths.is_empty());
    }

    #[test]
    fn decide_picks_only_surviving_move_in_corner() {
        // you is boxed into (0,0) with walls on two sides and its own body
        // on a third; only "up" stays on the board and off its own neck.
        let mut board = Board::new(BoardInput {
            width: 11,
            height: 11,
            food: vec![],
            you_id: "you".into(),
            snakes: vec![SnakeInput {
                id: "you".into(),
                length: 2,
                health: 100,
                head: p(0, 0),
                body: vec![p(0, 0), p(1, 0)],
            }],
        })
        .unwrap();

        let decision = decide(&mut board);
        assert_eq!(decision.mv, Move::Up);
    }
}
