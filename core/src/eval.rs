//! Voronoi-flood board evaluator.

use crate::board::Board;
use crate::bitboard::{self, Bitboard};
use crate::config::{EVAL_MIN, K_FOOD, K_HEALTH, K_LENGTH, K_OWNED, MAX_VORONOI};

/// Scores `board` from snake 0's perspective.
///
/// Two-set synchronous flood fill: `owned` is cells snake 0 can reach
/// strictly before any opponent, `lost` is cells it cannot. Opponents are
/// seeded with a one-step advance to account for the fact that moves are
/// simultaneous, not serialized — seeing a pending opponent's head in
/// `board.heads` means they have not committed to a move yet, so they
/// could step anywhere adjacent before we would reach it.
///
/// Returns [`EVAL_MIN`] if snake 0 is dead; callers must check this before
/// trusting the value as a real score (`EVAL_MIN` is far outside the
/// otherwise-bounded range).
pub fn eval(board: &Board) -> i32 {
    let you = &board.snakes[0];
    if !you.is_alive() {
        return EVAL_MIN;
    }

    let mut owned: Bitboard = you.head;
    let mut lost: Bitboard = 0;

    for snake in &board.snakes[1..] {
        if !snake.is_alive() {
            continue;
        }
        let mut temp = snake.head;
        if snake.head & board.heads != 0 {
            temp |= board.adj(temp) & !board.bodies;
        }
        if snake.length >= you.length {
            temp |= board.adj(temp) & !board.bodies;
        }
        lost |= temp;
    }

    for _ in 0..MAX_VORONOI {
        owned |= board.adj(owned) & !board.bodies & !lost;
        lost |= board.adj(lost) & !board.bodies & !owned;
    }

    let mut score: i32 = 0;
    score += bitboard::popcount(owned) as i32 * K_OWNED;
    score += bitboard::popcount(owned & board.food) as i32 * K_FOOD;
    score += you.length as i32 * K_LENGTH + you.health as i32 * K_HEALTH;

    for snake in &board.snakes[1..] {
        if snake.is_alive() {
            score -= snake.length as i32 * K_LENGTH + snake.health as i32 * K_HEALTH;
        }
    }

    debug_assert!(
        score.unsigned_abs() <= crate::config::EVAL_MAX as u32,
        "eval {score} exceeds the bounded range; check K_* weights against board area"
    );

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardInput, Point, SnakeInput};

    fn p(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    fn lone_snake_board(width: u32, height: u32, head: Point, food: Vec<Point>) -> Board {
        Board::new(BoardInput {
            width,
            height,
            food,
            you_id: "you".into(),
            snakes: vec![SnakeInput {
                id: "you".into(),
                length: 3,
                health: 100,
                head,
                body: vec![head, head, head],
            }],
        })
        .unwrap()
    }

    #[test]
    fn dead_snake_zero_is_eval_min() {
        let mut board = lone_snake_board(7, 7, p(3, 3), vec![]);
        board.snakes[0].health = 0;
        assert_eq!(eval(&board), EVAL_MIN);
    }

    #[test]
    fn lone_snake_owns_whole_board() {
        let board = lone_snake_board(5, 5, p(2, 2), vec![]);
        let score = eval(&board);
        // owned should flood the entire 25-cell board (minus the 3 body
        // cells, all stacked under the head here) at K_OWNED=1.
        assert!(score > 0);
    }

    #[test]
    fn owning_a_food_cell_scores_higher_than_not() {
        let without_food = lone_snake_board(5, 5, p(2, 2), vec![]);
        let with_food = lone_snake_board(5, 5, p(2, 2), vec![p(0, 0)]);
        assert!(eval(&with_food) >= eval(&without_food));
    }

    #[test]
    fn bounded_for_small_reachable_board() {
        let board = lone_snake_board(5, 5, p(2, 2), vec![]);
        assert!(eval(&board).unsigned_abs() <= crate::config::EVAL_MAX as u32);
    }
}
