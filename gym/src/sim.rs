//! A forward-only, irreversible rules engine for self-play: given one move
//! per living snake, resolves wall deaths, body collisions, head-to-head
//! combat, food, and tail lag, then advances the board one tick. Distinct
//! from [`wyrmsnake_core::search`]'s reversible per-snake stepping, which
//! exists to be undone thousands of times inside one search call; this
//! exists to be applied once, for real, in a self-play loop.

use wyrmsnake_core::bitboard::Bitboard;
use wyrmsnake_core::config::MAX_SNAKES;
use wyrmsnake_core::{Board, Move};

use crate::agents::Agent;

/// Outcome of one played-out game.
#[derive(Debug, Clone, Copy)]
pub struct GameOutcome {
    /// Canonical index of the sole survivor, or `None` on a draw (everyone
    /// dead on the same tick, or `max_turns` reached with >1 alive).
    pub winner: Option<usize>,
    pub turns: u32,
}

fn retracted_tail(board: &Board, i: usize) -> Bitboard {
    let snake = &board.snakes[i];
    let tail = snake.tail;
    let axis_bit = snake.axis & tail != 0;
    let sign_bit = snake.sign & tail != 0;
    match (axis_bit, sign_bit) {
        (false, false) => tail >> 1,
        (false, true) => tail << 1,
        (true, false) => tail >> board.width,
        (true, true) => (tail << board.width) & board.board_mask,
    }
}

/// Applies `mv` to snake 0 alone, leaving every other snake untouched.
/// Used by baseline agents to preview their own next position without
/// running a real search.
pub fn preview_own_move(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    let head = next.snakes[0].head;
    let new_head = next.shift_head(head, mv);
    let ate = new_head & next.food != 0;

    if next.snakes[0].taillag == 0 {
        let tail = next.snakes[0].tail;
        next.bodies &= !tail;
        next.snakes[0].tail = retracted_tail(&next, 0);
    } else {
        next.snakes[0].taillag -= 1;
    }

    if mv.axis() {
        next.snakes[0].axis |= head;
    } else {
        next.snakes[0].axis &= !head;
    }
    if mv.sign() {
        next.snakes[0].sign |= head;
    } else {
        next.snakes[0].sign &= !head;
    }
    next.snakes[0].head = new_head;
    next.bodies |= new_head;

    if ate {
        next.snakes[0].length += 1;
        next.snakes[0].taillag += 1;
        next.food &= !new_head;
        next.snakes[0].health = 100;
    } else {
        next.snakes[0].health = next.snakes[0].health.saturating_sub(1);
    }
    next
}

fn apply_turn(board: &mut Board, alive: &[usize], moves: &[Move; MAX_SNAKES]) {
    let old_food = board.food;
    let mut new_head = [0 as Bitboard; MAX_SNAKES];
    let mut dead = [false; MAX_SNAKES];

    for &i in alive {
        let head = board.snakes[i].head;
        if !board.move_in_bounds(head, moves[i]) {
            dead[i] = true;
            continue;
        }
        new_head[i] = board.shift_head(head, moves[i]);
    }

    // cells still occupied once this tick's tail retractions are accounted for.
    let mut occupied = board.bodies;
    for &i in alive {
        if !dead[i] && board.snakes[i].taillag == 0 {
            occupied &= !board.snakes[i].tail;
        }
    }
    for &i in alive {
        if !dead[i] && new_head[i] & occupied != 0 {
            dead[i] = true;
        }
    }

    // head-to-head: shorter dies, equal length both die.
    for a_idx in 0..alive.len() {
        let a = alive[a_idx];
        if dead[a] {
            continue;
        }
        for &b in &alive[a_idx + 1..] {
            if dead[b] || new_head[a] == 0 || new_head[a] != new_head[b] {
                continue;
            }
            use std::cmp::Ordering;
            match board.snakes[a].length.cmp(&board.snakes[b].length) {
                Ordering::Greater => dead[b] = true,
                Ordering::Less => dead[a] = true,
                Ordering::Equal => {
                    dead[a] = true;
                    dead[b] = true;
                }
            }
        }
    }

    let mut new_bodies = board.bodies;
    let mut new_food = old_food;

    for &i in alive {
        if dead[i] {
            board.snakes[i].health = 0;
            continue;
        }

        let head = board.snakes[i].head;
        let nh = new_head[i];
        let ate = nh & old_food != 0;

        if board.snakes[i].taillag == 0 {
            let tail = board.snakes[i].tail;
            new_bodies &= !tail;
            board.snakes[i].tail = retracted_tail(board, i);
        } else {
            board.snakes[i].taillag -= 1;
        }

        let mv = moves[i];
        if mv.axis() {
            board.snakes[i].axis |= head;
        } else {
            board.snakes[i].axis &= !head;
        }
        if mv.sign() {
            board.snakes[i].sign |= head;
        } else {
            board.snakes[i].sign &= !head;
        }
        board.snakes[i].head = nh;
        new_bodies |= nh;

        if ate {
            board.snakes[i].length += 1;
            board.snakes[i].taillag += 1;
            board.snakes[i].health = 100;
            new_food &= !nh;
        } else {
            board.snakes[i].health = board.snakes[i].health.saturating_sub(1);
        }
    }

    board.bodies = new_bodies;
    board.food = new_food;
}

/// Plays one game to completion (or to `max_turns`), querying `agents[i]`
/// for snake `i`'s move each tick. Each agent always sees itself as slot 0
/// — its board is reordered before the call, per [`Board::reordered`].
pub fn play_game(mut board: Board, agents: &[&dyn Agent], max_turns: u32) -> GameOutcome {
    let mut turn = 0u32;
    loop {
        let alive: Vec<usize> = (0..agents.len()).filter(|&i| board.snakes[i].is_alive()).collect();
        if alive.len() <= 1 || turn >= max_turns {
            let winner = if alive.len() == 1 { Some(alive[0]) } else { None };
            return GameOutcome { winner, turns: turn };
        }

        let mut moves = [Move::Up; MAX_SNAKES];
        for &i in &alive {
            let view = board.reordered(i);
            moves[i] = agents[i].choose_move(&view);
        }

        apply_turn(&mut board, &alive, &moves);
        turn += 1;
    }
}
