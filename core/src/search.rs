//! Depth-bounded alpha-beta minimax over stepped moves, with a per-depth
//! move-ordering cache and explicit turn-boundary handling.
//!
//! The game is a 4-player zero-sum-from-snake-0's-perspective tree. Snake 0
//! maximizes; every other snake minimizes. The tree alternates by *snake*,
//! not by ply: within one turn snake 0 chooses, then snake 1, then snake 2,
//! then snake 3; once every live snake has moved, the turn boundary runs
//! (tails advance) and `depth` — which is a per-snake-move ply counter, not
//! a per-turn counter — decrements by one.

use std::time::Instant;

use crate::bitboard::{Bitboard, Move};
use crate::board::Board;
use crate::config::{
    CHECK_DEPTH, EVAL_MAX, EVAL_MIN, MAX_SNAKES, TIEBREAK_OPPONENT, TIEBREAK_PROBABLE_DEATH,
    TIEBREAK_SURVIVE,
};
use crate::eval::eval;

/// Per-depth move-ordering cache: `evals[level]` holds the four cached
/// scores (one per [`Move::index`]) from the previous iterative-deepening
/// pass at that ply. The low bit of each entry marks "already tried in
/// this pass"; evaluator output is doubled on the way in so that bit is
/// always free.
pub type EvalsCache = [[i32; 4]];

/// The best move found for a single [`Search::step`] or [`Search::turn`]
/// call, with its (tie-break-inclusive) eval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub eval: i32,
    pub mv: Move,
}

/// Raised when the clock check inside [`Search::step`] finds the deadline
/// has passed. Unwinds every recursive frame; each frame finishes its own
/// undo before re-raising, so the board is always left fully restored —
/// slightly more defensive than the original's longjmp (which relied on
/// the caller never reusing a mid-unwind board), but behaviorally
/// equivalent and safe regardless of caller discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Owns the board exclusively for the duration of one search call and
/// counts leaf evaluations for telemetry.
pub struct Search<'a> {
    pub board: &'a mut Board,
    deadline: Instant,
    pub nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(board: &'a mut Board, deadline: Instant) -> Self {
        Search { board, deadline, nodes: 0 }
    }

    fn restore_head(&mut self, s: usize, head: Bitboard, axis_bit: bool, sign_bit: bool) {
        let snake = &mut self.board.snakes[s];
        snake.head = head;
        if axis_bit {
            snake.axis |= head;
        } else {
            snake.axis &= !head;
        }
        if sign_bit {
            snake.sign |= head;
        } else {
            snake.sign &= !head;
        }
    }

    /// Picks the next candidate to try within one snake's four-way choice:
    /// the unexplored slot (low bit clear) with the highest score for the
    /// maximizer or lowest for the minimizer. Any tie-break order here is
    /// sound — searching the same position with a different initial cache
    /// changes the node count, never the final chosen move.
    fn pick_candidate(level: &[i32; 4], is_max: bool) -> usize {
        let mut chosen: Option<usize> = None;
        for e in 0..4 {
            if level[e] & 1 != 0 {
                continue;
            }
            let better = match chosen {
                None => true,
                Some(b) => {
                    if is_max {
                        level[e] > level[b]
                    } else {
                        level[e] < level[b]
                    }
                }
            };
            if better {
                chosen = Some(e);
            }
        }
        chosen.unwrap_or(0)
    }

    fn track_best(
        level: &mut [i32; 4],
        idx: usize,
        best: &mut Scored,
        is_max: bool,
        alpha: &mut i32,
        beta: &mut i32,
        computed: i32,
    ) {
        let better = if is_max { computed > best.eval } else { computed < best.eval };
        if better {
            best.eval = computed;
            best.mv = Move::from_index(idx);
            if is_max {
                *alpha = (*alpha).max(computed);
            } else {
                *beta = (*beta).min(computed);
            }
        }
        level[idx] = computed | 1;
    }

    /// One snake's move. `s = -1` means "no snake has moved yet this
    /// turn"; the first thing this does is find the next live snake after
    /// `s`, recursing into [`Search::turn`] once every snake has gone.
    pub fn step(
        &mut self,
        s: i32,
        evals: &mut EvalsCache,
        mut alpha: i32,
        mut beta: i32,
        depth: i32,
    ) -> Result<Scored, Aborted> {
        if self.board.snakes[0].health == 0 {
            return Ok(Scored { eval: EVAL_MIN, mv: Move::Left });
        }
        if depth == 0 {
            self.nodes += 1;
            return Ok(Scored { eval: eval(self.board) * 2, mv: Move::Left });
        }
        if depth >= CHECK_DEPTH && Instant::now() > self.deadline {
            return Err(Aborted);
        }

        let mut s = s;
        loop {
            s += 1;
            if s as usize == MAX_SNAKES {
                return self.turn(evals, alpha, beta, depth);
            }
            if self.board.snakes[s as usize].is_alive() {
                break;
            }
        }
        let s = s as usize;
        let is_max = s == 0;

        let head0 = self.board.snakes[s].head;
        self.board.heads &= !head0;

        let mut best = Scored { eval: if is_max { EVAL_MIN } else { EVAL_MAX }, mv: Move::Left };
        let mut did_recurse = false;
        let mut abort: Option<Aborted> = None;

        for _ in 0..4 {
            let idx = Self::pick_candidate(&evals[0], is_max);
            evals[0][idx] = (if is_max { EVAL_MIN } else { EVAL_MAX }) | 1;

            if alpha >= beta {
                continue;
            }

            let mv = Move::from_index(idx);
            let head = self.board.snakes[s].head;
            if !self.board.move_in_bounds(head, mv) {
                continue;
            }

            let old_axis_bit = self.board.snakes[s].axis & head != 0;
            let old_sign_bit = self.board.snakes[s].sign & head != 0;
            let new_head = self.board.shift_head(head, mv);
            {
                let snake = &mut self.board.snakes[s];
                if mv.axis() {
                    snake.axis |= head;
                } else {
                    snake.axis &= !head;
                }
                if mv.sign() {
                    snake.sign |= head;
                } else {
                    snake.sign &= !head;
                }
                snake.head = new_head;
            }

            if new_head & self.board.bodies != 0 {
                // fatal: walked into an occupied cell.
                self.restore_head(s, head, old_axis_bit, old_sign_bit);
                continue;
            }

            // can't move adjacent to the head of a still-pending,
            // at-least-as-long snake: they could kill us by stepping onto
            // our new head.
            let head_adj = self.board.adj(new_head);
            let mut threatened = false;
            if head_adj & self.board.heads != 0 {
                let my_length = self.board.snakes[s].length;
                for r in (s + 1)..MAX_SNAKES {
                    let rival = self.board.snakes[r];
                    if rival.is_alive() && rival.length >= my_length && head_adj & rival.head != 0 {
                        threatened = true;
                        break;
                    }
                }
            }

            if threatened {
                let computed = (if is_max { EVAL_MIN } else { EVAL_MAX }) + TIEBREAK_PROBABLE_DEATH;
                Self::track_best(&mut evals[0], idx, &mut best, is_max, &mut alpha, &mut beta, computed);
                self.restore_head(s, head, old_axis_bit, old_sign_bit);
                continue;
            }

            let length_before = self.board.snakes[s].length;
            let health_before = self.board.snakes[s].health;
            let taillag_before = self.board.snakes[s].taillag;
            let mut ate_food = false;

            self.board.bodies |= new_head;
            {
                let snake = &mut self.board.snakes[s];
                snake.health -= 1;
                if snake.taillag > 0 {
                    snake.taillag -= 1;
                }
            }
            if new_head & self.board.food != 0 {
                let snake = &mut self.board.snakes[s];
                snake.length += 1;
                snake.taillag += 1;
                snake.health = 100;
                self.board.food &= !new_head;
                ate_food = true;
            }

            // survive-longer + death-contingent-on-opponent tie-breaks,
            // applied symmetrically to alpha/beta so pruning stays correct.
            let tiebreak = TIEBREAK_SURVIVE + if s != 0 { TIEBREAK_OPPONENT } else { 0 };
            did_recurse = true;
            let child = self.step(s as i32, &mut evals[1..], alpha - tiebreak, beta - tiebreak, depth - 1);

            if ate_food {
                self.board.food |= new_head;
            }
            {
                let snake = &mut self.board.snakes[s];
                snake.length = length_before;
                snake.health = health_before;
                snake.taillag = taillag_before;
            }
            self.board.bodies &= !new_head;
            self.restore_head(s, head, old_axis_bit, old_sign_bit);

            match child {
                Ok(scored) => {
                    let computed = scored.eval + tiebreak;
                    Self::track_best(&mut evals[0], idx, &mut best, is_max, &mut alpha, &mut beta, computed);
                }
                Err(e) => {
                    abort = Some(e);
                    break;
                }
            }
        }

        // unmark every slot so the next deepening pass starts clean.
        for e in evals[0].iter_mut() {
            *e &= !1;
        }

        if let Some(e) = abort {
            self.board.heads |= head0;
            return Err(e);
        }

        if s != 0 && !did_recurse {
            let health_before = self.board.snakes[s].health;
            self.board.snakes[s].health = 0;
            let child = self.step(s as i32, &mut evals[1..], alpha, beta, depth - 1);
            self.board.snakes[s].health = health_before;
            best = child?;
        }

        self.board.heads |= head0;
        Ok(best)
    }

    /// One full turn: every live snake with `taillag == 0` retracts its
    /// tail, then snakes step in index order via [`Search::step`].
    pub fn turn(
        &mut self,
        evals: &mut EvalsCache,
        alpha: i32,
        beta: i32,
        depth: i32,
    ) -> Result<Scored, Aborted> {
        let width = self.board.width;
        let board_mask = self.board.board_mask;

        let mut retract_axis_sign = [(false, false); MAX_SNAKES];

        for s in 0..MAX_SNAKES {
            if !self.board.snakes[s].is_alive() {
                continue;
            }
            let head = self.board.snakes[s].head;
            self.board.heads |= head;

            if self.board.snakes[s].taillag > 0 {
                continue;
            }

            let tail = self.board.snakes[s].tail;
            let axis_bit = self.board.snakes[s].axis & tail != 0;
            let sign_bit = self.board.snakes[s].sign & tail != 0;
            retract_axis_sign[s] = (axis_bit, sign_bit);

            self.board.bodies &= !tail;
            let new_tail = match (axis_bit, sign_bit) {
                (false, false) => tail >> 1,
                (false, true) => tail << 1,
                (true, false) => tail >> width,
                (true, true) => (tail << width) & board_mask,
            };
            self.board.snakes[s].tail = new_tail;
        }

        let best = self.step(-1, evals, alpha, beta, depth);

        for s in (0..MAX_SNAKES).rev() {
            if !self.board.snakes[s].is_alive() || self.board.snakes[s].taillag > 0 {
                continue;
            }
            let (axis_bit, sign_bit) = retract_axis_sign[s];
            let tail = self.board.snakes[s].tail;
            let restored_tail = match (axis_bit, sign_bit) {
                (false, false) => tail << 1,
                (false, true) => tail >> 1,
                (true, false) => tail << width,
                (true, true) => tail >> width,
            };
            let snake = &mut self.board.snakes[s];
            snake.tail = restored_tail;
            if axis_bit {
                snake.axis |= restored_tail;
            } else {
                snake.axis &= !restored_tail;
            }
            if sign_bit {
                snake.sign |= restored_tail;
            } else {
                snake.sign &= !restored_tail;
            }
            self.board.bodies |= restored_tail;
        }

        self.board.heads = 0;
        best
    }
}
