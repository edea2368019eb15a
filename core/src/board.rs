use crate::bitboard::{self, Bitboard, Move};
use crate::config::MAX_SNAKES;
use crate::error::BoardError;

/// One snake's state. Index 0 is always the controlled snake; see
/// [`Board`].
#[derive(Debug, Clone, Copy)]
pub struct Snake {
    /// Bitboard with exactly one bit set: the current head cell.
    pub head: Bitboard,
    /// Bitboard with exactly one bit set: the current tail cell.
    pub tail: Bitboard,
    /// For each occupied body cell, 1 iff the step out of that cell toward
    /// the head is along the y-axis.
    pub axis: Bitboard,
    /// For each occupied body cell, 1 iff the step out of that cell toward
    /// the head is in the positive direction.
    pub sign: Bitboard,
    pub length: u8,
    /// 0 means dead.
    pub health: u8,
    /// Ticks remaining during which the tail does not move (grows from a
    /// recent food pickup).
    pub taillag: u8,
}

impl Default for Snake {
    fn default() -> Self {
        Snake { head: 0, tail: 0, axis: 0, sign: 0, length: 0, health: 0, taillag: 0 }
    }
}

impl Snake {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Authoritative board state. Mutated in place by [`crate::search`] and
/// restored on every exit path.
#[derive(Debug, Clone)]
pub struct Board {
    pub snakes: [Snake; MAX_SNAKES],
    /// Union of all food cells.
    pub food: Bitboard,
    /// Union of every live snake's body.
    pub bodies: Bitboard,
    /// Heads of snakes that have not yet moved in the current turn.
    pub heads: Bitboard,
    pub board_mask: Bitboard,
    pub x_mask: Bitboard,
    pub width: u32,
    pub height: u32,
    /// The controlled snake's most recent move, inferred from its two most
    /// recent body points. `None` if the snake is length 1 or has never
    /// moved.
    pub prev_move: Option<Move>,
}

/// A single cell coordinate as given on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// One snake as given on the wire: a reported head plus a body array
/// ordered head-first, tail-last (stacked duplicate points at the tail end
/// indicate `taillag`).
#[derive(Debug, Clone)]
pub struct SnakeInput {
    pub id: String,
    pub length: u8,
    pub health: u8,
    pub head: Point,
    pub body: Vec<Point>,
}

/// A fully parsed board request, ready for [`Board::new`].
#[derive(Debug, Clone)]
pub struct BoardInput {
    pub width: u32,
    pub height: u32,
    pub food: Vec<Point>,
    pub snakes: Vec<SnakeInput>,
    pub you_id: String,
}

fn cell_index(width: u32, p: Point) -> u32 {
    p.x as u32 + p.y as u32 * width
}

fn in_bounds(width: u32, height: u32, p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height
}

impl Board {
    /// Builds the geometry masks and every snake's `axis`/`sign` path
    /// bitboards from a parsed request. Rejects anything that does not fit
    /// the invariants in one pass; never guesses at malformed input.
    pub fn new(input: BoardInput) -> Result<Board, BoardError> {
        let BoardInput { width, height, food, snakes, you_id } = input;

        let cells = width.saturating_mul(height);
        if width == 0 || height == 0 || cells > crate::config::MAX_CELLS {
            return Err(BoardError::TooLarge { width, height, cells, max: crate::config::MAX_CELLS });
        }
        if snakes.len() > MAX_SNAKES {
            return Err(BoardError::TooManySnakes { count: snakes.len(), max: MAX_SNAKES });
        }

        let board_mask: Bitboard = (1u128 << cells) - 1;
        let mut x_mask: Bitboard = 0;
        for _ in 0..height {
            x_mask <<= width;
            x_mask |= 1;
        }
        let x_mask = board_mask & !x_mask;

        let mut food_bb: Bitboard = 0;
        for p in food {
            if !in_bounds(width, height, p) {
                return Err(BoardError::OutOfBounds { x: p.x, y: p.y, width, height });
            }
            food_bb |= 1 << cell_index(width, p);
        }

        let you_slot = snakes.iter().position(|s| s.id == you_id).ok_or(BoardError::YouNotFound)?;

        // Process "you" first so it lands at slot 0; everyone else follows
        // in whatever order the request gave them.
        let mut order: Vec<usize> = (0..snakes.len()).collect();
        order.swap(0, you_slot);

        let mut result_snakes = [Snake::default(); MAX_SNAKES];
        let mut bodies: Bitboard = 0;
        let mut prev_move: Option<Move> = None;

        for (slot, &src) in order.iter().enumerate() {
            let input = &snakes[src];
            let Some(&head_point) = input.body.first() else {
                return Err(BoardError::EmptyBody);
            };
            if head_point != input.head {
                return Err(BoardError::HeadBodyMismatch {
                    hx: input.head.x,
                    hy: input.head.y,
                    bx: head_point.x,
                    by: head_point.y,
                });
            }

            let mut axis_bb: Bitboard = 0;
            let mut sign_bb: Bitboard = 0;
            let mut taillag: u8 = 0;
            let mut prev: Option<Point> = None;
            let mut snake_prev_move: Option<Move> = None;
            let mut tail_point = head_point;

            for (i, &p) in input.body.iter().enumerate() {
                if !in_bounds(width, height, p) {
                    return Err(BoardError::OutOfBounds { x: p.x, y: p.y, width, height });
                }

                // Direction from the previous (closer-to-tail) point toward
                // this one; garbage on the very first iteration, matching
                // the original's unconditional computation (harmless: that
                // bit is only read once this cell becomes the tail, and by
                // then a live snake has re-stepped through it).
                let (px, py) = prev.map(|q| (q.x, q.y)).unwrap_or((-1, -1));
                let dx = px - p.x;
                let dy = py - p.y;
                let axis = dy != 0;
                let sign = dx > 0 || dy > 0;

                if i == 1 && slot == 0 {
                    snake_prev_move = Some(Move::from_axis_sign(axis, sign));
                }
                if prev == Some(p) {
                    taillag += 1;
                }

                let idx = cell_index(width, p);
                axis_bb |= (axis as Bitboard) << idx;
                sign_bb |= (sign as Bitboard) << idx;
                bodies |= 1 << idx;

                tail_point = p;
                prev = Some(p);
            }

            if slot == 0 {
                prev_move = snake_prev_move;
            }

            result_snakes[slot] = Snake {
                head: 1 << cell_index(width, head_point),
                tail: 1 << cell_index(width, tail_point),
                axis: axis_bb,
                sign: sign_bb,
                length: input.length,
                health: input.health,
                taillag,
            };
        }

        Ok(Board {
            snakes: result_snakes,
            food: food_bb,
            bodies,
            heads: 0,
            board_mask,
            x_mask,
            width,
            height,
            prev_move,
        })
    }

    #[inline]
    pub fn adj(&self, b: Bitboard) -> Bitboard {
        bitboard::adj(b, self.width, self.board_mask, self.x_mask)
    }

    /// A view of this board with snake `i` swapped into slot 0. `bodies`,
    /// `food`, and the geometry masks are shared across every snake, so the
    /// swap is the only thing needed for something that only ever reasons
    /// about "my" slot (the evaluator, the search, a [`crate::driver`]
    /// caller) to be run once per snake from a single authoritative board.
    pub fn reordered(&self, i: usize) -> Board {
        let mut view = self.clone();
        view.snakes.swap(0, i);
        view.prev_move = if i == 0 { self.prev_move } else { None };
        view
    }

    /// Would shifting `head` by `mv` stay on the board?
    #[inline]
    pub fn move_in_bounds(&self, head: Bitboard, mv: Move) -> bool {
        match mv {
            Move::Left => head & self.x_mask != 0,
            Move::Right => (head << 1) & self.x_mask != 0,
            Move::Down => head >> self.width != 0,
            Move::Up => (head << self.width) & self.board_mask != 0,
        }
    }

    #[inline]
    pub fn shift_head(&self, head: Bitboard, mv: Move) -> Bitboard {
        match mv {
            Move::Left => head >> 1,
            Move::Right => head << 1,
            Move::Down => head >> self.width,
            Move::Up => head << self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    fn simple_input() -> BoardInput {
        BoardInput {
            width: 7,
            height: 7,
            food: vec![p(6, 6)],
            you_id: "you".into(),
            snakes: vec![SnakeInput {
                id: "you".into(),
                length: 3,
                health: 100,
                head: p(3, 3),
                body: vec![p(3, 3), p(3, 2), p(3, 1)],
            }],
        }
    }

    #[test]
    fn construction_places_you_at_slot_zero() {
        let board = Board::new(simple_input()).unwrap();
        assert_eq!(board.snakes[0].length, 3);
        assert_eq!(popcount_for_test(board.snakes[0].head), 1);
        assert_eq!(popcount_for_test(board.snakes[0].tail), 1);
    }

    fn popcount_for_test(b: Bitboard) -> u32 {
        bitboard::popcount(b)
    }

    #[test]
    fn taillag_counts_stacked_points() {
        let mut input = simple_input();
        input.snakes[0].body = vec![p(3, 3), p(3, 2), p(3, 2), p(3, 2)];
        let board = Board::new(input).unwrap();
        assert_eq!(board.snakes[0].taillag, 2);
    }

    #[test]
    fn rejects_oversized_board() {
        let mut input = simple_input();
        input.width = 12;
        input.height = 12;
        assert!(matches!(Board::new(input), Err(BoardError::TooLarge { .. })));
    }

    #[test]
    fn rejects_head_body_mismatch() {
        let mut input = simple_input();
        input.snakes[0].head = p(0, 0);
        assert!(matches!(Board::new(input), Err(BoardError::HeadBodyMismatch { .. })));
    }

    #[test]
    fn rejects_unknown_you_id() {
        let mut input = simple_input();
        input.you_id = "nobody".into();
        assert!(matches!(Board::new(input), Err(BoardError::YouNotFound)));
    }

    #[test]
    fn infers_prev_move_from_last_two_body_points() {
        // moved from (3,2) to (3,3): +y, so "up".
        let board = Board::new(simple_input()).unwrap();
        assert_eq!(board.prev_move, Some(Move::Up));
    }

    #[test]
    fn x_mask_clears_left_column_not_right() {
        let board = Board::new(simple_input()).unwrap();
        // leftmost column of row 0 must be cleared.
        assert_eq!(board.x_mask & 1, 0);
        // rightmost column of row 0 must still be set.
        assert_ne!(board.x_mask & (1 << (board.width - 1)), 0);
    }

    #[test]
    fn reordered_swaps_only_the_slot() {
        let mut input = simple_input();
        input.snakes.push(SnakeInput {
            id: "opp".into(),
            length: 2,
            health: 50,
            head: p(0, 0),
            body: vec![p(0, 0), p(0, 1)],
        });
        let board = Board::new(input).unwrap();
        let view = board.reordered(1);
        assert_eq!(view.snakes[0].length, board.snakes[1].length);
        assert_eq!(view.snakes[1].length, board.snakes[0].length);
        assert_eq!(view.bodies, board.bodies);
        assert_eq!(view.food, board.food);
    }
}
