//! Compile-time tunables for the search.
//!
//! Kept as `const` items rather than literals scattered through the search
//! so a downstream binary can build a tuned variant without touching
//! algorithm code.

use std::time::Duration;

/// Maximum board cells `W*H` a [`crate::bitboard::Bitboard`] can address.
pub const MAX_CELLS: u32 = 128;

/// Fixed-capacity array size for the snake roster. Raise to 8 for squad
/// variants; the search cost scales with this.
pub const MAX_SNAKES: usize = 4;

/// Number of synchronous Voronoi propagation steps performed by the evaluator.
pub const MAX_VORONOI: u32 = 32;

/// Upper bound on iterative-deepening depth, used only to size the
/// move-ordering cache.
pub const MAX_DEPTH: usize = 32;

/// Recursion depth above which the driver starts sampling the clock.
/// Keeps the hot path branch-free at the bottom of the tree.
pub const CHECK_DEPTH: i32 = 8;

/// Cutoff used while the chosen move differs from the snake's previous move.
pub const SEARCH_TIME: Duration = Duration::from_millis(400);

/// Extended cutoff used once the engine would repeat its previous move on
/// timeout anyway (the game engine re-sends that move for us).
pub const TOTAL_TIME: Duration = Duration::from_millis(500);

/// Reward per cell of Voronoi-owned territory.
pub const K_OWNED: i32 = 1;

/// Reward per owned cell that also holds food.
pub const K_FOOD: i32 = 1;

/// Reward per unit of length, ours minus every living opponent's.
pub const K_LENGTH: i32 = 4;

/// Reward per point of health, ours minus every living opponent's.
pub const K_HEALTH: i32 = 0;

/// Evaluator range: absolute value of any non-terminal [`eval`] result is
/// bounded by this so `eval * 2` (the move-ordering cache's representation)
/// still fits in `i16`.
///
/// [`eval`]: crate::eval::eval
pub const EVAL_MAX: i32 = (i16::MAX / 2) as i32;

/// Sentinel meaning "snake 0 is dead on this line".
pub const EVAL_MIN: i32 = (i16::MIN / 2) as i32;

/// Tie-break added per recursive step survived before death.
pub const TIEBREAK_SURVIVE: i32 = 2;

/// Additional tie-break when the snake under consideration is not snake 0 —
/// death must be contingent on an opponent's choice, not a wall.
pub const TIEBREAK_OPPONENT: i32 = 2;

/// Tie-break favoring a probable head-to-head death over a certain one.
pub const TIEBREAK_PROBABLE_DEATH: i32 = 16;
