use thiserror::Error;

/// Input-validation failures. Fatal at board-construction time; never seen
/// once a [`crate::board::Board`] exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board is {width}x{height} = {cells} cells, exceeding the {max} cell limit")]
    TooLarge { width: u32, height: u32, cells: u32, max: u32 },

    #[error("coordinate ({x}, {y}) is out of bounds for a {width}x{height} board")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },

    #[error("snake count {count} exceeds MAX_SNAKES ({max})")]
    TooManySnakes { count: usize, max: usize },

    #[error("snake has an empty body")]
    EmptyBody,

    #[error("snake's reported head ({hx}, {hy}) does not match the first body point ({bx}, {by})")]
    HeadBodyMismatch { hx: i32, hy: i32, bx: i32, by: i32 },

    #[error("the controlled snake id was not found among board.snakes")]
    YouNotFound,
}
