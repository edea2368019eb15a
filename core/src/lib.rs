pub mod bitboard;
pub mod board;
pub mod config;
pub mod driver;
pub mod error;
pub mod eval;
pub mod search;

pub use bitboard::{Bitboard, Move};
pub use board::{Board, BoardInput, Point, Snake, SnakeInput};
pub use driver::{decide, DepthStats, Decision};
pub use error::BoardError;
