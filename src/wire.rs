//! Battlesnake HTTP API JSON shapes, and the conversion into
//! [`wyrmsnake_core::BoardInput`]. Kept entirely separate from the engine:
//! the core crate has no idea these come from JSON over HTTP.

use serde::Deserialize;
use wyrmsnake_core::{BoardInput, Point, SnakeInput};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Point {
        Point { x: c.x, y: c.y }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSnake {
    pub id: String,
    pub health: u8,
    pub body: Vec<Coord>,
    pub head: Coord,
    pub length: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBoard {
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub food: Vec<Coord>,
    pub snakes: Vec<WireSnake>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameInfo {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRequest {
    pub game: GameInfo,
    #[serde(default)]
    pub turn: u32,
    pub board: WireBoard,
    pub you: WireSnake,
}

impl GameRequest {
    pub fn into_board_input(self) -> BoardInput {
        BoardInput {
            width: self.board.width,
            height: self.board.height,
            food: self.board.food.into_iter().map(Point::from).collect(),
            you_id: self.you.id,
            snakes: self
                .board
                .snakes
                .into_iter()
                .map(|s| SnakeInput {
                    id: s.id,
                    length: s.length,
                    health: s.health,
                    head: s.head.into(),
                    body: s.body.into_iter().map(Point::from).collect(),
                })
                .collect(),
        }
    }
}
