//! Generates random starting positions and plays them out with
//! [`crate::sim::play_game`].

use rand::seq::SliceRandom;
use rand::Rng;

use wyrmsnake_core::board::{Board, BoardInput, Point, SnakeInput};

use crate::agents::Agent;
use crate::sim::play_game;
use crate::stats::GameResult;

/// Configuration for game generation.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub num_snakes: usize,
    pub initial_health: u8,
    pub initial_length: u8,
    pub num_food: usize,
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            num_snakes: 4,
            initial_health: 100,
            initial_length: 3,
            num_food: 5,
            max_turns: 500,
        }
    }
}

impl GameConfig {
    pub fn standard_4_snake() -> Self {
        Self::default()
    }

    pub fn duel() -> Self {
        Self { num_snakes: 2, num_food: 3, ..Default::default() }
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Standard starting corners/edges, same layout the real game engine uses
/// for up to 8 snakes on an 11x11 board.
fn standard_positions(width: u32, height: u32) -> Vec<Point> {
    let (w, h) = (width as i32, height as i32);
    vec![
        Point { x: 1, y: 1 },
        Point { x: 1, y: h / 2 },
        Point { x: 1, y: h - 2 },
        Point { x: w / 2, y: 1 },
        Point { x: w / 2, y: h - 2 },
        Point { x: w - 2, y: 1 },
        Point { x: w - 2, y: h / 2 },
        Point { x: w - 2, y: h - 2 },
    ]
}

/// Generates a random legal starting position for `config`.
pub fn generate_random_board(config: &GameConfig) -> Board {
    let mut rng = rand::rng();

    let mut positions = standard_positions(config.width, config.height);
    positions.shuffle(&mut rng);
    let snake_positions: Vec<Point> = positions.into_iter().take(config.num_snakes).collect();

    let snakes: Vec<SnakeInput> = snake_positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| SnakeInput {
            id: format!("snake_{i}"),
            length: config.initial_length,
            health: config.initial_health,
            head: pos,
            body: vec![pos; config.initial_length as usize],
        })
        .collect();

    let occupied: std::collections::HashSet<(i32, i32)> =
        snake_positions.iter().map(|p| (p.x, p.y)).collect();
    let mut food = Vec::new();
    let mut attempts = 0;
    while food.len() < config.num_food && attempts < config.num_food * 50 + 100 {
        attempts += 1;
        let p = Point {
            x: rng.random_range(0..config.width as i32),
            y: rng.random_range(0..config.height as i32),
        };
        if !occupied.contains(&(p.x, p.y)) && !food.contains(&p) {
            food.push(p);
        }
    }

    Board::new(BoardInput {
        width: config.width,
        height: config.height,
        food,
        you_id: "snake_0".into(),
        snakes,
    })
    .expect("generated starting position is always within bounds and MAX_SNAKES")
}

/// Runs a single game with the given agents.
pub fn run_game(agents: &[&dyn Agent], config: &GameConfig) -> GameResult {
    assert!(
        agents.len() >= config.num_snakes,
        "need at least {} agents for {} snakes",
        config.num_snakes,
        config.num_snakes
    );

    let board = generate_random_board(config);
    let outcome = play_game(board, &agents[..config.num_snakes], config.max_turns);

    GameResult { winner: outcome.winner, turns: outcome.turns, num_snakes: config.num_snakes }
}

/// Runs multiple games and collects results.
pub fn run_tournament(agents: &[&dyn Agent], config: &GameConfig, num_games: usize) -> Vec<GameResult> {
    (0..num_games).map(|_| run_game(agents, config)).collect()
}

/// Runs multiple games in parallel.
pub fn run_tournament_parallel(agents: &[&dyn Agent], config: &GameConfig, num_games: usize) -> Vec<GameResult> {
    use rayon::prelude::*;

    (0..num_games).into_par_iter().map(|_| run_game(agents, config)).collect()
}
