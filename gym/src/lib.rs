//! Snake Gym - A benchmarking framework for wyrmsnake and baseline agents.

pub mod agents;
pub mod runner;
pub mod sim;
pub mod stats;

pub use agents::{Agent, EngineAgent, HeuristicAgent, MinimaxAgent, RandomAgent};
pub use runner::{run_game, run_tournament, run_tournament_parallel, GameConfig};
pub use stats::{AgentStats, GameResult, HeadToHeadStats, TournamentStats};
