use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

mod agents;
mod runner;
mod sim;
mod stats;

use agents::{Agent, EngineAgent, HeuristicAgent, MinimaxAgent, RandomAgent};
use runner::{run_game, GameConfig};
use stats::{HeadToHeadStats, TournamentStats};

#[derive(Parser)]
#[command(name = "snake-gym")]
#[command(about = "Benchmarking gym for pitting wyrmsnake against baseline agents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a tournament between multiple agents
    Tournament {
        /// Number of games to run
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Agents to include in the tournament
        #[arg(short, long, value_delimiter = ',', default_value = "engine,random,heuristic")]
        agents: Vec<AgentType>,

        /// Engine per-depth search time, in milliseconds
        #[arg(long, default_value = "50")]
        engine_time: u64,

        /// Fixed minimax search depth
        #[arg(long, default_value = "3")]
        minimax_depth: u32,

        /// Maximum turns per game
        #[arg(long, default_value = "500")]
        max_turns: u32,

        /// Run games in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a head-to-head duel between two agents
    Duel {
        /// First agent
        #[arg(short = '1', long, default_value = "engine")]
        agent1: AgentType,

        /// Second agent
        #[arg(short = '2', long, default_value = "random")]
        agent2: AgentType,

        /// Number of games to run
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Engine per-depth search time, in milliseconds
        #[arg(long, default_value = "50")]
        engine_time: u64,

        /// Fixed minimax search depth
        #[arg(long, default_value = "3")]
        minimax_depth: u32,

        /// Maximum turns per game
        #[arg(long, default_value = "500")]
        max_turns: u32,

        /// Run games in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a quick benchmark of the engine at varying time budgets
    Benchmark {
        /// Number of games to run per time budget
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Engine per-depth search times to test, in milliseconds
        #[arg(long, value_delimiter = ',', default_value = "10,25,50,100")]
        engine_times: Vec<u64>,

        /// Run games in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq)]
enum AgentType {
    Engine,
    Random,
    Heuristic,
    Minimax,
}

impl AgentType {
    fn create_agent(&self, engine_time_ms: u64, minimax_depth: u32) -> Box<dyn Agent> {
        match self {
            AgentType::Engine => Box::new(EngineAgent::new(Duration::from_millis(engine_time_ms))),
            AgentType::Random => Box::new(RandomAgent::new()),
            AgentType::Heuristic => Box::new(HeuristicAgent::new()),
            AgentType::Minimax => Box::new(MinimaxAgent::new(minimax_depth)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tournament { games, agents, engine_time, minimax_depth, max_turns, parallel, json } => {
            run_tournament_cmd(games, &agents, engine_time, minimax_depth, max_turns, parallel, json);
        }
        Commands::Duel { agent1, agent2, games, engine_time, minimax_depth, max_turns, parallel, json } => {
            run_duel_cmd(agent1, agent2, games, engine_time, minimax_depth, max_turns, parallel, json);
        }
        Commands::Benchmark { games, engine_times, parallel } => {
            run_benchmark_cmd(games, &engine_times, parallel);
        }
    }
}

fn progress_bar(len: usize, json_output: bool) -> Option<ProgressBar> {
    if json_output {
        return None;
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    Some(pb)
}

fn run_all(agents: &[&dyn Agent], config: &GameConfig, num_games: usize, parallel: bool, pb: &Option<ProgressBar>) -> Vec<stats::GameResult> {
    if parallel {
        use rayon::prelude::*;
        (0..num_games)
            .into_par_iter()
            .map(|_| {
                let result = run_game(agents, config);
                if let Some(pb) = pb {
                    pb.inc(1);
                }
                result
            })
            .collect()
    } else {
        (0..num_games)
            .map(|_| {
                let result = run_game(agents, config);
                if let Some(pb) = pb {
                    pb.inc(1);
                }
                result
            })
            .collect()
    }
}

fn run_tournament_cmd(
    num_games: usize,
    agent_types: &[AgentType],
    engine_time: u64,
    minimax_depth: u32,
    max_turns: u32,
    parallel: bool,
    json_output: bool,
) {
    if !json_output {
        println!("\n{}", "=== Snake Gym Tournament ===".green().bold());
        println!("Games: {} | Max turns: {}", num_games, max_turns);
        println!("Parallel: {} | Engine time: {}ms", parallel, engine_time);
        println!();
    }

    let agents: Vec<Box<dyn Agent>> = agent_types.iter().map(|t| t.create_agent(engine_time, minimax_depth)).collect();
    let agent_refs: Vec<&dyn Agent> = agents.iter().map(|a| a.as_ref()).collect();
    let agent_names: Vec<String> = agents.iter().map(|a| a.name().to_string()).collect();

    let config = GameConfig { num_snakes: agents.len().min(4), max_turns, ..GameConfig::default() };

    let pb = progress_bar(num_games, json_output);
    let results = run_all(&agent_refs, &config, num_games, parallel, &pb);
    if let Some(pb) = pb {
        pb.finish_with_message("Done!");
    }

    let stats = TournamentStats::from_results(&results, &agent_names);
    if json_output {
        println!("{}", stats.to_json());
    } else {
        stats.print_summary();
    }
}

fn run_duel_cmd(
    agent1_type: AgentType,
    agent2_type: AgentType,
    num_games: usize,
    engine_time: u64,
    minimax_depth: u32,
    max_turns: u32,
    parallel: bool,
    json_output: bool,
) {
    if !json_output {
        println!("\n{}", "=== Snake Gym Duel ===".green().bold());
        println!("{:?} vs {:?}", agent1_type, agent2_type);
        println!("Games: {} | Max turns: {}", num_games, max_turns);
        println!();
    }

    let agent1 = agent1_type.create_agent(engine_time, minimax_depth);
    let agent2 = agent2_type.create_agent(engine_time, minimax_depth);
    let agents: Vec<&dyn Agent> = vec![agent1.as_ref(), agent2.as_ref()];

    let config = GameConfig::duel().with_max_turns(max_turns);

    let pb = progress_bar(num_games, json_output);
    let results = run_all(&agents, &config, num_games, parallel, &pb);
    if let Some(pb) = pb {
        pb.finish_with_message("Done!");
    }

    let h2h = HeadToHeadStats::from_results(&results, agent1.name(), agent2.name());
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "agent1": { "name": h2h.agent1_name, "wins": h2h.agent1_wins },
                "agent2": { "name": h2h.agent2_name, "wins": h2h.agent2_wins },
                "draws": h2h.draws,
                "total_games": num_games,
            }))
            .unwrap()
        );
    } else {
        h2h.print_summary();
    }
}

fn run_benchmark_cmd(games_per_config: usize, engine_times: &[u64], parallel: bool) {
    println!("\n{}", "=== Snake Gym Benchmark ===".green().bold());
    println!("Testing the engine at different per-depth time budgets against Random");
    println!("Games per config: {}", games_per_config);
    println!();

    let random_agent = RandomAgent::new();

    for &time_ms in engine_times {
        let engine_agent = EngineAgent::with_name(format!("Engine-{}ms", time_ms), Duration::from_millis(time_ms));
        let agents: Vec<&dyn Agent> = vec![&engine_agent, &random_agent];
        let config = GameConfig::duel();

        let pb = ProgressBar::new(games_per_config as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!("{{spinner:.green}} engine {}ms [{{bar:30.cyan/blue}}] {{pos}}/{{len}}", time_ms))
                .unwrap()
                .progress_chars("#>-"),
        );

        let results = run_all(&agents, &config, games_per_config, parallel, &Some(pb.clone()));
        pb.finish();

        let h2h = HeadToHeadStats::from_results(&results, engine_agent.name(), random_agent.name());
        let win_rate = h2h.agent1_wins as f64 / (h2h.agent1_wins + h2h.agent2_wins + h2h.draws).max(1) as f64 * 100.0;

        println!(
            "  engine {}ms: {:.1}% win rate ({} wins / {} losses / {} draws)",
            time_ms,
            win_rate,
            h2h.agent1_wins.to_string().green(),
            h2h.agent2_wins.to_string().red(),
            h2h.draws.to_string().yellow()
        );
    }

    println!();
}
