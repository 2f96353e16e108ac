use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four::ai::Strategy;
use connect_four::arena::Arena;
use connect_four::config::AppConfig;
use connect_four::game::{GameState, Player};

/// Connect Four engine with minimax search.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long, global = true)]
    depth: Option<usize>,

    /// Disable alpha-beta cutoffs (same moves, more nodes)
    #[arg(long, global = true)]
    no_pruning: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the engine for a move on a position
    BestMove {
        /// Columns played so far, comma separated (e.g. 3,3,4)
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Side that made the first move: one or two
        #[arg(long, default_value = "one")]
        first: Player,

        /// Strategy used to pick the move
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Print the board before the move
        #[arg(long)]
        show: bool,
    },
    /// Play headless games between two strategies
    Arena {
        #[arg(long, value_enum, default_value = "minimax")]
        player_one: Strategy,

        #[arg(long, value_enum, default_value = "greedy")]
        player_two: Strategy,

        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Seed for starting-side selection and random agents
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if cli.no_pruning {
        config.engine.pruning = false;
    }

    match cli.command {
        Command::BestMove {
            moves,
            first,
            strategy,
            show,
        } => {
            if let Some(strategy) = strategy {
                config.engine.strategy = strategy;
            }
            config.validate().context("invalid configuration")?;
            best_move(&config, &moves, first, show, cli.json)
        }
        Command::Arena {
            player_one,
            player_two,
            games,
            seed,
        } => {
            if let Some(games) = games {
                config.arena.games = games;
            }
            if seed.is_some() {
                config.arena.seed = seed;
            }
            config.validate().context("invalid configuration")?;
            arena(&config, player_one, player_two, cli.json)
        }
    }
}

fn best_move(
    config: &AppConfig,
    moves: &[usize],
    first: Player,
    show: bool,
    json: bool,
) -> Result<()> {
    let mut state = GameState::initial(first);
    for (i, &col) in moves.iter().enumerate() {
        state
            .apply_move_mut(col)
            .with_context(|| format!("replaying move {} (column {col})", i + 1))?;
    }
    if state.is_terminal() {
        bail!("position is already decided: {:?}", state.outcome());
    }

    let engine = &config.engine;
    let mut agent = engine
        .strategy
        .build(engine.depth, engine.pruning, config.arena.seed);
    let column = agent
        .select_action(&state)
        .with_context(|| format!("{} failed to pick a move", agent.name()))?;

    if show {
        println!("{}", state.board());
    }
    if json {
        let out = serde_json::json!({
            "column": column,
            "player": state.current_player(),
            "strategy": engine.strategy,
            "depth": engine.depth,
        });
        println!("{out}");
    } else {
        println!("{column}");
    }
    Ok(())
}

fn arena(config: &AppConfig, player_one: Strategy, player_two: Strategy, json: bool) -> Result<()> {
    let engine = &config.engine;
    let seed = config.arena.seed;
    let mut one = player_one.build(engine.depth, engine.pruning, seed);
    // Distinct stream so two random agents do not mirror each other.
    let mut two = player_two.build(engine.depth, engine.pruning, seed.map(|s| s.wrapping_add(1)));

    let report = Arena::new(config.arena.clone())
        .run(one.as_mut(), two.as_mut())
        .context("arena aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stats = &report.stats;
        println!(
            "{} (one) vs {} (two): {} games",
            report.player_one, report.player_two, stats.games
        );
        println!(
            "one: {:.1}% | two: {:.1}% | draw: {:.1}% | avg_len: {:.1}",
            stats.win_rate(Player::One) * 100.0,
            stats.win_rate(Player::Two) * 100.0,
            stats.draw_rate() * 100.0,
            stats.average_game_length(),
        );
    }
    Ok(())
}
