//! Headless engine-vs-engine matches and their statistics.

mod metrics;

pub use metrics::{GameResult, MatchStats};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::Agent;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::game::{GameOutcome, GameState, Player, WinLine};

/// Full trace of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameRecord {
    pub first: Player,
    pub moves: Vec<usize>,
    pub winner: Option<Player>,
    pub win_line: Option<WinLine>,
}

impl GameRecord {
    pub fn result(&self) -> GameResult {
        GameResult {
            winner: self.winner,
            game_length: self.moves.len(),
        }
    }
}

/// Outcome of a series of games between two agents.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArenaReport {
    pub player_one: String,
    pub player_two: String,
    pub stats: MatchStats,
    pub games: Vec<GameRecord>,
}

/// Play one game to completion. `one` plays [`Player::One`].
pub fn play_game(
    one: &mut dyn Agent,
    two: &mut dyn Agent,
    first: Player,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::initial(first);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let action = agent
            .select_action(&state)
            .map_err(|source| ArenaError::Search {
                agent: agent.name().to_string(),
                source,
            })?;
        let legal = state.legal_actions();
        if state.apply_move_mut(action).is_err() {
            return Err(ArenaError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal,
            });
        }
        moves.push(action);
    }

    let (winner, win_line) = match state.outcome() {
        GameOutcome::Win(player, line) => (Some(player), Some(line)),
        _ => (None, None),
    };

    Ok(GameRecord {
        first,
        moves,
        winner,
        win_line,
    })
}

/// Runs a configured number of games between two agents.
pub struct Arena {
    config: ArenaConfig,
    rng: StdRng,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Arena { config, rng }
    }

    /// Side to move first in game number `index`.
    fn first_player(&mut self, index: usize) -> Player {
        if self.config.random_first {
            if self.rng.random_bool(0.5) {
                Player::One
            } else {
                Player::Two
            }
        } else if index % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub fn run(
        &mut self,
        one: &mut dyn Agent,
        two: &mut dyn Agent,
    ) -> Result<ArenaReport, ArenaError> {
        let mut stats = MatchStats::new();
        let mut games = Vec::with_capacity(self.config.games);

        tracing::info!(
            player_one = one.name(),
            player_two = two.name(),
            games = self.config.games,
            "starting arena"
        );

        for index in 0..self.config.games {
            let first = self.first_player(index);
            let record = play_game(one, two, first)?;
            tracing::info!(
                game = index + 1,
                first = first.name(),
                winner = record.winner.map_or("draw", Player::name),
                moves = record.moves.len(),
                "game finished"
            );
            stats.record(record.result());
            games.push(record);
        }

        tracing::info!(
            player_one_win_rate = stats.win_rate(Player::One),
            player_two_win_rate = stats.win_rate(Player::Two),
            draw_rate = stats.draw_rate(),
            avg_length = stats.average_game_length(),
            "arena complete"
        );

        Ok(ArenaReport {
            player_one: one.name().to_string(),
            player_two: two.name().to_string(),
            stats,
            games,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyAgent, MinimaxAgent, RandomAgent};
    use crate::error::SearchError;

    /// Always plays column 0, which eventually overflows.
    struct StubbornAgent;

    impl Agent for StubbornAgent {
        fn select_action(&mut self, _state: &GameState) -> Result<usize, SearchError> {
            Ok(0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn game_record_replays_to_outcome() {
        let mut one = GreedyAgent;
        let mut two = RandomAgent::seeded(3);
        let record = play_game(&mut one, &mut two, Player::Two).unwrap();

        let mut state = GameState::initial(Player::Two);
        for &col in &record.moves {
            state.apply_move_mut(col).unwrap();
        }
        assert!(state.is_terminal());
        assert_eq!(state.outcome().winner(), record.winner);
        assert_eq!(record.win_line.is_some(), record.winner.is_some());
    }

    #[test]
    fn illegal_action_aborts_game() {
        let mut one = StubbornAgent;
        let mut two = StubbornAgent;
        // Column 0 fills with alternating pieces, so nobody wins there and the
        // seventh request is illegal.
        let err = play_game(&mut one, &mut two, Player::One).unwrap_err();
        match err {
            ArenaError::IllegalAction { action, legal, .. } => {
                assert_eq!(action, 0);
                assert_eq!(legal, vec![1, 2, 3, 4, 5, 6]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn alternating_first_player() {
        let mut arena = Arena::new(ArenaConfig {
            games: 4,
            random_first: false,
            seed: Some(1),
        });
        let mut one = GreedyAgent;
        let mut two = GreedyAgent;
        let report = arena.run(&mut one, &mut two).unwrap();
        let firsts: Vec<Player> = report.games.iter().map(|g| g.first).collect();
        assert_eq!(firsts, vec![Player::One, Player::Two, Player::One, Player::Two]);
        assert_eq!(report.stats.games, 4);
    }

    #[test]
    fn seeded_arena_is_reproducible() {
        let config = ArenaConfig {
            games: 3,
            random_first: true,
            seed: Some(99),
        };
        let run = |config: ArenaConfig| {
            let mut one = RandomAgent::seeded(5);
            let mut two = GreedyAgent;
            Arena::new(config).run(&mut one, &mut two).unwrap().games
        };
        assert_eq!(run(config.clone()), run(config));
    }

    #[test]
    fn minimax_beats_greedy_more_often_than_not() {
        let mut arena = Arena::new(ArenaConfig {
            games: 4,
            random_first: false,
            seed: Some(0),
        });
        let mut one = MinimaxAgent::new(4);
        let mut two = GreedyAgent;
        let report = arena.run(&mut one, &mut two).unwrap();
        assert_eq!(report.player_one, "Minimax");
        assert_eq!(report.player_two, "Greedy");
        assert!(report.stats.player_one_wins > report.stats.player_two_wins);
    }
}
