use crate::game::Player;

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub game_length: usize,
}

/// Aggregate statistics over a series of games.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct MatchStats {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        self.games += 1;
        self.total_moves += result.game_length;
        match result.winner {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        };
        wins as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let stats = MatchStats::new();
        assert_eq!(stats.win_rate(Player::One), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }

    #[test]
    fn rates_and_lengths() {
        let mut stats = MatchStats::new();
        stats.record(GameResult {
            winner: Some(Player::One),
            game_length: 7,
        });
        stats.record(GameResult {
            winner: Some(Player::One),
            game_length: 11,
        });
        stats.record(GameResult {
            winner: Some(Player::Two),
            game_length: 20,
        });
        stats.record(GameResult {
            winner: None,
            game_length: 42,
        });

        assert_eq!(stats.games, 4);
        assert!((stats.win_rate(Player::One) - 0.5).abs() < 1e-6);
        assert!((stats.win_rate(Player::Two) - 0.25).abs() < 1e-6);
        assert!((stats.draw_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 20.0).abs() < 1e-6);
    }
}
