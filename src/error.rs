use std::path::PathBuf;

/// Errors raised by board operations when a caller breaks a precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is out of range (expected 0..=6)")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors raised when applying a move to a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised when asking an engine for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no valid columns remain")]
    NoValidColumns,

    #[error("position is already decided")]
    GameOver,

    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Errors that can occur while running arena matches.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} failed to select a move: {source}")]
    Search {
        agent: String,
        source: SearchError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::ColumnOutOfRange { column: 9 };
        assert_eq!(err.to_string(), "column 9 is out of range (expected 0..=6)");
        let err = BoardError::ColumnFull { column: 2 };
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_move_error_wraps_board_error() {
        let err: MoveError = BoardError::ColumnFull { column: 4 }.into();
        assert_eq!(err, MoveError::Board(BoardError::ColumnFull { column: 4 }));
        assert_eq!(err.to_string(), "column 4 is full");
    }

    #[test]
    fn test_arena_error_display() {
        let err = ArenaError::IllegalAction {
            agent: "Greedy".to_string(),
            action: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Greedy selected illegal action 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.depth must be >= 1"
        );
    }
}
