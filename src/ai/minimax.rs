use std::time::Instant;

use crate::error::SearchError;
use crate::game::{find_win, is_terminal, Board, Cell, GameState, Player};

use super::agent::Agent;
use super::evaluate::{score_position, Heuristic, WindowHeuristic};

/// Score of a position the engine has already won.
pub const ENGINE_WIN: i64 = 100_000_000_000_000;
/// Magnitude of the score of a position the opponent has already won.
pub const OPPONENT_WIN: i64 = 10_000_000_000_000;

pub const DEFAULT_DEPTH: usize = 5;

/// Column chosen by a search call together with its minimax value.
///
/// `column` is `None` only for leaves (terminal or depth-limited nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Depth-bounded minimax with alpha-beta pruning.
///
/// The engine is always the maximizer. Every child is explored on its own
/// copy of the board.
pub struct MinimaxSearch {
    engine: Player,
    heuristic: Box<dyn Heuristic>,
    pruning: bool,
    nodes: u64,
}

impl MinimaxSearch {
    pub fn new(engine: Player) -> Self {
        MinimaxSearch::with_heuristic(engine, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(engine: Player, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearch {
            engine,
            heuristic,
            pruning: true,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta cutoffs. Results are identical either
    /// way; only the number of visited nodes changes.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn engine(&self) -> Player {
        self.engine
    }

    pub fn set_engine(&mut self, engine: Player) {
        self.engine = engine;
    }

    /// Nodes visited since the last [`MinimaxSearch::choose_move`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the engine's column for `board`, searching `depth` plies.
    pub fn choose_move(&mut self, board: &Board, depth: usize) -> Result<usize, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if board.valid_columns().is_empty() {
            return Err(SearchError::NoValidColumns);
        }
        if is_terminal(board) {
            return Err(SearchError::GameOver);
        }

        self.nodes = 0;
        let start = Instant::now();
        let result = self.search(board, depth, i64::MIN, i64::MAX, true);
        let column = result.column.ok_or(SearchError::GameOver)?;

        tracing::debug!(
            engine = self.engine.name(),
            column,
            score = result.score,
            depth,
            nodes = self.nodes,
            elapsed_us = start.elapsed().as_micros() as u64,
            "minimax move chosen"
        );
        Ok(column)
    }

    /// Minimax value of `board` with `maximizing` telling whose turn it is.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        let engine_cell = self.engine.to_cell();
        let opponent_cell = self.engine.other().to_cell();

        if find_win(board, engine_cell).is_some() {
            return SearchResult::leaf(ENGINE_WIN);
        }
        if find_win(board, opponent_cell).is_some() {
            return SearchResult::leaf(-OPPONENT_WIN);
        }
        let valid = board.valid_columns();
        if valid.is_empty() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.engine));
        }

        // Forced wins all score ENGINE_WIN; take one that is on the board now.
        if maximizing {
            if let Some(col) = winning_column(board, &valid, engine_cell) {
                return SearchResult {
                    column: Some(col),
                    score: ENGINE_WIN,
                };
            }
        }

        let piece = if maximizing { engine_cell } else { opponent_cell };
        let mut best: Option<SearchResult> = None;

        for col in valid {
            let mut child = *board;
            // `valid_columns` guarantees an open row.
            let Ok(Some(row)) = child.next_open_row(col) else {
                continue;
            };
            child.place(row, col, piece);

            let score = self.search(&child, depth - 1, alpha, beta, !maximizing).score;
            let improves = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if improves {
                best = Some(SearchResult {
                    column: Some(col),
                    score,
                });
            }

            if !self.pruning {
                continue;
            }
            // `best` is always set after the first child.
            let best_score = best.map_or(score, |b| b.score);
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                break;
            }
        }

        best.unwrap_or(SearchResult::leaf(0))
    }
}

/// First column in `valid` where dropping `cell` completes a line.
fn winning_column(board: &Board, valid: &[usize], cell: Cell) -> Option<usize> {
    valid.iter().copied().find(|&col| {
        let mut child = *board;
        match child.next_open_row(col) {
            Ok(Some(row)) => {
                child.place(row, col, cell);
                find_win(&child, cell).is_some()
            }
            _ => false,
        }
    })
}

/// One-ply picker: the column whose resulting position scores highest for
/// `player`, leftmost on ties.
pub fn greedy_move(board: &Board, player: Player) -> Result<usize, SearchError> {
    let mut best: Option<(usize, i32)> = None;

    for col in board.valid_columns() {
        let mut child = *board;
        let Ok(Some(row)) = child.next_open_row(col) else {
            continue;
        };
        child.place(row, col, player.to_cell());
        let score = score_position(&child, player);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((col, score));
        }
    }

    best.map(|(col, _)| col).ok_or(SearchError::NoValidColumns)
}

/// Minimax agent playing as whichever side is to move.
pub struct MinimaxAgent {
    depth: usize,
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            search: MinimaxSearch::new(Player::Two),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            search: MinimaxSearch::with_heuristic(Player::Two, heuristic),
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.search = self.search.with_pruning(pruning);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }
        self.search.set_engine(state.current_player());
        self.search.choose_move(state.board(), self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Agent wrapping [`greedy_move`].
#[derive(Debug, Default)]
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }
        greedy_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
