//! Move selection: heuristic evaluation, minimax search with alpha-beta
//! pruning, the one-ply greedy picker, and the agents wrapping them.

mod agent;
pub mod evaluate;
pub mod minimax;
mod random;
mod strategy;

pub use agent::Agent;
pub use evaluate::{score_position, score_window, Heuristic, WindowHeuristic};
pub use minimax::{
    greedy_move, GreedyAgent, MinimaxAgent, MinimaxSearch, SearchResult, DEFAULT_DEPTH,
    ENGINE_WIN, OPPONENT_WIN,
};
pub use random::RandomAgent;
pub use strategy::Strategy;
