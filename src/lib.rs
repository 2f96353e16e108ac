//! # Minimax Connect Four
//!
//! A Connect Four engine: gravity board, four-in-a-row detection, a window
//! heuristic, and a depth-bounded minimax search with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, win detection, game state
//! - [`ai`] — Heuristic evaluation, minimax search, greedy and random agents
//! - [`arena`] — Headless matches between agents and their statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
