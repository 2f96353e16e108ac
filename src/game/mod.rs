//! Core Connect Four game logic: board representation, player types, win
//! detection and the game state wrapper.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::GameState;
pub use win::{find_win, is_terminal, GameOutcome, WinLine};
