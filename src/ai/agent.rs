use crate::error::SearchError;
use crate::game::GameState;

/// Universal interface for move-selecting players.
pub trait Agent {
    /// Select a column for the side to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
