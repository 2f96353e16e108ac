use std::fmt;

use super::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};

/// Move-selection strategy, from strongest to weakest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-bounded minimax with alpha-beta pruning.
    #[default]
    Minimax,
    /// One-ply heuristic picker.
    Greedy,
    /// Uniformly random legal column.
    Random,
}

impl Strategy {
    /// Build an agent for this strategy. `depth` and `pruning` only apply to
    /// minimax; `seed` only to random.
    pub fn build(self, depth: usize, pruning: bool, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Strategy::Minimax => Box::new(MinimaxAgent::new(depth).with_pruning(pruning)),
            Strategy::Greedy => Box::new(GreedyAgent),
            Strategy::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::Greedy => "greedy",
            Strategy::Random => "random",
        };
        f.write_str(name)
    }
}
