pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use tablut_core::GameState;

/// Core trait for game-playing agents
pub trait Agent<S: GameState> {
    /// Get the move to play in the current position, or `None` if there is none
    fn best_move(&mut self, state: &S) -> Option<S::Move>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use evaluation::*;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::*;
