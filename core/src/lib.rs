pub mod game_state;
pub mod scripted;
pub mod types;

pub use game_state::GameState;
pub use scripted::{NodeId, ScriptedError, ScriptedGame, ScriptedMove, TreeBuilder};
pub use types::*;
