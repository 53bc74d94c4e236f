use crate::{
    search::{search, SearchConfig, SearchError},
    Agent,
};
use log::{error, warn};
use tablut_core::{GameState, Side};

/// Plays one side using fixed-depth alpha-beta search.
pub struct MinimaxAgent {
    name: String,
    side: Side,
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(side: Side) -> Self {
        Self::with_config(side, SearchConfig::default())
    }

    pub fn with_depth(side: Side, depth: u8) -> Self {
        Self::with_config(side, SearchConfig::depth(depth))
    }

    pub fn with_config(side: Side, config: SearchConfig) -> Self {
        MinimaxAgent {
            name: format!("Minimax({}, depth={})", side, config.depth),
            side,
            config,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Like [`Agent::best_move`], but hands search failures to the caller.
    pub fn choose<S: GameState>(&self, state: &S) -> Result<S::Move, SearchError<S::Error>> {
        search(state, self.side, self.config).map(|result| result.best_move)
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    fn best_move(&mut self, state: &S) -> Option<S::Move> {
        match self.choose(state) {
            Ok(mv) => Some(mv),
            Err(SearchError::NoLegalMoves) => {
                warn!("{}: asked to move with no legal moves", self.name);
                None
            }
            Err(err) => {
                error!("{}: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomAgent;
    use tablut_core::{ScriptedGame, ScriptedMove, TreeBuilder, Winner};

    /// Defender to move. Move 1 lets the attacker capture the king; move 0
    /// leaves the king an escape on the following turn whatever the reply.
    fn escape_race() -> ScriptedGame {
        let mut builder = TreeBuilder::new();
        let root = builder.root();

        let safe = builder.child(root, 0);
        for reply in 0..2 {
            let after = builder.child(safe, reply);
            builder.pieces(after, Side::Defender, 8);
            let escape = builder.child(after, 0);
            builder.winner(escape, Winner::Won(Side::Defender));
        }

        let blunder = builder.child(root, 1);
        builder.pieces(blunder, Side::Attacker, 15);
        let capture = builder.child(blunder, 0);
        builder.winner(capture, Winner::Won(Side::Attacker));

        builder.build()
    }

    #[test]
    fn test_name_reflects_configuration() {
        let agent = MinimaxAgent::new(Side::Defender);
        assert_eq!(Agent::<ScriptedGame>::name(&agent), "Minimax(defender, depth=2)");
        assert_eq!(agent.config(), SearchConfig::default());

        let agent = MinimaxAgent::with_depth(Side::Attacker, 4);
        assert_eq!(Agent::<ScriptedGame>::name(&agent), "Minimax(attacker, depth=4)");
        assert_eq!(agent.side(), Side::Attacker);
    }

    #[test]
    fn test_avoids_losing_move() {
        let mut agent = MinimaxAgent::new(Side::Defender);
        assert_eq!(agent.best_move(&escape_race()), Some(ScriptedMove(0)));
    }

    #[test]
    fn test_wins_against_random_opponent() {
        let mut players: [Box<dyn Agent<ScriptedGame>>; 2] = [
            Box::new(MinimaxAgent::new(Side::Defender)),
            Box::new(RandomAgent::with_seed(3)),
        ];
        let mut state = escape_race();
        let mut turn = 0;

        while !state.winner().is_decided() {
            let mv = players[turn % 2]
                .best_move(&state)
                .expect("undecided positions have moves");
            state.apply(&mv).unwrap();
            turn += 1;
        }

        assert_eq!(state.winner(), Winner::Won(Side::Defender));
        assert_eq!(turn, 3);
    }

    #[test]
    fn test_no_moves_yields_none() {
        let mut agent = MinimaxAgent::new(Side::Attacker);
        let state = TreeBuilder::new().build();
        assert_eq!(agent.best_move(&state), None);
        assert!(matches!(agent.choose(&state), Err(SearchError::NoLegalMoves)));
    }
}
