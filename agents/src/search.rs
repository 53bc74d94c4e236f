//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The searching side's choices are made by [`maximize`] and the opponent's
//! replies by [`minimize`]; the two call each other, so plies alternate by
//! call structure rather than by asking the state whose turn it is. Scores
//! are always taken from one fixed perspective, never sign-flipped.
//!
//! Every child is searched on its own clone of the parent state, so the
//! caller's state is never modified.
use crate::evaluation::evaluate;
use log::{debug, trace};
use tablut_core::{GameState, Side, Winner};
use thiserror::Error;

pub type Utility = i32;

/// Forced win for the searching side.
pub const WIN: Utility = Utility::MAX;
/// Forced loss (or draw) for the searching side.
pub const LOSS: Utility = Utility::MIN;

/// Plies searched below each root move.
pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched after the root move, starting with the opponent's reply.
    pub depth: u8,
    /// Cut off subtrees that cannot change the result. Turning this off
    /// visits every node but returns the same scores.
    pub alpha_beta: bool,
}

impl SearchConfig {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Same depth, without pruning.
    pub fn exhaustive(self) -> Self {
        Self {
            alpha_beta: false,
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// Value of `best_move` from the searching side's perspective.
    pub score: Utility,
    pub depth: u8,
    /// Search nodes entered, root moves excluded.
    pub nodes: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<E> {
    #[error("no legal moves to choose from")]
    NoLegalMoves,
    #[error("failed to apply move: {0}")]
    Apply(#[source] E),
}

/// Per-search bookkeeping. Alpha, beta and depth travel by value through
/// the recursion; only the node counter is accumulated here.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    perspective: Side,
    alpha_beta: bool,
    nodes: u64,
}

impl SearchInfo {
    pub fn new(perspective: Side) -> Self {
        Self {
            perspective,
            alpha_beta: true,
            nodes: 0,
        }
    }

    pub fn with_pruning(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    pub fn perspective(&self) -> Side {
        self.perspective
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Decides whether the search stops at `state`.
///
/// Returns `Some(WIN)` or `Some(LOSS)` once the game is decided (a draw
/// counts as a loss), the heuristic value when `depth` is exhausted, and
/// `None` when the search should keep going.
pub fn terminal_test<S: GameState>(state: &S, depth: u8, perspective: Side) -> Option<Utility> {
    match state.winner() {
        Winner::Nobody => {}
        winner if winner.is_won_by(perspective) => return Some(WIN),
        _ => return Some(LOSS),
    }

    if depth == 0 {
        Some(evaluate(state, perspective))
    } else {
        None
    }
}

/// Best value the searching side can force from `state`.
///
/// A non-terminal state with no legal moves scores [`LOSS`].
pub fn maximize<S: GameState>(
    state: &S,
    depth: u8,
    mut alpha: Utility,
    beta: Utility,
    info: &mut SearchInfo,
) -> Result<Utility, S::Error> {
    info.nodes += 1;

    if let Some(value) = terminal_test(state, depth, info.perspective) {
        return Ok(value);
    }

    let mut best = LOSS;
    for mv in state.legal_moves() {
        let child = state.successor(&mv)?;
        best = best.max(minimize(&child, depth - 1, alpha, beta, info)?);
        alpha = alpha.max(best);

        if info.alpha_beta && beta <= alpha {
            break;
        }
    }

    Ok(best)
}

/// Worst value the opponent can force on the searching side from `state`.
///
/// A non-terminal state with no legal moves scores [`WIN`].
pub fn minimize<S: GameState>(
    state: &S,
    depth: u8,
    alpha: Utility,
    mut beta: Utility,
    info: &mut SearchInfo,
) -> Result<Utility, S::Error> {
    info.nodes += 1;

    if let Some(value) = terminal_test(state, depth, info.perspective) {
        return Ok(value);
    }

    let mut best = WIN;
    for mv in state.legal_moves() {
        let child = state.successor(&mv)?;
        best = best.min(maximize(&child, depth - 1, alpha, beta, info)?);
        beta = beta.min(best);

        if info.alpha_beta && beta <= alpha {
            break;
        }
    }

    Ok(best)
}

/// Picks the move with the highest minimax value for `perspective`.
///
/// Each root move is searched with a fresh, full window, so root siblings
/// never prune one another. On equal scores the earliest move wins.
pub fn search<S: GameState>(
    state: &S,
    perspective: Side,
    config: SearchConfig,
) -> Result<SearchResult<S::Move>, SearchError<S::Error>> {
    let mut info = SearchInfo::new(perspective).with_pruning(config.alpha_beta);
    let mut best: Option<(S::Move, Utility)> = None;

    for mv in state.legal_moves() {
        let child = state.successor(&mv).map_err(SearchError::Apply)?;
        let score =
            minimize(&child, config.depth, LOSS, WIN, &mut info).map_err(SearchError::Apply)?;
        trace!("{perspective}: root move {mv:?} scored {score}");

        let improves = best
            .as_ref()
            .map_or(true, |(_, best_score)| score > *best_score);
        if improves {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best.ok_or(SearchError::NoLegalMoves)?;
    debug!(
        "{perspective}: chose {best_move:?} (score {score}, depth {}, {} nodes)",
        config.depth, info.nodes
    );

    Ok(SearchResult {
        best_move,
        score,
        depth: config.depth,
        nodes: info.nodes,
    })
}

/// Returns the best move for `perspective` searching `depth` plies below
/// each root move.
pub fn select_move<S: GameState>(
    state: &S,
    perspective: Side,
    depth: u8,
) -> Result<S::Move, SearchError<S::Error>> {
    search(state, perspective, SearchConfig::depth(depth)).map(|result| result.best_move)
}
