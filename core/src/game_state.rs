//! The contract a game implementation fulfils so agents can search it.
//!
//! Board layout, capture rules and escape detection all live behind this
//! trait. Agents only ever clone a state, apply moves to their own clones
//! and query the outcome and piece counts.
use crate::types::{Side, Winner};
use std::fmt::Debug;

/// A complete, independently owned game position.
///
/// `Clone` must produce a deep copy: applying a move to the clone never
/// changes the original.
pub trait GameState: Clone {
    /// An action valid for the state it was enumerated from.
    type Move: Clone + Debug + PartialEq;
    /// Failure reported when a move cannot be applied.
    type Error: std::error::Error;

    /// Plays `mv` in place. `mv` must be legal for this state.
    fn apply(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// All legal moves for the side to move, in a stable order.
    /// Empty only when the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn winner(&self) -> Winner;

    /// Live pieces `side` still has on the board.
    fn piece_count(&self, side: Side) -> u32;

    /// Returns a copy with `mv` applied, leaving `self` untouched.
    fn successor(&self, mv: &Self::Move) -> Result<Self, Self::Error> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }
}
