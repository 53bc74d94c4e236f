//! Explicit game trees for exercising search code.
//!
//! A [`ScriptedGame`] walks a hand-built tree: every node records its own
//! outcome and piece counts, and its children are the legal moves in
//! insertion order. The tree itself is immutable and shared between clones,
//! so cloning only copies the cursor.
use crate::game_state::GameState;
use crate::types::{Side, Winner};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Index of a node inside a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge label leading from a node to one of its children.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScriptedMove(pub u32);

impl fmt::Display for ScriptedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptedError {
    #[error("move {mv} is not legal at node {node}")]
    IllegalMove { mv: ScriptedMove, node: NodeId },
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Node {
    winner: Winner,
    pieces: [u32; 2],
    children: Vec<(ScriptedMove, NodeId)>,
}

/// Incrementally builds a tree, starting from a root holding both full forces.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let root = Node {
            winner: Winner::Nobody,
            pieces: [
                Side::Attacker.starting_pieces(),
                Side::Defender.starting_pieces(),
            ],
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Adds a child reached from `parent` by the move labelled `label`.
    /// The child starts with the parent's piece counts and no winner.
    ///
    /// Labels should be unique among siblings; applying a duplicated label
    /// always follows the first child that carries it.
    pub fn child(&mut self, parent: NodeId, label: u32) -> NodeId {
        let id = NodeId(self.nodes.len());
        let pieces = self.nodes[parent.0].pieces;
        self.nodes.push(Node {
            winner: Winner::Nobody,
            pieces,
            children: Vec::new(),
        });
        self.nodes[parent.0]
            .children
            .push((ScriptedMove(label), id));
        id
    }

    pub fn winner(&mut self, node: NodeId, winner: Winner) -> &mut Self {
        self.nodes[node.0].winner = winner;
        self
    }

    pub fn pieces(&mut self, node: NodeId, side: Side, count: u32) -> &mut Self {
        self.nodes[node.0].pieces[side.index()] = count;
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freezes the tree and returns a game positioned at the root.
    pub fn build(self) -> ScriptedGame {
        ScriptedGame {
            tree: self.nodes.into(),
            cursor: NodeId::ROOT,
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A position inside a scripted tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptedGame {
    tree: Arc<[Node]>,
    cursor: NodeId,
}

impl ScriptedGame {
    /// Node the game currently sits on.
    pub fn position(&self) -> NodeId {
        self.cursor
    }

    /// Returns the same tree positioned at `node`.
    pub fn at(&self, node: NodeId) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            cursor: node,
        }
    }

    /// Total number of nodes in the tree.
    pub fn tree_size(&self) -> usize {
        self.tree.len()
    }

    fn node(&self) -> &Node {
        &self.tree[self.cursor.0]
    }
}

impl GameState for ScriptedGame {
    type Move = ScriptedMove;
    type Error = ScriptedError;

    fn apply(&mut self, mv: &ScriptedMove) -> Result<(), ScriptedError> {
        let next = self
            .node()
            .children
            .iter()
            .find(|(label, _)| label == mv)
            .map(|&(_, id)| id)
            .ok_or(ScriptedError::IllegalMove {
                mv: *mv,
                node: self.cursor,
            })?;
        self.cursor = next;
        Ok(())
    }

    fn legal_moves(&self) -> Vec<ScriptedMove> {
        self.node().children.iter().map(|&(mv, _)| mv).collect()
    }

    fn winner(&self) -> Winner {
        self.node().winner
    }

    fn piece_count(&self, side: Side) -> u32 {
        self.node().pieces[side.index()]
    }
}
