//! MCTS node and edge structures.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Edges hold
//! the index of an action in the decision's action list rather than the
//! action itself, since actions address cards by position and are only
//! meaningful against the state they were generated from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Index into the MctsTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Edge for one action of a node's decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Position of the action in the decision's action list.
    pub action_index: usize,

    /// Child node (NONE if not yet expanded).
    pub child: NodeId,

    /// Visit count for this action.
    pub visits: u32,

    /// Total reward accumulated for this action, from the root player's view.
    pub total_reward: f64,
}

impl Edge {
    #[must_use]
    pub fn new(action_index: usize) -> Self {
        Self {
            action_index,
            child: NodeId::NONE,
            visits: 0,
            total_reward: 0.0,
        }
    }

    /// Mean reward, 0 when unvisited.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// Check if this edge has been expanded (child exists).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A node in the MCTS tree.
///
/// A node stands for the position after its parent edge's action. Its edges
/// are created the first time the search reaches it, from the open decision
/// found there; a node with no open decision is terminal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Index of the edge from parent that led to this node.
    pub parent_edge_idx: usize,

    /// Player deciding at this node, once known.
    pub player: Option<PlayerId>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// The game was over on reaching this node.
    pub is_terminal: bool,

    /// One edge per action of the node's decision.
    pub edges: SmallVec<[Edge; 8]>,
}

impl MctsNode {
    #[must_use]
    pub fn new(parent: NodeId, parent_edge_idx: usize, depth: u16) -> Self {
        Self {
            parent,
            parent_edge_idx,
            player: None,
            depth,
            visits: 0,
            is_terminal: false,
            edges: SmallVec::new(),
        }
    }

    /// Create a root node deciding for `player`.
    #[must_use]
    pub fn root(player: PlayerId) -> Self {
        let mut node = Self::new(NodeId::NONE, 0, 0);
        node.player = Some(player);
        node
    }

    /// Create one fresh edge per action.
    pub fn init_edges(&mut self, player: PlayerId, action_count: usize) {
        self.player = Some(player);
        self.edges = (0..action_count).map(Edge::new).collect();
    }

    /// Check if all edges have been expanded.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        !self.edges.is_empty() && self.edges.iter().all(|e| e.is_expanded())
    }

    /// Check if any edges are unexpanded.
    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.edges.iter().any(|e| !e.is_expanded())
    }

    /// Get indices of unexpanded edges.
    pub fn unexpanded_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_expanded())
            .map(|(i, _)| i)
    }

    /// Index of the most visited edge; the first one on ties.
    #[must_use]
    pub fn most_visited_edge(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, edge) in self.edges.iter().enumerate() {
            if best.map_or(true, |b| edge.visits > self.edges[b].visits) {
                best = Some(index);
            }
        }
        best
    }
}
