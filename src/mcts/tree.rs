//! Search tree storage.
//!
//! Nodes live in one `Vec` and point at each other by [`NodeId`]. The tree
//! is thrown away and rebuilt for every decision, so it only ever grows.

use serde::{Deserialize, Serialize};

use super::node::{MctsNode, NodeId};
use crate::core::PlayerId;

/// Arena of search nodes; node 0 is the root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
}

impl MctsTree {
    #[must_use]
    pub fn new(root_player: PlayerId) -> Self {
        Self::with_capacity(root_player, 1024)
    }

    #[must_use]
    pub fn with_capacity(root_player: PlayerId, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(MctsNode::root(root_player));
        Self { nodes }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn root_node(&self) -> &MctsNode {
        self.get(self.root())
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node and start over from a fresh root.
    pub fn reset(&mut self, root_player: PlayerId) {
        self.nodes.clear();
        self.nodes.push(MctsNode::root(root_player));
    }

    /// Hang a child under edge `edge_idx` of `parent`.
    ///
    /// `decision` is the owner and option count of the position behind the
    /// edge, or `None` when the game is over there.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        edge_idx: usize,
        decision: Option<(PlayerId, usize)>,
    ) -> NodeId {
        let depth = self.get(parent).depth + 1;
        let mut node = MctsNode::new(parent, edge_idx, depth);
        match decision {
            Some((player, options)) => node.init_edges(player, options),
            None => node.is_terminal = true,
        }

        let child = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        self.get_mut(parent).edges[edge_idx].child = child;
        child
    }

    /// Credit `reward` to `leaf`, every ancestor, and the edges between them.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            let parent = node.parent;
            let edge_idx = node.parent_edge_idx;
            if !parent.is_none() {
                let edge = &mut self.get_mut(parent).edges[edge_idx];
                edge.visits += 1;
                edge.total_reward += reward;
            }
            current = parent;
        }
    }

    /// Action indices along the most visited path from the root.
    #[must_use]
    pub fn principal_line(&self) -> Vec<usize> {
        let mut line = Vec::new();
        let mut node = self.root_node();
        while let Some(edge_idx) = node.most_visited_edge() {
            let edge = &node.edges[edge_idx];
            line.push(edge.action_index);
            if edge.child.is_none() {
                break;
            }
            node = self.get(edge.child);
        }
        line
    }

    /// Shape of the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        for node in &self.nodes {
            stats.max_depth = stats.max_depth.max(node.depth);
            stats.terminal_count += usize::from(node.is_terminal);
            stats.total_edges += node.edges.len();
            stats.expanded_edges += node.edges.iter().filter(|e| e.is_expanded()).count();
        }
        stats
    }
}

/// Shape of a search tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeStats {
    pub node_count: usize,
    pub max_depth: u16,
    /// Nodes where the game is over.
    pub terminal_count: usize,
    pub total_edges: usize,
    /// Edges with a child node.
    pub expanded_edges: usize,
}

impl TreeStats {
    /// Average options per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_edges as f64 / self.node_count as f64
        }
    }

    /// Share of edges that have been tried.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        if self.total_edges == 0 {
            0.0
        } else {
            self.expanded_edges as f64 / self.total_edges as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root with two options; option 0 leads to a P2 decision with three.
    fn small_tree() -> (MctsTree, NodeId) {
        let mut tree = MctsTree::new(PlayerId::ZERO);
        let root = tree.root();
        tree.get_mut(root).init_edges(PlayerId::ZERO, 2);
        let child = tree.add_child(root, 0, Some((PlayerId::ONE, 3)));
        (tree, child)
    }

    #[test]
    fn test_fresh_tree_has_root() {
        let tree = MctsTree::new(PlayerId::ONE);

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root_node().player, Some(PlayerId::ONE));
        assert!(tree.root_node().parent.is_none());
    }

    #[test]
    fn test_add_child_links_edge() {
        let (mut tree, child) = small_tree();
        let root = tree.root();

        assert_eq!(child, NodeId::new(1));
        assert_eq!(tree.get(root).edges[0].child, child);
        assert_eq!(tree.get(child).depth, 1);
        assert_eq!(tree.get(child).edges.len(), 3);

        let end = tree.add_child(root, 1, None);
        assert!(tree.get(end).is_terminal);
        assert!(tree.get(end).edges.is_empty());
    }

    #[test]
    fn test_backpropagate_updates_path() {
        let (mut tree, child) = small_tree();
        let grandchild = tree.add_child(child, 2, None);

        tree.backpropagate(grandchild, 1.0);
        tree.backpropagate(child, -1.0);

        assert_eq!(tree.root_node().visits, 2);
        assert_eq!(tree.root_node().edges[0].visits, 2);
        assert_eq!(tree.root_node().edges[0].total_reward, 0.0);
        assert_eq!(tree.get(child).visits, 2);
        assert_eq!(tree.get(child).edges[2].visits, 1);
        assert_eq!(tree.get(child).edges[2].total_reward, 1.0);
        assert_eq!(tree.root_node().edges[1].visits, 0);
    }

    #[test]
    fn test_principal_line_follows_visits() {
        let (mut tree, child) = small_tree();
        let grandchild = tree.add_child(child, 2, None);
        tree.backpropagate(grandchild, 1.0);
        tree.backpropagate(grandchild, 1.0);

        assert_eq!(tree.principal_line(), vec![0, 2]);
    }

    #[test]
    fn test_reset_drops_nodes() {
        let (mut tree, _) = small_tree();
        assert_eq!(tree.len(), 2);

        tree.reset(PlayerId::ONE);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().player, Some(PlayerId::ONE));
        assert!(tree.root_node().edges.is_empty());
    }

    #[test]
    fn test_stats() {
        let (mut tree, _) = small_tree();
        let root = tree.root();
        tree.add_child(root, 1, None);

        let stats = tree.stats();

        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.total_edges, 5);
        assert_eq!(stats.expanded_edges, 2);
        assert_eq!(stats.expansion_ratio(), 0.4);
        assert!((stats.branching_factor() - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_wide_decision_keeps_edge_indices() {
        // A large Darkness hand can offer more subsets than fit in 16 bits.
        let mut tree = MctsTree::new(PlayerId::ZERO);
        let root = tree.root();
        tree.get_mut(root).init_edges(PlayerId::ZERO, 70_000);
        let child = tree.add_child(root, 66_000, None);

        tree.backpropagate(child, 1.0);

        assert_eq!(tree.root_node().edges[69_999].action_index, 69_999);
        assert_eq!(tree.get(child).parent_edge_idx, 66_000);
        assert_eq!(tree.root_node().edges[66_000].visits, 1);
        assert_eq!(tree.root_node().edges[464].visits, 0);
        assert_eq!(tree.principal_line(), vec![66_000]);
    }
}
