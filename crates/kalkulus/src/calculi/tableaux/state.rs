//! Proof state of the clause tableaux calculus

use super::moves::TableauxMove;
use super::TableauxParam;
use crate::error::{KalkulusError, Result};
use crate::logic::{ClauseSet, Literal};
use crate::seal::ProtectedState;
use serde::{Deserialize, Serialize};

/// Connectedness condition enforced on expansions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableauxType {
    #[default]
    Unconnected,
    WeaklyConnected,
    StronglyConnected,
}

/// A node of the proof tree. Node 0 is the root and carries no literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauxNode {
    pub parent: Option<usize>,
    pub spelling: String,
    pub negated: bool,
    pub is_closed: bool,
    /// Ancestor this leaf was closed against
    pub close_ref: Option<usize>,
    pub children: Vec<usize>,
}

impl TableauxNode {
    pub fn new(parent: Option<usize>, spelling: String, negated: bool) -> Self {
        TableauxNode {
            parent,
            spelling,
            negated,
            is_closed: false,
            close_ref: None,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        TableauxNode::new(None, "true".into(), false)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check whether the node carries the given literal
    pub fn carries(&self, literal: &Literal<String>) -> bool {
        self.spelling == literal.lit && self.negated == literal.negated
    }

    /// Check whether the two nodes carry complementary literals
    pub fn is_complement_of(&self, other: &TableauxNode) -> bool {
        self.spelling == other.spelling && self.negated != other.negated
    }

    fn info(&self) -> String {
        let children: Vec<String> = self.children.iter().map(usize::to_string).collect();
        format!(
            "({:?};{:?};{};{};{:?};[{}])",
            self.parent,
            self.spelling,
            self.negated,
            self.is_closed,
            self.close_ref,
            children.join(",")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableauxState {
    pub clause_set: ClauseSet<String>,
    pub formula: String,
    #[serde(rename = "type")]
    pub tableaux_type: TableauxType,
    pub regular: bool,
    pub backtracking: bool,
    pub nodes: Vec<TableauxNode>,
    pub move_history: Vec<TableauxMove>,
    pub used_backtracking: bool,
    #[serde(default)]
    pub seal: String,
}

impl TableauxState {
    pub fn new(clause_set: ClauseSet<String>, formula: &str, params: TableauxParam) -> Self {
        TableauxState {
            clause_set,
            formula: formula.to_string(),
            tableaux_type: params.tableaux_type,
            regular: params.regular,
            backtracking: params.backtracking,
            nodes: vec![TableauxNode::root()],
            move_history: Vec::new(),
            used_backtracking: false,
            seal: String::new(),
        }
    }

    /// Look up a node, rejecting unknown IDs as an illegal move
    pub fn node(&self, id: usize) -> Result<&TableauxNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| KalkulusError::illegal(format!("Node with ID {} does not exist", id)))
    }

    pub(super) fn node_mut(&mut self, id: usize) -> Result<&mut TableauxNode> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| KalkulusError::illegal(format!("Node with ID {} does not exist", id)))
    }

    /// IDs from `id` up to, but excluding, the root
    pub fn branch(&self, id: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            match self.nodes.get(i) {
                Some(node) if node.parent.is_some() => {
                    path.push(i);
                    current = node.parent;
                }
                _ => break,
            }
        }
        path
    }

    /// Check whether `ancestor` lies strictly above `id`
    pub fn is_ancestor(&self, ancestor: usize, id: usize) -> bool {
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(i) = current {
            if i == ancestor {
                return true;
            }
            current = self.nodes.get(i).and_then(|n| n.parent);
        }
        false
    }

    /// Reject trees whose links are inconsistent.
    ///
    /// Every non-root node must hang below an earlier node that lists it as a
    /// child, so each ancestor walk strictly decreases and terminates.
    pub fn check_structure(&self) -> Result<()> {
        let malformed = |detail: String| {
            tracing::warn!(%detail, "rejected malformed proof tree");
            KalkulusError::TamperedState(format!("malformed proof tree: {}", detail))
        };
        match self.nodes.first() {
            Some(root) if root.parent.is_none() => {}
            _ => return Err(malformed("node 0 is not a root".into())),
        }
        for (id, node) in self.nodes.iter().enumerate() {
            if id > 0 {
                let linked = match node.parent {
                    Some(p) if p < id => self
                        .nodes
                        .get(p)
                        .map_or(false, |parent| parent.children.contains(&id)),
                    _ => false,
                };
                if !linked {
                    return Err(malformed(format!("node {} has an invalid parent", id)));
                }
            }
            if let Some(&c) = node
                .children
                .iter()
                .find(|&&c| self.nodes.get(c).and_then(|child| child.parent) != Some(id))
            {
                return Err(malformed(format!("node {} lists foreign child {}", id, c)));
            }
            if node.close_ref.map_or(false, |r| r >= self.nodes.len()) {
                return Err(malformed(format!("node {} closes against a missing node", id)));
            }
        }
        Ok(())
    }

    /// First inner node (other than the root) with no child closed against it
    pub fn unconnected_inner_node(&self) -> Option<usize> {
        (1..self.nodes.len()).find(|&id| {
            self.nodes.get(id).map_or(false, |node| {
                !node.is_leaf()
                    && !node.children.iter().any(|&c| {
                        self.nodes
                            .get(c)
                            .map_or(false, |child| child.is_closed && child.close_ref == Some(id))
                    })
            })
        })
    }

    /// Mark ancestors closed as long as all of their children are
    pub(super) fn propagate_closure(&mut self, from: usize) {
        let mut current = self.nodes.get(from).and_then(|n| n.parent);
        while let Some(id) = current {
            let all_closed = self.nodes.get(id).map_or(false, |node| {
                node.children
                    .iter()
                    .all(|&c| self.nodes.get(c).map_or(false, |child| child.is_closed))
            });
            if !all_closed {
                break;
            }
            match self.nodes.get_mut(id) {
                Some(node) => {
                    node.is_closed = true;
                    current = node.parent;
                }
                None => break,
            }
        }
    }

    /// Reopen every ancestor of `from`
    pub(super) fn reopen_ancestors(&mut self, from: usize) {
        let mut current = self.nodes.get(from).and_then(|n| n.parent);
        while let Some(id) = current {
            match self.nodes.get_mut(id) {
                Some(node) => {
                    node.is_closed = false;
                    current = node.parent;
                }
                None => break,
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.nodes.first().map_or(false, |root| root.is_closed)
    }
}

impl ProtectedState for TableauxState {
    fn info(&self) -> String {
        let nodes: Vec<String> = self.nodes.iter().map(TableauxNode::info).collect();
        let history: Vec<String> = self.move_history.iter().map(|m| m.to_string()).collect();
        format!(
            "tableaux|{:?}|{}|{}|{}|{:?}|{}|[{}]|[{}]",
            self.tableaux_type,
            self.regular,
            self.backtracking,
            self.used_backtracking,
            self.formula,
            self.clause_set.basis(),
            nodes.join(","),
            history.join(",")
        )
    }

    fn seal(&self) -> &str {
        &self.seal
    }

    fn set_seal(&mut self, seal: String) {
        self.seal = seal;
    }
}
