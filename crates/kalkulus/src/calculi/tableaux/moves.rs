//! Rule applications of the clause tableaux calculus

use super::state::{TableauxNode, TableauxState, TableauxType};
use crate::error::{KalkulusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TableauxMove {
    /// Append one child per literal of the clause below the leaf
    Expand { leaf: usize, clause: usize },
    /// Close the leaf against a complementary ancestor
    Close { leaf: usize, node: usize },
    /// Revert the last expansion or closure
    Undo,
}

impl fmt::Display for TableauxMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauxMove::Expand { leaf, clause } => write!(f, "expand({},{})", leaf, clause),
            TableauxMove::Close { leaf, node } => write!(f, "close({},{})", leaf, node),
            TableauxMove::Undo => write!(f, "undo"),
        }
    }
}

fn open_leaf(state: &TableauxState, id: usize) -> Result<&TableauxNode> {
    let node = state.node(id)?;
    if !node.is_leaf() {
        return Err(KalkulusError::illegal(format!("Node {} is not a leaf", id)));
    }
    if node.is_closed {
        return Err(KalkulusError::illegal(format!("Leaf {} is already closed", id)));
    }
    Ok(node)
}

pub fn apply_expand(
    mut state: TableauxState,
    leaf: usize,
    clause_id: usize,
) -> Result<TableauxState> {
    let leaf_node = open_leaf(&state, leaf)?.clone();
    let clause = state
        .clause_set
        .get(clause_id)
        .ok_or_else(|| {
            KalkulusError::illegal(format!("Clause with ID {} does not exist", clause_id))
        })?
        .clone();

    if state.tableaux_type == TableauxType::StronglyConnected {
        if let Some(open) = state.unconnected_inner_node() {
            return Err(KalkulusError::illegal(format!(
                "Node {} has no child closed against it, \
                 strong connectedness requires closing it before expanding further",
                open
            )));
        }
    }

    if state.regular {
        let branch = state.branch(leaf);
        if let Some(dup) = clause
            .iter()
            .find(|lit| {
                branch
                    .iter()
                    .any(|&id| state.nodes.get(id).map_or(false, |n| n.carries(lit)))
            })
        {
            return Err(KalkulusError::illegal(format!(
                "Expanding this clause would introduce a duplicate node '{}' on the branch, \
                 violating regularity",
                dup
            )));
        }
    }

    if state.tableaux_type != TableauxType::Unconnected && leaf != 0 {
        let connected = clause
            .iter()
            .any(|lit| lit.lit == leaf_node.spelling && lit.negated != leaf_node.negated);
        if !connected {
            return Err(KalkulusError::illegal(format!(
                "Expanding clause {} would violate connectedness: \
                 no literal is complementary to leaf {}",
                clause, leaf
            )));
        }
    }

    for lit in clause.iter() {
        let id = state.nodes.len();
        state
            .nodes
            .push(TableauxNode::new(Some(leaf), lit.lit.clone(), lit.negated));
        state.node_mut(leaf)?.children.push(id);
    }
    state.move_history.push(TableauxMove::Expand {
        leaf,
        clause: clause_id,
    });
    Ok(state)
}

pub fn apply_close(mut state: TableauxState, leaf: usize, node: usize) -> Result<TableauxState> {
    let leaf_node = open_leaf(&state, leaf)?;
    let target = state.node(node)?;

    if node == 0 {
        return Err(KalkulusError::illegal(
            "The root node cannot be used for branch closure",
        ));
    }
    if !state.is_ancestor(node, leaf) {
        return Err(KalkulusError::illegal(format!(
            "Node {} is not an ancestor of leaf {}",
            node, leaf
        )));
    }
    if !leaf_node.is_complement_of(target) {
        return Err(KalkulusError::illegal(format!(
            "Leaf {} and node {} are not complementary",
            leaf, node
        )));
    }

    let closed = state.node_mut(leaf)?;
    closed.is_closed = true;
    closed.close_ref = Some(node);
    state.propagate_closure(leaf);
    state.move_history.push(TableauxMove::Close { leaf, node });
    Ok(state)
}

pub fn apply_undo(mut state: TableauxState) -> Result<TableauxState> {
    if !state.backtracking {
        return Err(KalkulusError::illegal(
            "Backtracking is not enabled for this proof",
        ));
    }
    let last = state
        .move_history
        .pop()
        .ok_or_else(|| KalkulusError::illegal("There is no move to undo"))?;

    match last {
        TableauxMove::Expand { leaf, .. } => {
            let children = std::mem::take(&mut state.node_mut(leaf)?.children);
            let first = state.nodes.len().saturating_sub(children.len());
            if !children.iter().copied().eq(first..state.nodes.len()) {
                return Err(KalkulusError::illegal(
                    "The expansion to undo is not the most recent one",
                ));
            }
            state.nodes.truncate(first);
        }
        TableauxMove::Close { leaf, .. } => {
            let reopened = state.node_mut(leaf)?;
            reopened.is_closed = false;
            reopened.close_ref = None;
            state.reopen_ancestors(leaf);
        }
        TableauxMove::Undo => {
            return Err(KalkulusError::illegal("Move history contains an undo"));
        }
    }

    state.used_backtracking = true;
    Ok(state)
}
