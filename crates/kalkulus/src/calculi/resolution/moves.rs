//! Rule applications of the propositional resolution calculus

use super::state::ResolutionState;
use crate::error::{KalkulusError, Result};
use crate::logic::{Clause, Literal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResolutionMove {
    /// Resolve two clauses, optionally naming the pivot literal
    Resolve {
        c1: usize,
        c2: usize,
        #[serde(default)]
        literal: Option<String>,
    },
    /// Move a clause to the hidden set
    Hide { c1: usize },
    /// Restore every hidden clause
    Show,
}

fn clause(state: &ResolutionState, id: usize) -> Result<&Clause<String>> {
    state
        .clause_set
        .get(id)
        .ok_or_else(|| KalkulusError::illegal(format!("Clause with ID {} does not exist", id)))
}

/// Literal of `c1` whose complement occurs in `c2`
fn pivot(
    c1: &Clause<String>,
    c2: &Clause<String>,
    literal: Option<&str>,
) -> Result<Literal<String>> {
    let mut candidates = c1.iter().filter(|l| c2.contains(&l.not()));
    match literal {
        Some(name) => candidates.find(|l| l.lit == name).cloned().ok_or_else(|| {
            KalkulusError::illegal(format!(
                "Clauses do not contain literal '{}' with opposite polarity",
                name
            ))
        }),
        None => candidates
            .next()
            .cloned()
            .ok_or_else(|| KalkulusError::illegal("Clauses contain no complementary literals")),
    }
}

pub fn apply_resolve(
    mut state: ResolutionState,
    c1: usize,
    c2: usize,
    literal: Option<&str>,
) -> Result<ResolutionState> {
    if c1 == c2 {
        return Err(KalkulusError::illegal("Both IDs refer to the same clause"));
    }
    let first = clause(&state, c1)?;
    let second = clause(&state, c2)?;
    let pivot = pivot(first, second, literal)?;
    let resolvent = first.without(&pivot).union(&second.without(&pivot.not()));

    tracing::debug!(%pivot, %resolvent, "resolved clauses");
    state.newest_node = match state.clause_set.index_of(&resolvent) {
        Some(existing) => Some(existing),
        None => {
            state.clause_set.add(resolvent);
            Some(state.clause_set.len() - 1)
        }
    };
    Ok(state)
}

pub fn apply_hide(mut state: ResolutionState, c1: usize) -> Result<ResolutionState> {
    let hidden = state
        .clause_set
        .remove(c1)
        .ok_or_else(|| KalkulusError::illegal(format!("Clause with ID {} does not exist", c1)))?;
    state.hidden_clauses.add(hidden);
    state.newest_node = None;
    Ok(state)
}

pub fn apply_show(mut state: ResolutionState) -> ResolutionState {
    let hidden = std::mem::take(&mut state.hidden_clauses);
    state.clause_set.add_all(hidden.clauses().iter().cloned());
    state.newest_node = None;
    state
}
