//! Proof state of the propositional resolution calculus

use crate::logic::ClauseSet;
use crate::seal::ProtectedState;
use serde::{Deserialize, Serialize};

/// Presentation hint for front ends; never part of the hash basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualHelp {
    #[default]
    Off,
    /// Highlight clause pairs that can be resolved
    Highlight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionState {
    pub formula: String,
    pub clause_set: ClauseSet<String>,
    /// Clauses set aside by the user, restored by `Show`
    pub hidden_clauses: ClauseSet<String>,
    pub visual_help: VisualHelp,
    /// Index of the most recent resolvent, for highlighting
    pub newest_node: Option<usize>,
    #[serde(default)]
    pub seal: String,
}

impl ResolutionState {
    pub fn new(clause_set: ClauseSet<String>, formula: &str, visual_help: VisualHelp) -> Self {
        ResolutionState {
            formula: formula.to_string(),
            clause_set,
            hidden_clauses: ClauseSet::new(),
            visual_help,
            newest_node: None,
            seal: String::new(),
        }
    }
}

impl ProtectedState for ResolutionState {
    fn info(&self) -> String {
        format!(
            "resolution|{:?}|{}|{}",
            self.formula,
            self.clause_set.basis(),
            self.hidden_clauses.basis()
        )
    }

    fn seal(&self) -> &str {
        &self.seal
    }

    fn set_seal(&mut self, seal: String) {
        self.seal = seal;
    }
}
