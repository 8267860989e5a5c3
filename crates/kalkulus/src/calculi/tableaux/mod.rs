//! Propositional clause tableaux.
//!
//! The proof tree starts at a root node; an expansion hangs one child per
//! literal of a clause below an open leaf, and a leaf is closed against a
//! complementary ancestor. The proof is complete when every branch is closed.

pub mod moves;
pub mod state;

pub use moves::TableauxMove;
pub use state::{TableauxNode, TableauxState, TableauxType};

use crate::calculus::{Calculus, CloseMessage};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::parse_clause_set_with;
use crate::statistics::Statistics;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Options chosen when a proof is started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableauxParam {
    #[serde(rename = "type")]
    pub tableaux_type: TableauxType,
    pub regular: bool,
    pub backtracking: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PropTableaux {
    pub parser: ParserConfig,
}

impl PropTableaux {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: ParserConfig) -> Self {
        PropTableaux { parser }
    }
}

impl Calculus for PropTableaux {
    type State = TableauxState;
    type Move = TableauxMove;
    type Param = TableauxParam;

    const IDENTIFIER: &'static str = "prop-tableaux";

    fn parse_formula(&self, formula: &str, params: Option<TableauxParam>) -> Result<TableauxState> {
        let clause_set = parse_clause_set_with(formula, &self.parser)?;
        Ok(TableauxState::new(
            clause_set,
            formula,
            params.unwrap_or_default(),
        ))
    }

    fn check_state(&self, state: &TableauxState) -> Result<()> {
        state.check_structure()
    }

    fn apply_move_on_state(&self, state: TableauxState, mv: TableauxMove) -> Result<TableauxState> {
        match mv {
            TableauxMove::Expand { leaf, clause } => moves::apply_expand(state, leaf, clause),
            TableauxMove::Close { leaf, node } => moves::apply_close(state, leaf, node),
            TableauxMove::Undo => moves::apply_undo(state),
        }
    }

    fn check_close_on_state(&self, state: &TableauxState) -> CloseMessage {
        if state.is_closed() {
            let mut msg = String::from("The proof tree is closed and valid");
            if state.used_backtracking {
                msg.push_str(", backtracking was used");
            }
            CloseMessage::new(true, msg)
        } else {
            CloseMessage::new(false, "The proof tree is not closed")
        }
    }

    /// Smaller trees score higher; using backtracking costs a fixed penalty
    fn statistics(&self, state: &TableauxState) -> Option<Statistics> {
        if !state.is_closed() {
            return None;
        }
        let nodes = state.nodes.len();
        let penalty = if state.used_backtracking { 100 } else { 0 };
        let score = (1000 - 10 * (nodes as i64 - 1) - penalty).max(0);
        Some(Statistics {
            formula: state.formula.clone(),
            score,
            blob: json!({
                "nodes": nodes,
                "moves": state.move_history.len(),
                "used_backtracking": state.used_backtracking,
            }),
        })
    }
}
