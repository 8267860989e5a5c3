//! Propositional resolution.
//!
//! Clauses are resolved pairwise on a complementary literal; the proof is
//! complete once the empty clause has been derived.

pub mod moves;
pub mod state;

pub use moves::ResolutionMove;
pub use state::{ResolutionState, VisualHelp};

use crate::calculus::{Calculus, CloseMessage};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::parse_clause_set_with;
use crate::statistics::Statistics;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionParam {
    pub visual_help: VisualHelp,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PropResolution {
    pub parser: ParserConfig,
}

impl PropResolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: ParserConfig) -> Self {
        PropResolution { parser }
    }
}

impl Calculus for PropResolution {
    type State = ResolutionState;
    type Move = ResolutionMove;
    type Param = ResolutionParam;

    const IDENTIFIER: &'static str = "prop-resolution";

    fn parse_formula(
        &self,
        formula: &str,
        params: Option<ResolutionParam>,
    ) -> Result<ResolutionState> {
        let clause_set = parse_clause_set_with(formula, &self.parser)?;
        let params = params.unwrap_or_default();
        Ok(ResolutionState::new(clause_set, formula, params.visual_help))
    }

    fn apply_move_on_state(
        &self,
        state: ResolutionState,
        mv: ResolutionMove,
    ) -> Result<ResolutionState> {
        match mv {
            ResolutionMove::Resolve { c1, c2, literal } => {
                moves::apply_resolve(state, c1, c2, literal.as_deref())
            }
            ResolutionMove::Hide { c1 } => moves::apply_hide(state, c1),
            ResolutionMove::Show => Ok(moves::apply_show(state)),
        }
    }

    fn check_close_on_state(&self, state: &ResolutionState) -> CloseMessage {
        if state.clause_set.contains_empty_clause() {
            CloseMessage::new(true, "The proof is closed and valid")
        } else {
            CloseMessage::new(false, "The proof is not closed")
        }
    }

    fn statistics(&self, state: &ResolutionState) -> Option<Statistics> {
        if !state.clause_set.contains_empty_clause() {
            return None;
        }
        let clauses = state.clause_set.len() + state.hidden_clauses.len();
        Some(Statistics {
            formula: state.formula.clone(),
            score: (1000 - 10 * clauses as i64).max(0),
            blob: json!({
                "clauses": clauses,
                "hidden": state.hidden_clauses.len(),
            }),
        })
    }
}
