//! The contract shared by every proof calculus.
//!
//! A calculus supplies three pieces of rule logic: building an initial state
//! from a formula, applying a move to a state, and deciding whether a state is
//! a closed proof. The provided methods wrap that logic in the protocol every
//! calculus follows:
//!
//! - `parse` seals the freshly built state;
//! - `apply_move` verifies the seal and the state's structure before any rule
//!   logic runs, and reseals the successor;
//! - `check_close` does the same checks before evaluating the close predicate.
//!
//! The `*_json` variants add decoding and encoding of the wire format. Every
//! operation is a pure function of its inputs.

use crate::error::{KalkulusError, Result};
use crate::seal::{ensure_sealed, ProtectedState};
use crate::statistics::Statistics;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a closure check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseMessage {
    pub closed: bool,
    pub msg: String,
}

impl CloseMessage {
    pub fn new(closed: bool, msg: impl Into<String>) -> Self {
        CloseMessage {
            closed,
            msg: msg.into(),
        }
    }
}

pub trait Calculus {
    /// Proof state, embedding its own seal
    type State: ProtectedState + Serialize + DeserializeOwned;
    /// Tagged move descriptor
    type Move: DeserializeOwned + fmt::Debug;
    /// Calculus-specific configuration options
    type Param: DeserializeOwned + Default;

    /// Name used on the wire to select this calculus
    const IDENTIFIER: &'static str;

    /// Build the unsealed initial state for a formula
    fn parse_formula(&self, formula: &str, params: Option<Self::Param>) -> Result<Self::State>;

    /// Compute the successor of a verified state, or reject the move
    fn apply_move_on_state(&self, state: Self::State, mv: Self::Move) -> Result<Self::State>;

    /// Evaluate the terminal predicate on a verified state
    fn check_close_on_state(&self, state: &Self::State) -> CloseMessage;

    /// Statistics worth recording for a closed proof
    fn statistics(&self, _state: &Self::State) -> Option<Statistics> {
        None
    }

    /// Structural checks on a state whose seal verified, run before any rule logic
    fn check_state(&self, _state: &Self::State) -> Result<()> {
        Ok(())
    }

    fn parse(&self, formula: &str, params: Option<Self::Param>) -> Result<Self::State> {
        let mut state = self.parse_formula(formula, params)?;
        state.compute_seal();
        tracing::debug!(calculus = Self::IDENTIFIER, "created initial state");
        Ok(state)
    }

    fn apply_move(&self, state: Self::State, mv: Self::Move) -> Result<Self::State> {
        ensure_sealed(&state)?;
        self.check_state(&state)?;
        tracing::debug!(calculus = Self::IDENTIFIER, ?mv, "applying move");
        let mut next = self.apply_move_on_state(state, mv)?;
        next.compute_seal();
        Ok(next)
    }

    fn check_close(&self, state: &Self::State) -> Result<CloseMessage> {
        ensure_sealed(state)?;
        self.check_state(state)?;
        Ok(self.check_close_on_state(state))
    }

    fn parse_json(&self, formula: &str, params: Option<&str>) -> Result<String> {
        let params = params.map(serde_json::from_str::<Self::Param>).transpose()?;
        encode(&self.parse(formula, params)?)
    }

    fn apply_move_json(&self, state: &str, mv: &str) -> Result<String> {
        let state: Self::State = serde_json::from_str(state)?;
        let mv: Self::Move = serde_json::from_str(mv)?;
        encode(&self.apply_move(state, mv)?)
    }

    fn check_close_json(&self, state: &str) -> Result<String> {
        let state: Self::State = serde_json::from_str(state)?;
        encode(&self.check_close(&state)?)
    }

    /// Decode and verify a state, then collect its statistics if it is closed
    fn statistics_json(&self, state: &str) -> Result<Option<Statistics>> {
        let state: Self::State = serde_json::from_str(state)?;
        if self.check_close(&state)?.closed {
            Ok(self.statistics(&state))
        } else {
            Ok(None)
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| KalkulusError::ApiMisuse(format!("could not encode output: {}", e)))
}
