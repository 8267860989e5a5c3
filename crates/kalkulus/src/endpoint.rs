//! Dispatch over the closed set of calculi by wire identifier.
//!
//! Transport layers (the CLI, the wasm bindings, an RPC server) talk only to
//! [`Endpoint`]; it exposes the three protocol operations over JSON strings.

use crate::calculi::{PropResolution, PropTableaux};
use crate::calculus::Calculus;
use crate::error::{KalkulusError, Result};
use crate::statistics::{self, StatisticsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculusKind {
    PropTableaux,
    PropResolution,
}

impl CalculusKind {
    pub const ALL: [CalculusKind; 2] = [CalculusKind::PropTableaux, CalculusKind::PropResolution];

    pub fn identifier(&self) -> &'static str {
        match self {
            CalculusKind::PropTableaux => PropTableaux::IDENTIFIER,
            CalculusKind::PropResolution => PropResolution::IDENTIFIER,
        }
    }

    pub fn from_identifier(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == id)
            .ok_or_else(|| KalkulusError::ApiMisuse(format!("Unknown calculus '{}'", id)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Endpoint {
    pub tableaux: PropTableaux,
    pub resolution: PropResolution,
}

impl Endpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of every available calculus
    pub fn identifiers() -> Vec<&'static str> {
        CalculusKind::ALL.iter().map(CalculusKind::identifier).collect()
    }

    pub fn parse(&self, calculus: &str, formula: &str, params: Option<&str>) -> Result<String> {
        match CalculusKind::from_identifier(calculus)? {
            CalculusKind::PropTableaux => self.tableaux.parse_json(formula, params),
            CalculusKind::PropResolution => self.resolution.parse_json(formula, params),
        }
    }

    pub fn apply_move(&self, calculus: &str, state: &str, mv: &str) -> Result<String> {
        match CalculusKind::from_identifier(calculus)? {
            CalculusKind::PropTableaux => self.tableaux.apply_move_json(state, mv),
            CalculusKind::PropResolution => self.resolution.apply_move_json(state, mv),
        }
    }

    pub fn check_close(&self, calculus: &str, state: &str) -> Result<String> {
        match CalculusKind::from_identifier(calculus)? {
            CalculusKind::PropTableaux => self.tableaux.check_close_json(state),
            CalculusKind::PropResolution => self.resolution.check_close_json(state),
        }
    }

    /// Record the statistics of a closed proof in `store`.
    ///
    /// Returns `Ok(false)` when the state is not closed or the store refused
    /// the entry; only an invalid state is an error.
    pub fn record_statistics(
        &self,
        calculus: &str,
        state: &str,
        store: &dyn StatisticsStore,
    ) -> Result<bool> {
        let stats = match CalculusKind::from_identifier(calculus)? {
            CalculusKind::PropTableaux => self.tableaux.statistics_json(state)?,
            CalculusKind::PropResolution => self.resolution.statistics_json(state)?,
        };
        Ok(stats.map_or(false, |s| statistics::record(store, &s)))
    }
}
