//! Statistics of finished proofs and the store that consumes them.
//!
//! The core never owns a store. A front end that wants to record statistics
//! passes its store handle to [`record`] explicitly; a failing store is
//! logged and otherwise ignored so the proof protocol never depends on it.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// Summary of a closed proof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Formula the proof was started from
    pub formula: String,
    /// Higher is better
    pub score: i64,
    /// Calculus-specific details
    pub blob: serde_json::Value,
}

#[derive(Error, Debug)]
#[error("statistics store unavailable: {0}")]
pub struct StoreError(pub String);

/// Persistence collaborator keyed by formula
pub trait StatisticsStore: Send + Sync {
    fn record(&self, formula: &str, blob: &serde_json::Value, score: i64) -> Result<(), StoreError>;
}

/// Hand statistics to a store, logging instead of failing when it refuses
pub fn record(store: &dyn StatisticsStore, statistics: &Statistics) -> bool {
    match store.record(&statistics.formula, &statistics.blob, statistics.score) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                formula = %statistics.formula,
                error = %e,
                "skipped recording statistics"
            );
            false
        }
    }
}

/// In-memory store, useful for tests and single-process front ends
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<(String, serde_json::Value, i64)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(blob, score)` entries for one formula, best score first
    pub fn leaderboard(&self, formula: &str) -> Vec<(serde_json::Value, i64)> {
        let entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut board: Vec<_> = entries
            .iter()
            .filter(|(f, _, _)| f == formula)
            .map(|(_, blob, score)| (blob.clone(), *score))
            .collect();
        board.sort_by(|a, b| b.1.cmp(&a.1));
        board
    }
}

impl StatisticsStore for MemoryStore {
    fn record(
        &self,
        formula: &str,
        blob: &serde_json::Value,
        score: i64,
    ) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError("memory store lock poisoned".into()))?;
        entries.push((formula.to_string(), blob.clone(), score));
        Ok(())
    }
}
