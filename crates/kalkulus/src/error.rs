//! Error types for kalkulus

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KalkulusError {
    /// The formula text violates the clause grammar
    #[error("Invalid formula format: {0}")]
    InvalidFormulaFormat(String),

    /// The seal of a submitted state does not match its content
    #[error("Tampered state: {0}")]
    TamperedState(String),

    /// The move is well-formed but not applicable to the current state
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// Malformed or missing input at the contract boundary
    #[error("API misuse: {0}")]
    ApiMisuse(String),
}

impl KalkulusError {
    /// Stable tag naming the error kind, used by front ends
    pub fn kind(&self) -> &'static str {
        match self {
            KalkulusError::InvalidFormulaFormat(_) => "InvalidFormulaFormat",
            KalkulusError::TamperedState(_) => "TamperedState",
            KalkulusError::IllegalMove(_) => "IllegalMove",
            KalkulusError::ApiMisuse(_) => "ApiMisuse",
        }
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        KalkulusError::IllegalMove(msg.into())
    }
}

impl From<serde_json::Error> for KalkulusError {
    fn from(e: serde_json::Error) -> Self {
        KalkulusError::ApiMisuse(format!("could not decode JSON input: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, KalkulusError>;
