//! Kalkulus: sealed proof states for interactive proof calculi
//!
//! A client submits a clause formula, receives a sealed proof state, and
//! sends moves against that state until the calculus reports a closed proof.
//! The seal lets the state live on the client between moves: every state
//! that comes back is verified before any rule is applied.

pub mod calculi;
pub mod calculus;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logic;
pub mod parser;
pub mod seal;
pub mod statistics;

// Re-export commonly used types
pub use calculi::resolution::{ResolutionMove, ResolutionParam, ResolutionState, VisualHelp};
pub use calculi::tableaux::{TableauxMove, TableauxNode, TableauxParam, TableauxState, TableauxType};
pub use calculi::{PropResolution, PropTableaux};
pub use calculus::{Calculus, CloseMessage};
pub use config::{Alphabet, ParserConfig};
pub use endpoint::{CalculusKind, Endpoint};
pub use error::{KalkulusError, Result};
pub use logic::{Clause, ClauseSet, Literal};
pub use parser::{parse_clause_set, parse_clause_set_with, render_clause_set};
pub use seal::{ProtectedState, SEAL_DOMAIN};
pub use statistics::{MemoryStore, Statistics, StatisticsStore};
