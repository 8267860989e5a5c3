//! Propositional clause representation
//!
//! This module provides literals, clauses and clause sets. All of them are
//! plain values: operations never fail and never reach outside the value.

pub mod clause;
pub mod literal;

#[cfg(test)]
mod proptest_tests;

pub use clause::{Clause, ClauseSet};
pub use literal::Literal;
