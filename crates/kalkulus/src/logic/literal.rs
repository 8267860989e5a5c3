//! Literals: a payload together with a polarity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal (possibly negated proposition or predicate)
///
/// The payload is generic so that richer calculi can carry terms instead of
/// plain names. Equality and hashing are structural over `(lit, negated)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal<L> {
    pub lit: L,
    pub negated: bool,
}

impl<L> Literal<L> {
    /// Create a new literal with the given polarity
    pub fn new(lit: L, negated: bool) -> Self {
        Literal { lit, negated }
    }

    /// Create a new positive literal
    pub fn positive(lit: L) -> Self {
        Literal { lit, negated: false }
    }

    /// Create a new negative literal
    pub fn negative(lit: L) -> Self {
        Literal { lit, negated: true }
    }
}

impl<L: Clone> Literal<L> {
    /// Get the complement of this literal
    pub fn not(&self) -> Literal<L> {
        Literal {
            lit: self.lit.clone(),
            negated: !self.negated,
        }
    }
}

impl<L: PartialEq> Literal<L> {
    /// Check whether the two literals share a payload but differ in polarity
    pub fn is_complement_of(&self, other: &Literal<L>) -> bool {
        self.negated != other.negated && self.lit == other.lit
    }
}

impl<L: fmt::Debug> Literal<L> {
    /// Unambiguous rendering for hash bases: polarity token, then the quoted payload
    pub fn basis(&self) -> String {
        let polarity = if self.negated { '-' } else { '+' };
        format!("{}{:?}", polarity, self.lit)
    }
}

impl<L: fmt::Display> fmt::Display for Literal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        write!(f, "{}", self.lit)
    }
}
