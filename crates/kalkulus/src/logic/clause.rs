//! Clauses and clause sets
//!
//! Both containers deduplicate by value and keep insertion order for every
//! externally observable rendering (`Display`, JSON, indices used by moves).
//! Equality is set equality and ignores that order.

use super::literal::Literal;
use indexmap::IndexSet;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;

/// A clause (disjunction of literals)
#[derive(Debug, Clone)]
pub struct Clause<L> {
    atoms: IndexSet<Literal<L>>,
}

impl<L> Clause<L> {
    /// Create an empty clause
    pub fn new() -> Self {
        Clause {
            atoms: IndexSet::new(),
        }
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Iterate over the literals in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Literal<L>> + '_ {
        self.atoms.iter()
    }

    /// Get the literal at the given position
    pub fn get(&self, index: usize) -> Option<&Literal<L>> {
        self.atoms.get_index(index)
    }
}

impl<L: Hash + Eq> Clause<L> {
    /// Insert a literal unless an equal one is already present.
    ///
    /// Returns `true` if the literal was new.
    pub fn add(&mut self, literal: Literal<L>) -> bool {
        self.atoms.insert(literal)
    }

    /// Insert every literal under the same rule as [`Clause::add`]
    pub fn add_all(&mut self, literals: impl IntoIterator<Item = Literal<L>>) {
        for literal in literals {
            self.add(literal);
        }
    }

    pub fn contains(&self, literal: &Literal<L>) -> bool {
        self.atoms.contains(literal)
    }

    /// Check for a complementary pair of literals
    pub fn is_tautology(&self) -> bool {
        self.atoms
            .iter()
            .any(|a| self.atoms.iter().any(|b| a.is_complement_of(b)))
    }
}

impl<L: Hash + Eq + Clone> Clause<L> {
    /// Copy of this clause with one literal left out
    pub fn without(&self, literal: &Literal<L>) -> Clause<L> {
        self.atoms
            .iter()
            .filter(|l| *l != literal)
            .cloned()
            .collect()
    }

    /// Copy of this clause extended by the literals of `other`
    pub fn union(&self, other: &Clause<L>) -> Clause<L> {
        let mut result = self.clone();
        result.add_all(other.iter().cloned());
        result
    }
}

impl<L: fmt::Debug> Clause<L> {
    /// Hash-basis rendering; delimiters never occur unquoted inside a payload
    pub fn basis(&self) -> String {
        let atoms: Vec<String> = self.atoms.iter().map(Literal::basis).collect();
        format!("[{}]", atoms.join(","))
    }
}

impl<L> Default for Clause<L> {
    fn default() -> Self {
        Clause::new()
    }
}

impl<L: Hash + Eq> PartialEq for Clause<L> {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
    }
}

impl<L: Hash + Eq> Eq for Clause<L> {}

impl<L: Hash + Eq> FromIterator<Literal<L>> for Clause<L> {
    fn from_iter<I: IntoIterator<Item = Literal<L>>>(iter: I) -> Self {
        let mut clause = Clause::new();
        clause.add_all(iter);
        clause
    }
}

impl<L: fmt::Display> fmt::Display for Clause<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "}}")
    }
}

impl<L: Serialize> Serialize for Clause<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let atoms: Vec<&Literal<L>> = self.atoms.iter().collect();
        let mut s = serializer.serialize_struct("Clause", 1)?;
        s.serialize_field("atoms", &atoms)?;
        s.end()
    }
}

#[derive(Deserialize)]
struct ClauseRepr<L> {
    atoms: Vec<Literal<L>>,
}

impl<'de, L> Deserialize<'de> for Clause<L>
where
    L: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ClauseRepr::<L>::deserialize(deserializer)?;
        Ok(repr.atoms.into_iter().collect())
    }
}

/// A clause set (conjunction of clauses)
#[derive(Debug, Clone)]
pub struct ClauseSet<L> {
    clauses: Vec<Clause<L>>,
}

impl<L> ClauseSet<L> {
    /// Create an empty clause set
    pub fn new() -> Self {
        ClauseSet {
            clauses: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause<L>> + '_ {
        self.clauses.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Clause<L>> {
        self.clauses.get(index)
    }

    /// All clauses in insertion order
    pub fn clauses(&self) -> &[Clause<L>] {
        &self.clauses
    }

    /// Check whether the empty clause has been derived
    pub fn contains_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Remove and return the clause at `index`, shifting later clauses down
    pub fn remove(&mut self, index: usize) -> Option<Clause<L>> {
        if index < self.clauses.len() {
            Some(self.clauses.remove(index))
        } else {
            None
        }
    }
}

impl<L: Hash + Eq> ClauseSet<L> {
    /// Insert a clause unless an equal one is already present.
    ///
    /// Returns `true` if the clause was new.
    pub fn add(&mut self, clause: Clause<L>) -> bool {
        if self.contains(&clause) {
            return false;
        }
        self.clauses.push(clause);
        true
    }

    /// Insert every clause under the same rule as [`ClauseSet::add`]
    pub fn add_all(&mut self, clauses: impl IntoIterator<Item = Clause<L>>) {
        for clause in clauses {
            self.add(clause);
        }
    }

    pub fn contains(&self, clause: &Clause<L>) -> bool {
        self.clauses.iter().any(|c| c == clause)
    }

    /// Position of a clause equal to `clause`
    pub fn index_of(&self, clause: &Clause<L>) -> Option<usize> {
        self.clauses.iter().position(|c| c == clause)
    }
}

impl<L: fmt::Debug> ClauseSet<L> {
    pub fn basis(&self) -> String {
        let clauses: Vec<String> = self.clauses.iter().map(Clause::basis).collect();
        format!("[{}]", clauses.join(","))
    }
}

impl<L> Default for ClauseSet<L> {
    fn default() -> Self {
        ClauseSet::new()
    }
}

impl<L: Hash + Eq> PartialEq for ClauseSet<L> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.clauses.iter().all(|c| other.contains(c))
    }
}

impl<L: Hash + Eq> Eq for ClauseSet<L> {}

impl<L: Hash + Eq> FromIterator<Clause<L>> for ClauseSet<L> {
    fn from_iter<I: IntoIterator<Item = Clause<L>>>(iter: I) -> Self {
        let mut set = ClauseSet::new();
        set.add_all(iter);
        set
    }
}

impl<L: fmt::Display> fmt::Display for ClauseSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl<L: Serialize> Serialize for ClauseSet<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ClauseSet", 1)?;
        s.serialize_field("clauses", &self.clauses)?;
        s.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "L: Deserialize<'de> + Hash + Eq"))]
struct ClauseSetRepr<L> {
    clauses: Vec<Clause<L>>,
}

impl<'de, L> Deserialize<'de> for ClauseSet<L>
where
    L: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ClauseSetRepr::<L>::deserialize(deserializer)?;
        Ok(repr.clauses.into_iter().collect())
    }
}
