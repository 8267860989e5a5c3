//! Formula parsing

pub mod clause_set;

pub use clause_set::{parse_clause_set, parse_clause_set_with, render_clause_set};
