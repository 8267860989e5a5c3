//! Property-based tests for the clause model and the formula parser.

use super::{Clause, ClauseSet, Literal};
use crate::error::KalkulusError;
use crate::parser::{parse_clause_set, render_clause_set};
use proptest::prelude::*;

fn arb_literal() -> impl Strategy<Value = Literal<String>> {
    ("[a-e][a-z0-9_]{0,2}", any::<bool>()).prop_map(|(name, negated)| Literal::new(name, negated))
}

fn arb_clause() -> impl Strategy<Value = Clause<String>> {
    proptest::collection::vec(arb_literal(), 1..5).prop_map(|lits| lits.into_iter().collect())
}

fn arb_clause_set() -> impl Strategy<Value = ClauseSet<String>> {
    proptest::collection::vec(arb_clause(), 1..6).prop_map(|clauses| clauses.into_iter().collect())
}

proptest! {
    /// Rendering a clause set and parsing it again gives back an equal set
    #[test]
    fn parse_render_round_trip(set in arb_clause_set()) {
        let text = render_clause_set(&set);
        let parsed = parse_clause_set(&text).unwrap();
        prop_assert_eq!(&parsed, &set);
        prop_assert_eq!(parsed.to_string(), set.to_string(), "insertion order is preserved");
    }

    /// The parser answers every input with a clause set or a format error
    #[test]
    fn parser_is_total(input in "[a-c!,; &_\u{e9}]{0,12}") {
        match parse_clause_set(&input) {
            Ok(set) => prop_assert!(!set.is_empty()),
            Err(e) => prop_assert!(matches!(e, KalkulusError::InvalidFormulaFormat(_))),
        }
    }

    /// Parsing is deterministic
    #[test]
    fn parser_is_deterministic(set in arb_clause_set()) {
        let text = render_clause_set(&set);
        let first = parse_clause_set(&text).unwrap();
        let second = parse_clause_set(&text).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }

    /// Negating a literal twice is the identity and never touches the payload
    #[test]
    fn double_negation(lit in arb_literal()) {
        prop_assert_eq!(lit.not().not(), lit.clone());
        prop_assert_eq!(lit.not().lit, lit.lit);
    }
}
