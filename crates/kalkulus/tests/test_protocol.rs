//! Parse, seal and verify proof states the way a client round trip would

use kalkulus::{
    parse_clause_set, render_clause_set, Calculus, KalkulusError, PropResolution, PropTableaux,
    ProtectedState, ResolutionMove, ResolutionState, TableauxMove, TableauxParam, TableauxState,
};
use serde_json::Value;

fn resolution_state(formula: &str) -> ResolutionState {
    PropResolution::new().parse(formula, None).unwrap()
}

fn tableaux_state(formula: &str, moves: &[TableauxMove]) -> TableauxState {
    let calculus = PropTableaux::new();
    let params = TableauxParam {
        backtracking: true,
        ..Default::default()
    };
    let state = calculus.parse(formula, Some(params)).unwrap();
    moves
        .iter()
        .cloned()
        .fold(state, |s, mv| calculus.apply_move(s, mv).unwrap())
}

/// Encode, edit the JSON tree, and decode again
fn edited<S, F>(state: &S, edit: F) -> S
where
    S: serde::Serialize + serde::de::DeserializeOwned,
    F: FnOnce(&mut Value),
{
    let mut json = serde_json::to_value(state).unwrap();
    edit(&mut json);
    serde_json::from_value(json).unwrap()
}

#[test]
fn test_two_clause_formula() {
    let set = parse_clause_set("!a,b;c,!d").unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.to_string(), "{!a, b}, {c, !d}");
    assert_eq!(render_clause_set(&set), "!a,b;c,!d");
}

#[test]
fn test_rejected_formulas() {
    for formula in ["a,b;c,&;g,h", "", "a;;b", "a,!", "!!a", "a b", "a,"] {
        match parse_clause_set(formula) {
            Err(KalkulusError::InvalidFormulaFormat(_)) => {}
            other => panic!("expected rejection of {:?}, got {:?}", formula, other),
        }
    }
}

#[test]
fn test_mutated_clause_breaks_seal() {
    let original = resolution_state("a,b;!a");
    let mut mutated = original.clone();
    mutated.clause_set = parse_clause_set("a,c;!a").unwrap();

    assert!(original.verify_seal());
    assert!(!mutated.verify_seal());
}

#[test]
fn test_seal_survives_reencoding() {
    let state = tableaux_state("a;!a,b;!b", &[TableauxMove::Expand { leaf: 0, clause: 0 }]);
    let compact = serde_json::to_string(&state).unwrap();
    // Value re-encodes with sorted keys and different whitespace
    let value: Value = serde_json::from_str(&compact).unwrap();
    let pretty = serde_json::to_string_pretty(&value).unwrap();

    let decoded: TableauxState = serde_json::from_str(&pretty).unwrap();
    assert!(decoded.verify_seal());
    assert_eq!(decoded.seal(), state.seal());
}

#[test]
fn test_seal_is_deterministic() {
    let a = resolution_state("a,!b;b");
    let b = resolution_state("a,!b;b");
    assert_eq!(a.seal(), b.seal());
    assert_ne!(a.seal(), resolution_state("a,!b;!b").seal());
}

#[test]
fn test_flipped_negation_is_tampering() {
    let state = resolution_state("a,b;!a");
    let tampered = edited(&state, |json| {
        json["clause_set"]["clauses"][1]["atoms"][0]["negated"] = Value::Bool(false);
    });
    assert!(!tampered.verify_seal());
}

#[test]
fn test_negation_moved_into_payload_is_tampering() {
    let state = resolution_state("!a;b");
    let tampered = edited(&state, |json| {
        json["clause_set"]["clauses"][0]["atoms"][0] = serde_json::json!({
            "lit": "!a",
            "negated": false
        });
    });
    assert!(!tampered.clause_set.clauses()[0].iter().any(|l| l.negated));
    assert!(!tampered.verify_seal());
}

#[test]
fn test_clauses_merged_into_one_payload_is_tampering() {
    let state = resolution_state("a;b");
    let tampered = edited(&state, |json| {
        json["clause_set"]["clauses"] = serde_json::json!([
            { "atoms": [{ "lit": "a}, {b", "negated": false }] }
        ]);
    });
    assert_eq!(tampered.clause_set.len(), 1);
    assert!(matches!(
        PropResolution::new().check_close(&tampered),
        Err(KalkulusError::TamperedState(_))
    ));
}

#[test]
fn test_tableaux_clause_payload_edit_is_tampering() {
    let state = tableaux_state("a;b", &[]);
    let tampered = edited(&state, |json| {
        json["clause_set"]["clauses"] = serde_json::json!([
            { "atoms": [{ "lit": "a}, {b", "negated": false }] }
        ]);
    });
    assert!(!tampered.verify_seal());
}

#[test]
fn test_removed_clause_is_tampering() {
    let state = resolution_state("a;!a;b");
    let tampered = edited(&state, |json| {
        if let Some(clauses) = json["clause_set"]["clauses"].as_array_mut() {
            clauses.pop();
        }
    });
    assert!(!tampered.verify_seal());
    let result = PropResolution::new().apply_move(tampered, ResolutionMove::Show);
    assert!(matches!(result, Err(KalkulusError::TamperedState(_))));
}

#[test]
fn test_added_clause_is_tampering() {
    let state = resolution_state("a;!a");
    let tampered = edited(&state, |json| {
        if let Some(clauses) = json["clause_set"]["clauses"].as_array_mut() {
            clauses.push(serde_json::json!({ "atoms": [] }));
        }
    });
    assert!(!tampered.verify_seal());
    assert!(matches!(
        PropResolution::new().check_close(&tampered),
        Err(KalkulusError::TamperedState(_))
    ));
}

#[test]
fn test_bookkeeping_edits_are_tampering() {
    let state = tableaux_state(
        "a;!a",
        &[
            TableauxMove::Expand { leaf: 0, clause: 0 },
            TableauxMove::Expand { leaf: 1, clause: 1 },
        ],
    );

    let closed_leaf = edited(&state, |json| json["nodes"][2]["is_closed"] = Value::Bool(true));
    assert!(!closed_leaf.verify_seal());

    let history = edited(&state, |json| {
        if let Some(moves) = json["move_history"].as_array_mut() {
            moves.pop();
        }
    });
    assert!(!history.verify_seal());

    let no_backtracking = edited(&state, |json| json["used_backtracking"] = Value::Bool(true));
    assert!(!no_backtracking.verify_seal());
}

#[test]
fn test_rejected_move_leaves_input_usable() {
    let calculus = PropTableaux::new();
    let state = tableaux_state("a;!a", &[TableauxMove::Expand { leaf: 0, clause: 0 }]);
    let before = serde_json::to_string(&state).unwrap();

    let err = calculus
        .apply_move(state.clone(), TableauxMove::Close { leaf: 1, node: 0 })
        .unwrap_err();
    assert_eq!(err.kind(), "IllegalMove");
    assert_eq!(serde_json::to_string(&state).unwrap(), before);
    assert!(calculus
        .apply_move(state, TableauxMove::Expand { leaf: 1, clause: 1 })
        .is_ok());
}

#[test]
fn test_unsealed_state_is_rejected() {
    let state = edited(&resolution_state("a"), |json| {
        if let Some(obj) = json.as_object_mut() {
            obj.remove("seal");
        }
    });
    assert!(matches!(
        PropResolution::new().check_close(&state),
        Err(KalkulusError::TamperedState(_))
    ));
}
