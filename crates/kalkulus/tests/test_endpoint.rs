//! JSON round trips through the calculus dispatcher

use kalkulus::{Endpoint, KalkulusError, MemoryStore};
use serde_json::Value;

fn close_json(endpoint: &Endpoint, calculus: &str, state: &str) -> Value {
    serde_json::from_str(&endpoint.check_close(calculus, state).unwrap()).unwrap()
}

#[test]
fn test_tableaux_session() {
    let endpoint = Endpoint::new();
    let calculus = "prop-tableaux";
    let mut state = endpoint
        .parse(calculus, "a;!a", Some(r#"{"type":"WeaklyConnected"}"#))
        .unwrap();

    for mv in [
        r#"{"type":"Expand","leaf":0,"clause":0}"#,
        r#"{"type":"Expand","leaf":1,"clause":1}"#,
    ] {
        state = endpoint.apply_move(calculus, &state, mv).unwrap();
    }
    assert_eq!(close_json(&endpoint, calculus, &state)["closed"], false);

    state = endpoint
        .apply_move(calculus, &state, r#"{"type":"Close","leaf":2,"node":1}"#)
        .unwrap();
    let msg = close_json(&endpoint, calculus, &state);
    assert_eq!(msg["closed"], true);
    assert_eq!(msg["msg"], "The proof tree is closed and valid");
}

#[test]
fn test_resolution_session_records_statistics() {
    let endpoint = Endpoint::new();
    let store = MemoryStore::new();
    let calculus = "prop-resolution";
    let state = endpoint.parse(calculus, "a,b;!a;!b", None).unwrap();
    assert!(!endpoint.record_statistics(calculus, &state, &store).unwrap());

    let state = endpoint
        .apply_move(calculus, &state, r#"{"type":"Resolve","c1":0,"c2":1,"literal":"a"}"#)
        .unwrap();
    let state = endpoint
        .apply_move(calculus, &state, r#"{"type":"Resolve","c1":3,"c2":2}"#)
        .unwrap();
    assert_eq!(close_json(&endpoint, calculus, &state)["closed"], true);

    assert!(endpoint.record_statistics(calculus, &state, &store).unwrap());
    let board = store.leaderboard("a,b;!a;!b");
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].1, 950);
}

#[test]
fn test_state_is_bound_to_its_calculus() {
    let endpoint = Endpoint::new();
    let state = endpoint.parse("prop-resolution", "a;!a", None).unwrap();
    let err = endpoint.check_close("prop-tableaux", &state).unwrap_err();
    assert_eq!(err.kind(), "ApiMisuse");
}

#[test]
fn test_malformed_inputs_are_api_misuse() {
    let endpoint = Endpoint::new();
    let state = endpoint.parse("prop-tableaux", "a", None).unwrap();

    for result in [
        endpoint.apply_move("prop-tableaux", "{not json", r#"{"type":"Undo"}"#),
        endpoint.apply_move("prop-tableaux", &state, r#"{"type":"Jump"}"#),
        endpoint.apply_move("prop-tableaux", &state, r#"{"type":"Expand","leaf":0}"#),
        endpoint.check_close("prop-sequent", &state),
    ] {
        match result {
            Err(KalkulusError::ApiMisuse(_)) => {}
            other => panic!("expected ApiMisuse, got {:?}", other),
        }
    }
}

#[test]
fn test_edited_wire_state_is_tampered() {
    let endpoint = Endpoint::new();
    let state = endpoint.parse("prop-resolution", "a;!a", None).unwrap();
    let tampered = state.replacen("\"lit\":\"a\"", "\"lit\":\"b\"", 1);
    assert_ne!(tampered, state);

    let err = endpoint
        .apply_move("prop-resolution", &tampered, r#"{"type":"Resolve","c1":0,"c2":1}"#)
        .unwrap_err();
    assert_eq!(err.kind(), "TamperedState");
}

#[test]
fn test_formula_errors_pass_through() {
    let err = Endpoint::new().parse("prop-resolution", "a;;b", None).unwrap_err();
    assert_eq!(err.kind(), "InvalidFormulaFormat");
}
