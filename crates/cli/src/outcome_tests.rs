// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[test]
fn sentinel_string_is_user_error() {
    assert_eq!(Outcome::from_json(json!("user-error")), Outcome::UserError);
}

#[parameterized(
    other_string = { json!("user error") },
    padded_sentinel = { json!(" user-error") },
    sentinel_in_list = { json!(["user-error"]) },
    sentinel_as_value = { json!({"<x>": "user-error"}) },
    null = { json!(null) },
    mapping = { json!({"-v": true}) },
)]
fn non_sentinel_values_are_parsed(value: serde_json::Value) {
    assert_eq!(Outcome::from_json(value.clone()), Outcome::Parsed(value));
}

#[test]
fn user_error_renders_as_sentinel() {
    assert_eq!(Outcome::UserError.to_json(), json!("user-error"));
    assert_eq!(Outcome::UserError.to_string(), r#""user-error""#);
}

#[test]
fn parsed_renders_compact_json() {
    let outcome = Outcome::Parsed(json!({"--speed": "10", "<name>": ["a", "b"]}));
    assert_eq!(outcome.to_string(), r#"{"--speed":"10","<name>":["a","b"]}"#);
}

#[test]
fn mapping_equality_ignores_key_order() {
    let a: serde_json::Value = serde_json::from_str(r#"{"-a": true, "-b": false}"#).unwrap();
    let b: serde_json::Value = serde_json::from_str(r#"{"-b": false, "-a": true}"#).unwrap();
    assert_eq!(Outcome::from_json(a), Outcome::from_json(b));
}

#[test]
fn sequence_equality_is_ordered() {
    assert_ne!(
        Outcome::from_json(json!({"<f>": ["x", "y"]})),
        Outcome::from_json(json!({"<f>": ["y", "x"]}))
    );
}

#[test]
fn scalars_compare_by_type() {
    assert_ne!(Outcome::from_json(json!({"-v": 1})), Outcome::from_json(json!({"-v": true})));
    assert_ne!(Outcome::from_json(json!({"-v": 1})), Outcome::from_json(json!({"-v": 1.0})));
    assert_ne!(Outcome::from_json(json!({"-v": "1"})), Outcome::from_json(json!({"-v": 1})));
}
