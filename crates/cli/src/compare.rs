// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural differences between JSON results, for failure reports.

use serde_json::Value;

/// Describe how `actual` differs from `expected`, one entry per difference.
///
/// Mapping keys are matched by name; sequences are compared position by
/// position. Returns an empty list when the values are equal.
pub fn diff_values(expected: &Value, actual: &Value) -> Vec<String> {
    let mut diffs = Vec::new();
    diff_at(expected, actual, "", &mut diffs);
    diffs
}

fn diff_at(expected: &Value, actual: &Value, path: &str, diffs: &mut Vec<String>) {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for key in exp_map.keys() {
                if !act_map.contains_key(key) {
                    diffs.push(format!("{}: missing in actual", child(path, key)));
                }
            }
            for key in act_map.keys() {
                if !exp_map.contains_key(key) {
                    diffs.push(format!("{}: unexpected key in actual", child(path, key)));
                }
            }
            for (key, exp_val) in exp_map {
                if let Some(act_val) = act_map.get(key) {
                    diff_at(exp_val, act_val, &child(path, key), diffs);
                }
            }
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            if exp_arr.len() != act_arr.len() {
                diffs.push(format!(
                    "{}: length mismatch (expected {}, got {})",
                    display(path),
                    exp_arr.len(),
                    act_arr.len()
                ));
            }
            for (i, (exp_val, act_val)) in exp_arr.iter().zip(act_arr.iter()).enumerate() {
                diff_at(exp_val, act_val, &format!("{}[{}]", path, i), diffs);
            }
        }
        _ => {
            if expected != actual {
                diffs.push(format!(
                    "{}: expected {}, got {}",
                    display(path),
                    expected,
                    actual
                ));
            }
        }
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn display(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
