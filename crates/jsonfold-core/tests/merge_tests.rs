// Rust guideline compliant 2026-10-16

//! Unit tests for the deep merge engine.

use jsonfold_core::{deep_merge, merge_values, ArrayStrategy};
use serde_json::json;

#[test]
fn test_later_scalar_wins_and_objects_merge() {
    let merged = merge_values(
        vec![
            json!({"a": 1, "b": {"x": 1}}),
            json!({"b": {"y": 2}}),
            json!({"a": 2}),
        ],
        ArrayStrategy::Replace,
    );
    assert_eq!(merged, json!({"a": 2, "b": {"x": 1, "y": 2}}));
}

#[test]
fn test_array_replace() {
    let merged = merge_values(
        vec![json!({"items": [1, 2]}), json!({"items": [3, 4]})],
        ArrayStrategy::Replace,
    );
    assert_eq!(merged, json!({"items": [3, 4]}));
}

#[test]
fn test_array_concat() {
    let merged = merge_values(
        vec![json!({"items": [1, 2]}), json!({"items": [3, 4]})],
        ArrayStrategy::Concat,
    );
    assert_eq!(merged, json!({"items": [1, 2, 3, 4]}));
}

#[test]
fn test_concat_applies_to_nested_arrays() {
    let merged = merge_values(
        vec![
            json!({"a": {"list": ["x"]}}),
            json!({"a": {"list": ["y"]}}),
            json!({"a": {"list": ["z"]}}),
        ],
        ArrayStrategy::Concat,
    );
    assert_eq!(merged, json!({"a": {"list": ["x", "y", "z"]}}));
}

#[test]
fn test_scalar_replaces_object() {
    let mut base = json!({"cache": {"mode": "on"}});
    deep_merge(&mut base, json!({"cache": false}), ArrayStrategy::Replace);
    assert_eq!(base, json!({"cache": false}));
}

#[test]
fn test_array_replaces_object_even_with_concat() {
    let mut base = json!({"a": {"k": 1}});
    deep_merge(&mut base, json!({"a": [1]}), ArrayStrategy::Concat);
    assert_eq!(base, json!({"a": [1]}));
}

#[test]
fn test_top_level_non_object_replaces_accumulator() {
    let merged = merge_values(vec![json!({"a": 1}), json!([1, 2])], ArrayStrategy::Replace);
    assert_eq!(merged, json!([1, 2]));
}

#[test]
fn test_nested_deep_merge() {
    let merged = merge_values(
        vec![
            json!({"level1": {"level2": {"a": 1, "b": 2}}}),
            json!({"level1": {"level2": {"b": 3, "c": 4}}}),
        ],
        ArrayStrategy::Replace,
    );
    assert_eq!(merged, json!({"level1": {"level2": {"a": 1, "b": 3, "c": 4}}}));
}

#[test]
fn test_single_input_is_unchanged() {
    let value = json!({"a": [1, {"b": null}], "c": "d"});
    let merged = merge_values(vec![value.clone()], ArrayStrategy::Concat);
    assert_eq!(merged, value);
}
