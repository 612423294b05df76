// Rust guideline compliant 2026-10-16

//! Deep merge of structured values.
//!
//! Merge semantics, later value wins:
//! - Objects: merged key by key, recursively
//! - Arrays: replaced or concatenated per [`ArrayStrategy`]
//! - Scalars and mismatched kinds: replaced

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How two arrays at the same position are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayStrategy {
    /// The later array replaces the earlier one.
    #[default]
    Replace,
    /// The later array's elements are appended to the earlier one.
    Concat,
}

/// Merges `overlay` into `base` in place.
///
/// Existing keys keep their position in `base`; new keys are appended in
/// the order `overlay` lists them.
pub fn deep_merge(base: &mut Value, overlay: Value, strategy: ArrayStrategy) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value, strategy),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (Value::Array(base_items), Value::Array(overlay_items))
            if strategy == ArrayStrategy::Concat =>
        {
            base_items.extend(overlay_items);
        }
        (base, overlay) => *base = overlay,
    }
}

/// Folds `values` left to right, starting from an empty object.
pub fn merge_values<I>(values: I, strategy: ArrayStrategy) -> Value
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .fold(Value::Object(Map::new()), |mut acc, value| {
            deep_merge(&mut acc, value, strategy);
            acc
        })
}
