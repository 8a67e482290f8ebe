//! Plugin property validation

use serde_json::{Map, Value};

use crate::error::{PluginError, PluginResult};
use crate::props::{PLUGIN_PROP_SCHEMA, PropType};

/// JSON falsiness as app config files use it: `null`, `false`, `0`, `""`.
///
/// Optional properties holding a falsy value are skipped rather than
/// type-checked, so placeholder values left in a config do not fail the
/// build. Arrays and objects are always truthy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Validate a raw property bag against [`PLUGIN_PROP_SCHEMA`].
///
/// Purely a gate: no normalization, no defaulting, and exactly one error per
/// call. Type checks run in schema order first; only once they all pass is
/// the bag scanned for unknown keys, in the bag's own key order.
pub fn validate_plugin_props(props: &Map<String, Value>) -> PluginResult<()> {
    for (key, prop_type) in PLUGIN_PROP_SCHEMA {
        let value = props.get(*key);
        let expected = match prop_type {
            PropType::RequiredString => {
                if matches!(value, Some(Value::String(_))) {
                    continue;
                }
                "a string"
            }
            PropType::OptionalString => match value {
                Some(v) if !is_falsy(v) && !v.is_string() => "a string",
                _ => continue,
            },
            PropType::Array => match value {
                Some(v) if !is_falsy(v) && !v.is_array() => "an array",
                _ => continue,
            },
        };
        return Err(PluginError::InvalidPropertyType {
            key: (*key).to_string(),
            expected,
        });
    }

    for key in props.keys() {
        if !PLUGIN_PROP_SCHEMA.iter().any(|(known, _)| known == key) {
            return Err(PluginError::UnknownProperty { key: key.clone() });
        }
    }

    Ok(())
}
