//! JSON-schema preparation for structured output.
//!
//! The chat-completions `json_schema` response format rejects schemas that
//! schemars emits verbatim. It requires `additionalProperties: false` on every
//! object, every property listed in `required` (nullable ones included), and a
//! fully inlined schema with no `$ref` indirection.

use schemars::{schema_for, JsonSchema};
use serde_json::Value;

/// Build a strict-mode response schema for `T`.
pub(crate) fn response_schema<T: JsonSchema>() -> Value {
    let mut value = serde_json::to_value(schema_for!(T)).unwrap_or_default();

    close_objects(&mut value);
    if let Value::Object(map) = &value {
        if let Some(definitions) = map.get("definitions").cloned() {
            inline_refs(&mut value, &definitions);
        }
    }
    if let Value::Object(map) = &mut value {
        map.remove("definitions");
        map.remove("$schema");
    }

    value
}

/// Mark every object closed and every property required.
fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type") == Some(&Value::String("object".to_string())) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
                if let Some(Value::Object(props)) = map.get("properties") {
                    let keys = props.keys().map(|k| Value::String(k.clone())).collect();
                    map.insert("required".to_string(), Value::Array(keys));
                }
            }
            for (_, v) in map.iter_mut() {
                close_objects(v);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                close_objects(item);
            }
        }
        _ => {}
    }
}

fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(path)) = map.get("$ref").cloned() {
                if let Some(name) = path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(name) {
                        *value = def.clone();
                        inline_refs(value, definitions);
                        return;
                    }
                }
            }
            // schemars wraps single refs in allOf; unwrap before recursing
            if let Some(Value::Array(all_of)) = map.get("allOf").cloned() {
                if all_of.len() == 1 {
                    if let Some(inner) = all_of.into_iter().next() {
                        *value = inner;
                        inline_refs(value, definitions);
                        return;
                    }
                }
            }
            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}
