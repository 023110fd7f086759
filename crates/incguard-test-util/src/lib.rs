//! Shared test utilities for the incguard workspace.
//!
//! Lives in its own crate so both the CLI integration tests and `xtask`
//! can normalize reports without a `#[cfg(test)]` gate.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for report comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` only when the
///    root object is a report envelope (`schema`, `tool`, `verdict`,
///    `findings` and `data` all present). Finding payloads that happen to
///    carry a `tool` object are left alone.
/// 2. **Recursive**: `started_at` and `finished_at` become
///    `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|key| obj.contains_key(*key));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_version_and_timestamps() {
        let input = json!({
            "schema": "incguard.report.v1",
            "tool": { "name": "incguard", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "verdict": "pass",
            "findings": [],
            "data": { "profile": "strict" }
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "incguard");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["data"]["profile"], "strict");
    }

    #[test]
    fn leaves_nested_tool_objects_alone() {
        let input = json!({
            "schema": "incguard.report.v1",
            "tool": { "name": "incguard", "version": "0.1.0" },
            "verdict": "fail",
            "findings": [
                { "data": { "tool": { "name": "gcc", "version": "13.2" } } }
            ],
            "data": {}
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["findings"][0]["data"]["tool"]["version"], "13.2");
    }

    #[test]
    fn non_envelope_keeps_version_but_normalizes_nested_timestamps() {
        let input = json!({
            "tool": { "name": "incguard", "version": "0.1.0" },
            "runs": [ { "started_at": "2026-01-01T00:00:00Z" } ]
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "0.1.0");
        assert_eq!(result["runs"][0]["started_at"], "__TIMESTAMP__");
    }
}
