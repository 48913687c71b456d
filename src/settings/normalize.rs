//! Schema normalization
//!
//! Docker Desktop has served two settings shapes. Older releases wrap every leaf as
//! `{"value": .., "locked": ..}`; newer ones keep most leaves bare and only wrap the
//! resource limits that carry `min`/`max` metadata. Documents are rewritten into the newer
//! shape before anything navigates them, so setters never branch on the variant.

use super::navigate::lookup;
use super::path::SettingPath;
use super::{SettingsDocument, FILE_SHARING};
use serde_json::Value;

/// Shape of a fetched settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// Every leaf wrapped as `{"value": .., "locked": ..}`
    Legacy,
    /// Bare leaves; only bound-carrying leaves stay wrapped
    Current,
}

/// Leaves that are bare in the current shape and wrapped in the legacy one
const VARIANT_PROBES: &[&str] = &[
    "vm.kubernetes.enabled",
    "vm.proxy.mode",
    "vm.network.automaticDNS",
];

/// Wrappers the current shape keeps even without bound metadata
const RETAINED_WRAPPERS: &[&str] = &[FILE_SHARING];

/// `{"value": ..}` or `{"value": .., "locked": ..}` with nothing else alongside
fn is_plain_wrapper(map: &SettingsDocument) -> bool {
    map.contains_key("value") && map.keys().all(|k| k == "value" || k == "locked")
}

/// Classify a freshly fetched document
pub fn detect_variant(doc: &SettingsDocument) -> SchemaVariant {
    let wrapped = VARIANT_PROBES
        .iter()
        .filter_map(|raw| SettingPath::parse(raw).ok())
        .any(|path| matches!(lookup(doc, &path), Ok(Value::Object(map)) if is_plain_wrapper(map)));

    if wrapped {
        SchemaVariant::Legacy
    } else {
        SchemaVariant::Current
    }
}

/// Rewrite a fetched document into the canonical shape.
///
/// Current documents pass through untouched, so normalizing twice is a no-op.
pub fn normalize(doc: SettingsDocument) -> (SchemaVariant, SettingsDocument) {
    let variant = detect_variant(&doc);
    match variant {
        SchemaVariant::Current => (variant, doc),
        SchemaVariant::Legacy => (variant, unwrap_map(doc, "")),
    }
}

fn unwrap_map(map: SettingsDocument, prefix: &str) -> SettingsDocument {
    map.into_iter()
        .map(|(key, value)| {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            let value = match value {
                Value::Object(mut inner)
                    if is_plain_wrapper(&inner) && !RETAINED_WRAPPERS.contains(&path.as_str()) =>
                {
                    inner.remove("value").unwrap_or(Value::Null)
                }
                // Bounded leaves keep min/max for the numeric setter
                Value::Object(inner) if inner.contains_key("value") => Value::Object(inner),
                Value::Object(inner) => Value::Object(unwrap_map(inner, &path)),
                other => other,
            };
            (key, value)
        })
        .collect()
}

/// Render the canonical document in the shape Docker Desktop accepts on write.
///
/// Wrapped leaves collapse to their value, so bound metadata is never sent back.
/// Read-only entries (`locked` without `value`) are dropped and the daemon entry
/// collapses to its raw `json` string.
pub fn to_write_form(doc: &SettingsDocument) -> Value {
    Value::Object(write_map(doc))
}

fn write_map(map: &SettingsDocument) -> SettingsDocument {
    map.iter()
        .filter_map(|(key, value)| write_value(value).map(|v| (key.clone(), v)))
        .collect()
}

fn write_value(value: &Value) -> Option<Value> {
    let Value::Object(map) = value else {
        return Some(value.clone());
    };

    if map.contains_key("locks") {
        if let Some(json) = map.get("json") {
            return Some(json.clone());
        }
    }
    if map.contains_key("locked") {
        return map.get("value").cloned();
    }
    Some(Value::Object(write_map(map)))
}
