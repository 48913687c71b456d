//! Typed setters
//!
//! Each setter coerces a string value to the type of the setting it targets, validates it,
//! and mutates the canonical document in place. They all report whether the document
//! actually changed so callers can skip redundant writes.

use super::navigate::{lookup, lookup_mut, lookup_parent_mut};
use super::path::SettingPath;
use super::{value_kind, SettingsDocument, CPUS, FILE_SHARING, KUBERNETES_ENABLED};
use crate::error::{Bound, SettingsError};
use serde_json::{json, Number, Value};

/// `min`/`max` metadata carried next to a bounded leaf's `value`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeafConstraint {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LeafConstraint {
    pub fn of(wrapper: &SettingsDocument) -> Self {
        Self {
            min: wrapper.get("min").and_then(Value::as_f64),
            max: wrapper.get("max").and_then(Value::as_f64),
        }
    }

    pub fn check(&self, path: &SettingPath, value: f64) -> Result<(), SettingsError> {
        let violated = match (self.min, self.max) {
            (_, Some(max)) if value > max => Some((Bound::Max, max)),
            (Some(min), _) if value < min => Some((Bound::Min, min)),
            _ => None,
        };

        match violated {
            Some((bound, limit)) => Err(SettingsError::OutOfRange {
                path: path.as_str().to_string(),
                value,
                bound,
                limit,
            }),
            None => Ok(()),
        }
    }
}

/// Set the setting at `path` from its string form.
///
/// The kubernetes toggle and the file sharing list have dedicated setters; every other
/// leaf is coerced according to the variant it currently holds.
pub fn apply_setting(
    doc: &mut SettingsDocument,
    path: &str,
    value: &str,
) -> Result<bool, SettingsError> {
    let path = SettingPath::parse(path)?;
    match path.as_str() {
        KUBERNETES_ENABLED => {
            let enabled = parse_bool(&path, value)?;
            set_kubernetes_enabled(doc, enabled)
        }
        FILE_SHARING => set_file_sharing(doc, value),
        _ => {
            let (parent, key) = lookup_parent_mut(doc, &path)?;
            // Addressing `.value` directly still honors the wrapper's bounds
            if key == "value" {
                return set_wrapped(parent, &path, value);
            }
            let slot = parent.get_mut(key).ok_or_else(|| SettingsError::PathNotFound {
                path: path.as_str().to_string(),
            })?;
            set_leaf(slot, &path, value)
        }
    }
}

/// Read a setting; wrapped leaves yield their `value`
pub fn get_setting(doc: &SettingsDocument, path: &str) -> Result<Value, SettingsError> {
    let path = SettingPath::parse(path)?;
    match lookup(doc, &path)? {
        Value::Object(wrapper) if wrapper.contains_key("value") => {
            Ok(wrapper.get("value").cloned().unwrap_or(Value::Null))
        }
        other => Ok(other.clone()),
    }
}

/// Turn kubernetes on or off, leaving the other kubernetes flags alone
pub fn set_kubernetes_enabled(
    doc: &mut SettingsDocument,
    enabled: bool,
) -> Result<bool, SettingsError> {
    let path = SettingPath::parse(KUBERNETES_ENABLED)?;
    match lookup_mut(doc, &path)? {
        Value::Bool(current) if *current == enabled => Ok(false),
        Value::Bool(current) => {
            *current = enabled;
            Ok(true)
        }
        other => Err(unsupported(&path, other)),
    }
}

/// Replace the file sharing list with the comma-separated paths in `value`.
///
/// Entries are rebuilt in input order with `cached: false`. The list only counts as
/// changed when the rebuilt sequence differs from the current one. A value naming no
/// paths at all is rejected rather than unsharing everything.
pub fn set_file_sharing(doc: &mut SettingsDocument, value: &str) -> Result<bool, SettingsError> {
    let path = SettingPath::parse(FILE_SHARING)?;
    let entries = parse_path_list(value);
    if entries.is_empty() {
        return Err(parse_error(&path, value, "comma-separated path list"));
    }
    let entries = Value::Array(entries);

    let (parent, key) = lookup_parent_mut(doc, &path)?;
    let slot = match parent.get_mut(key) {
        Some(Value::Object(wrapper)) => wrapper
            .get_mut("value")
            .ok_or(SettingsError::Unsupported {
                path: path.as_str().to_string(),
                found: "map",
            })?,
        Some(slot) => slot,
        None => {
            return Err(SettingsError::PathNotFound {
                path: path.as_str().to_string(),
            })
        }
    };

    if !slot.is_array() {
        return Err(unsupported(&path, slot));
    }
    replace_if_different(slot, entries)
}

/// Raise the VM's CPU count to at least `min`
pub fn ensure_min_cpus(doc: &mut SettingsDocument, min: u32) -> Result<bool, SettingsError> {
    let path = SettingPath::parse(CPUS)?;
    let desired = f64::from(min);

    let (slot, constraint) = match lookup_mut(doc, &path)? {
        Value::Object(wrapper) => {
            let constraint = LeafConstraint::of(wrapper);
            let slot = wrapper.get_mut("value").ok_or(SettingsError::Unsupported {
                path: path.as_str().to_string(),
                found: "map",
            })?;
            (slot, constraint)
        }
        slot => (slot, LeafConstraint::default()),
    };

    let Some(current) = slot.as_f64() else {
        return Err(unsupported(&path, slot));
    };
    if current >= desired {
        return Ok(false);
    }
    constraint.check(&path, desired)?;
    *slot = number_value(desired);
    Ok(true)
}

fn set_leaf(slot: &mut Value, path: &SettingPath, raw: &str) -> Result<bool, SettingsError> {
    match slot {
        Value::Object(wrapper) => set_wrapped(wrapper, path, raw),
        Value::Bool(_) => set_bool(slot, path, raw),
        Value::Number(_) => set_number(slot, LeafConstraint::default(), path, raw),
        Value::String(_) => set_string(slot, raw),
        _ => Err(unsupported(path, slot)),
    }
}

fn set_wrapped(
    wrapper: &mut SettingsDocument,
    path: &SettingPath,
    raw: &str,
) -> Result<bool, SettingsError> {
    let constraint = LeafConstraint::of(wrapper);
    let Some(slot) = wrapper.get_mut("value") else {
        return Err(SettingsError::Unsupported {
            path: path.as_str().to_string(),
            found: "map",
        });
    };

    match slot {
        Value::Number(_) => set_number(slot, constraint, path, raw),
        Value::Bool(_) => set_bool(slot, path, raw),
        Value::String(_) => set_string(slot, raw),
        _ => Err(unsupported(path, slot)),
    }
}

fn set_number(
    slot: &mut Value,
    constraint: LeafConstraint,
    path: &SettingPath,
    raw: &str,
) -> Result<bool, SettingsError> {
    let desired = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| parse_error(path, raw, "float64"))?;

    constraint.check(path, desired)?;
    if slot.as_f64() == Some(desired) {
        return Ok(false);
    }
    *slot = number_value(desired);
    Ok(true)
}

fn set_bool(slot: &mut Value, path: &SettingPath, raw: &str) -> Result<bool, SettingsError> {
    let desired = parse_bool(path, raw)?;
    replace_if_different(slot, Value::Bool(desired))
}

fn set_string(slot: &mut Value, raw: &str) -> Result<bool, SettingsError> {
    replace_if_different(slot, Value::String(raw.to_string()))
}

fn replace_if_different(slot: &mut Value, desired: Value) -> Result<bool, SettingsError> {
    if *slot == desired {
        return Ok(false);
    }
    *slot = desired;
    Ok(true)
}

fn parse_bool(path: &SettingPath, raw: &str) -> Result<bool, SettingsError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(parse_error(path, raw, "bool")),
    }
}

fn parse_path_list(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| json!({"path": p, "cached": false}))
        .collect()
}

/// Whole numbers are stored as JSON integers so they serialize as `4`, not `4.0`
fn number_value(value: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

fn parse_error(path: &SettingPath, raw: &str, expected: &'static str) -> SettingsError {
    SettingsError::ParseError {
        path: path.as_str().to_string(),
        value: raw.to_string(),
        expected,
    }
}

fn unsupported(path: &SettingPath, found: &Value) -> SettingsError {
    SettingsError::Unsupported {
        path: path.as_str().to_string(),
        found: value_kind(found),
    }
}
