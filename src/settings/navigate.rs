//! Tree navigation over the settings document.
//!
//! Every intermediate segment must land on a map. A missing key reports the full requested
//! path; a non-map reports the sub-path where the walk stopped and what it found there.

use super::path::SettingPath;
use super::{value_kind, SettingsDocument};
use crate::error::SettingsError;
use serde_json::Value;

fn not_found(path: &SettingPath) -> SettingsError {
    SettingsError::PathNotFound {
        path: path.as_str().to_string(),
    }
}

fn descend<'a>(
    map: &'a SettingsDocument,
    segment: &str,
    depth: usize,
    path: &SettingPath,
) -> Result<&'a SettingsDocument, SettingsError> {
    match map.get(segment) {
        Some(Value::Object(child)) => Ok(child),
        Some(other) => Err(SettingsError::NotAMap {
            path: path.prefix(depth + 1),
            found: value_kind(other),
        }),
        None => Err(not_found(path)),
    }
}

fn walk<'a>(
    doc: &'a SettingsDocument,
    segments: &[String],
    path: &SettingPath,
) -> Result<&'a SettingsDocument, SettingsError> {
    let mut current = doc;
    for (depth, segment) in segments.iter().enumerate() {
        current = descend(current, segment, depth, path)?;
    }
    Ok(current)
}

fn walk_mut<'a>(
    doc: &'a mut SettingsDocument,
    segments: &[String],
    path: &SettingPath,
) -> Result<&'a mut SettingsDocument, SettingsError> {
    let mut current = doc;
    for (depth, segment) in segments.iter().enumerate() {
        current = match current.get_mut(segment.as_str()) {
            Some(Value::Object(child)) => child,
            Some(other) => {
                return Err(SettingsError::NotAMap {
                    path: path.prefix(depth + 1),
                    found: value_kind(other),
                })
            }
            None => return Err(not_found(path)),
        };
    }
    Ok(current)
}

/// Resolve the node at `path`
pub fn lookup<'a>(doc: &'a SettingsDocument, path: &SettingPath) -> Result<&'a Value, SettingsError> {
    walk(doc, path.parent(), path)?
        .get(path.leaf())
        .ok_or_else(|| not_found(path))
}

/// Resolve the node at `path` for in-place mutation
pub fn lookup_mut<'a>(
    doc: &'a mut SettingsDocument,
    path: &SettingPath,
) -> Result<&'a mut Value, SettingsError> {
    walk_mut(doc, path.parent(), path)?
        .get_mut(path.leaf())
        .ok_or_else(|| not_found(path))
}

/// Resolve the map at `path`; every segment, the last included, must be a map
pub fn lookup_map_at<'a>(
    doc: &'a SettingsDocument,
    path: &SettingPath,
) -> Result<&'a SettingsDocument, SettingsError> {
    walk(doc, path.segments(), path)
}

pub fn lookup_map_at_mut<'a>(
    doc: &'a mut SettingsDocument,
    path: &SettingPath,
) -> Result<&'a mut SettingsDocument, SettingsError> {
    walk_mut(doc, path.segments(), path)
}

/// Resolve the container holding the leaf of `path`, for mutation.
///
/// Fails with `PathNotFound` unless the leaf key is already present in the container.
pub fn lookup_parent_mut<'a, 'p>(
    doc: &'a mut SettingsDocument,
    path: &'p SettingPath,
) -> Result<(&'a mut SettingsDocument, &'p str), SettingsError> {
    let parent = walk_mut(doc, path.parent(), path)?;
    if !parent.contains_key(path.leaf()) {
        return Err(not_found(path));
    }
    Ok((parent, path.leaf()))
}
