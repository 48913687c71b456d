//! Settings Tree
//!
//! Path-addressed view over the Docker Desktop settings document: dotted path parsing,
//! navigation, schema normalization, typed setters and the change-detection write gate.
//! The document is kept as a `serde_json::Value` tree so every navigation step matches on
//! the concrete variant it finds.

use serde_json::{Map, Value};

pub mod navigate;
pub mod normalize;
pub mod path;
pub mod setters;
pub mod writer;

pub use navigate::{lookup, lookup_map_at, lookup_map_at_mut, lookup_mut, lookup_parent_mut};
pub use normalize::{detect_variant, normalize, to_write_form, SchemaVariant};
pub use path::SettingPath;
pub use setters::{
    apply_setting, ensure_min_cpus, get_setting, set_file_sharing, set_kubernetes_enabled,
    LeafConstraint,
};
pub use writer::WriteGate;

/// Canonical in-memory settings document
pub type SettingsDocument = Map<String, Value>;

/// Kubernetes enable toggle
pub const KUBERNETES_ENABLED: &str = "vm.kubernetes.enabled";

/// File sharing path list
pub const FILE_SHARING: &str = "vm.fileSharing";

/// CPU count resource limit
pub const CPUS: &str = "vm.resources.cpus";

/// Human-readable kind of a settings value, used in error messages.
///
/// Numbers report as `float64` because every numeric setting is coerced to a double.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float64",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}
