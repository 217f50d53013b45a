use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque color representation. Hex form (`#RRGGBB`) by convention, but the
/// engine only assigns and compares values, never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One resolved group → color assignment. The published sequence is rebuilt
/// fresh on every update cycle and has unique `name` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupColorEntry {
    pub name: String,
    pub color: ColorValue,
}

/// One feature record from the data pipeline. `properties` maps field names
/// to values and must be a JSON object; anything else fails the update cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub properties: Value,
}

impl FeatureRecord {
    pub fn new(properties: Value) -> Self {
        Self { properties }
    }
}

/// Coerce a field value to a group identifier.
///
/// Strings are used as-is (the empty string is a valid group), numbers and
/// booleans use their display form. JSON `null` and a missing field both
/// coerce to the degenerate `"null"` group rather than being dropped.
pub fn group_id_from_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        // Arrays/objects are not expected for a categorical field; their
        // compact JSON form still yields a stable identifier.
        Some(other) => other.to_string(),
    }
}
