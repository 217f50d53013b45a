//! Recovery of persisted per-group color overrides from the host's
//! visual-configuration snapshot.
//!
//! The snapshot is the host's `metadata.objects` JSON: overrides live under
//! `dataColorsPalette.$instances`, keyed by group identifier, each resolving
//! through `fill.solid.color`. Parsing is lenient per entry: a missing or
//! shape-mismatched entry falls back to the memoized color instead of
//! failing the cycle.

use crate::models::ColorValue;
use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;

/// Configuration object holding per-group fill overrides.
pub const DATA_COLORS_OBJECT: &str = "dataColorsPalette";

#[derive(Debug, Deserialize)]
struct FillOverride {
    fill: Option<Fill>,
}

#[derive(Debug, Deserialize)]
struct Fill {
    solid: Option<Solid>,
}

#[derive(Debug, Deserialize)]
struct Solid {
    color: Option<String>,
}

/// Well-formed overrides recovered from one configuration snapshot.
/// Read-only from the engine's perspective.
#[derive(Debug, Default)]
pub struct OverrideStore {
    colors: AHashMap<String, ColorValue>,
}

impl OverrideStore {
    /// Persisted override color for a group, if one exists.
    pub fn fill_color(&self, group: &str) -> Option<&ColorValue> {
        self.colors.get(group)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Recover the override store from the host's `metadata.objects` snapshot.
/// Absent or malformed configuration yields an empty store; individual
/// malformed entries are skipped.
pub fn override_store(objects: Option<&Value>) -> OverrideStore {
    let Some(instances) = objects
        .and_then(|o| o.get(DATA_COLORS_OBJECT))
        .and_then(|palette| palette.get("$instances"))
        .and_then(Value::as_object)
    else {
        return OverrideStore::default();
    };

    let mut colors = AHashMap::new();
    for (group, raw) in instances {
        if let Ok(FillOverride {
            fill:
                Some(Fill {
                    solid: Some(Solid { color: Some(color) }),
                }),
        }) = FillOverride::deserialize(raw)
        {
            colors.insert(group.clone(), ColorValue::new(color));
        }
    }
    OverrideStore { colors }
}
