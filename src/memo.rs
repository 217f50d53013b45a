//! Session-lifetime memo of group → assigned color.

use crate::models::ColorValue;
use crate::provider::ColorProvider;
use ahash::AHashMap;

/// Lazily populated group → color mapping. Append-only within a session
/// except when an override overwrites an entry; never pruned, so a group
/// that disappears and later reappears gets its previous color back.
///
/// Presence is an explicit key check: an empty identifier is an ordinary
/// key, never mistaken for "unset".
#[derive(Debug, Default)]
pub struct ColorMemo {
    colors: AHashMap<String, ColorValue>,
}

impl ColorMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored color, if the group has been assigned one.
    pub fn get(&self, group: &str) -> Option<&ColorValue> {
        self.colors.get(group)
    }

    /// Memoized color for a group: the stored value if present, otherwise a
    /// fresh one from the provider, stored before returning.
    pub fn resolve(&mut self, group: &str, provider: &dyn ColorProvider) -> ColorValue {
        if let Some(color) = self.colors.get(group) {
            return color.clone();
        }
        let color = provider.color(group);
        self.colors.insert(group.to_string(), color.clone());
        color
    }

    /// Overwrite the baseline for a group (persisted-override write-back).
    pub fn set(&mut self, group: &str, color: ColorValue) {
        self.colors.insert(group.to_string(), color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
