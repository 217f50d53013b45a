//! Projection of resolved group colors into settings-panel entries.
//!
//! Each descriptor mirrors the shape the host persists edits back into:
//! the property path is `fill.solid.color` and the selector id is the group
//! identifier, so an edit lands in the matching override slot under
//! `dataColorsPalette.$instances`.

use crate::models::{ColorValue, GroupColorEntry};
use serde::Serialize;

/// One editable settings-panel entry for a group's color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDescriptor {
    pub object_name: String,
    /// Display label shown to the user; equals the group identifier.
    pub display_name: String,
    pub properties: InstanceProperties,
    pub selector: Selector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceProperties {
    pub fill: FillProperty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillProperty {
    pub solid: SolidColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidColor {
    pub color: ColorValue,
}

/// Routes a later user edit back to the group's override slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    pub id: String,
}

/// Project the resolved entries into UI instance descriptors. Pure; an
/// empty entry list yields an empty sequence.
pub fn enumerate_instances(
    entries: &[GroupColorEntry],
    object_name: &str,
) -> Vec<InstanceDescriptor> {
    entries
        .iter()
        .map(|entry| InstanceDescriptor {
            object_name: object_name.to_string(),
            display_name: entry.name.clone(),
            properties: InstanceProperties {
                fill: FillProperty {
                    solid: SolidColor {
                        color: entry.color.clone(),
                    },
                },
            },
            selector: Selector {
                id: entry.name.clone(),
            },
        })
        .collect()
}
