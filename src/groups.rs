//! Group extraction: the ordered set of distinct values of the bound color
//! field across the current record batch.

use crate::models::{FeatureRecord, group_id_from_value};
use crate::roles::ColorRole;
use ahash::AHashSet;
use thiserror::Error;

/// A record whose `properties` is not a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record {index} has non-object properties")]
pub struct MalformedRecord {
    pub index: usize,
}

/// Scan every record, read the bound field from its property map, and
/// collect distinct values in insertion order. A missing field still yields
/// a group (the degenerate `"null"` one). Pure read of the inputs.
pub fn extract_groups(
    records: &[FeatureRecord],
    role: &ColorRole,
) -> Result<Vec<String>, MalformedRecord> {
    let mut seen = AHashSet::new();
    let mut ordered = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let properties = record
            .properties
            .as_object()
            .ok_or(MalformedRecord { index })?;
        let group = group_id_from_value(properties.get(&role.display_name));
        if seen.insert(group.clone()) {
            ordered.push(group);
        }
    }
    Ok(ordered)
}
