//! The update cycle: group extraction, color memoization, and override
//! reconciliation, driven by the host's update callback.

use crate::config::{self, OverrideStore};
use crate::groups::{self, MalformedRecord};
use crate::instances::{self, InstanceDescriptor};
use crate::memo::ColorMemo;
use crate::models::{ColorValue, FeatureRecord, GroupColorEntry};
use crate::provider::{ColorProvider, OfficePaletteProvider};
use crate::roles::{GradientClassifier, KindClassifier, RoleMap};
use log::warn;
use serde_json::Value;
use thiserror::Error;

/// Why an update cycle failed. The engine never publishes a partial result:
/// on failure the previous group-color assignment stays live, and the caller
/// decides whether to log and carry on.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),
}

/// What a successful update cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No field is bound to the color role; the published list was cleared.
    NoColorBinding,
    /// The bound field is continuous; categorical palette logic stood down.
    GradientBinding,
    /// Group colors were recomputed from the current record batch.
    Resolved { groups: usize },
}

/// Palette engine bound to one visualization instance.
///
/// Owns the color memo and the published group-color list exclusively; both
/// live for the engine's lifetime. Update cycles are serialized by the host,
/// so no internal synchronization is needed.
pub struct PaletteEngine {
    provider: Box<dyn ColorProvider>,
    classifier: Box<dyn GradientClassifier>,
    memo: ColorMemo,
    group_colors: Vec<GroupColorEntry>,
}

impl PaletteEngine {
    /// Engine with the default Office-palette provider and kind-based
    /// gradient classifier.
    pub fn new() -> Self {
        Self::with_provider(Box::new(OfficePaletteProvider), Box::new(KindClassifier))
    }

    /// Engine with host-supplied capabilities.
    pub fn with_provider(
        provider: Box<dyn ColorProvider>,
        classifier: Box<dyn GradientClassifier>,
    ) -> Self {
        Self {
            provider,
            classifier,
            memo: ColorMemo::new(),
            group_colors: Vec::new(),
        }
    }

    /// Baseline color for a group, assigning and memoizing one on first
    /// sight. Repeated calls return the identical value.
    pub fn get_color(&mut self, group: &str) -> ColorValue {
        self.memo.resolve(group, self.provider.as_ref())
    }

    /// Resolved entries from the last successful cycle, in extraction order.
    pub fn group_colors(&self) -> &[GroupColorEntry] {
        &self.group_colors
    }

    /// Settings-panel projection of the current entries.
    pub fn enumerate_instances(&self, object_name: &str) -> Vec<InstanceDescriptor> {
        instances::enumerate_instances(&self.group_colors, object_name)
    }

    /// One update cycle.
    ///
    /// With no color binding, or a gradient one, the published list is
    /// cleared and the memo left untouched, so rebinding later reuses the
    /// colors already assigned. Otherwise the list is rebuilt: each group in
    /// extraction order gets its memoized color unless the configuration
    /// snapshot carries a well-formed override, which supersedes it and
    /// becomes the new memoized baseline.
    ///
    /// The new list is committed only on success; a failing cycle leaves the
    /// previous assignment in place and reports why.
    pub fn update(
        &mut self,
        role_map: &RoleMap,
        records: &[FeatureRecord],
        objects: Option<&Value>,
    ) -> Result<UpdateOutcome, UpdateError> {
        let Some(role) = role_map.color.as_ref() else {
            self.group_colors.clear();
            return Ok(UpdateOutcome::NoColorBinding);
        };
        if self.classifier.should_use_gradient(role) {
            self.group_colors.clear();
            return Ok(UpdateOutcome::GradientBinding);
        }

        let groups = groups::extract_groups(records, role)?;
        let overrides = config::override_store(objects);
        self.group_colors = self.create_group_colors(&groups, &overrides);
        Ok(UpdateOutcome::Resolved {
            groups: self.group_colors.len(),
        })
    }

    /// Host-adapter cycle: logs a failed update and keeps the previous
    /// group-color assignment live. Stale coloring beats a crashed visual.
    pub fn resolve(
        &mut self,
        role_map: &RoleMap,
        records: &[FeatureRecord],
        objects: Option<&Value>,
    ) {
        if let Err(err) = self.update(role_map, records, objects) {
            warn!("group color update failed, keeping previous assignment: {err}");
        }
    }

    fn create_group_colors(
        &mut self,
        groups: &[String],
        overrides: &OverrideStore,
    ) -> Vec<GroupColorEntry> {
        groups
            .iter()
            .map(|group| {
                let mut color = self.memo.resolve(group, self.provider.as_ref());
                if let Some(chosen) = overrides.fill_color(group) {
                    color = chosen.clone();
                    self.memo.set(group, color.clone());
                }
                GroupColorEntry {
                    name: group.clone(),
                    color,
                }
            })
            .collect()
    }
}

impl Default for PaletteEngine {
    fn default() -> Self {
        Self::new()
    }
}
