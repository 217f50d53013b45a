//! map_palette
//!
//! Deterministic categorical color assignment for interactive map visuals.
//! Each distinct value of the field bound to the color role gets a stable
//! default color, memoized for the life of the visualization instance, and
//! users can override any group's color through persisted visual
//! configuration that survives across sessions.
//!
//! ### Features
//! - Ordered, distinct group extraction from feature-record batches
//! - Identifier-keyed deterministic default colors (pluggable provider)
//! - Persisted per-group overrides that supersede and rebaseline defaults
//! - Settings-panel projection of the resolved assignments
//! - Typed update-cycle results; a failed cycle keeps the previous colors
//!
//! ### Example
//! ```
//! use map_palette::{ColorRole, FeatureRecord, PaletteEngine, RoleMap};
//! use serde_json::json;
//!
//! let mut engine = PaletteEngine::new();
//! let roles = RoleMap {
//!     color: Some(ColorRole::categorical("segment")),
//! };
//! let records = vec![
//!     FeatureRecord::new(json!({ "segment": "retail" })),
//!     FeatureRecord::new(json!({ "segment": "wholesale" })),
//!     FeatureRecord::new(json!({ "segment": "retail" })),
//! ];
//! engine.update(&roles, &records, None)?;
//! assert_eq!(engine.group_colors().len(), 2);
//! let panel = engine.enumerate_instances("dataColorsPalette");
//! assert_eq!(panel[0].display_name, "retail");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod groups;
pub mod instances;
pub mod memo;
pub mod models;
pub mod provider;
pub mod roles;

pub use engine::{PaletteEngine, UpdateError, UpdateOutcome};
pub use instances::InstanceDescriptor;
pub use models::{ColorValue, FeatureRecord, GroupColorEntry};
pub use provider::{ColorProvider, OfficePaletteProvider};
pub use roles::{ColorRole, FieldKind, GradientClassifier, KindClassifier, RoleMap};
