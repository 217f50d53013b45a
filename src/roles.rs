//! Field-role mapping supplied by the host on every update, plus the
//! gradient-classification seam.

use serde::{Deserialize, Serialize};

/// Declared kind of a field bound to the color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Discrete values that partition records into groups.
    Categorical,
    /// Continuous values rendered with a gradient ramp.
    Measure,
}

/// The field currently bound to the color role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRole {
    /// Field name looked up in each record's property map.
    pub display_name: String,
    pub field_kind: FieldKind,
}

impl ColorRole {
    pub fn categorical(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            field_kind: FieldKind::Categorical,
        }
    }

    pub fn measure(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            field_kind: FieldKind::Measure,
        }
    }
}

/// Current role-to-field mapping. Only the color role matters here; an
/// unbound color role skips palette work for the cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMap {
    pub color: Option<ColorRole>,
}

/// Host policy deciding whether a bound color field is continuous. Gradient
/// rendering itself is the host's business; the palette engine only needs
/// the yes/no answer to stand down.
pub trait GradientClassifier {
    fn should_use_gradient(&self, role: &ColorRole) -> bool;
}

/// Default policy: measures get gradients, categorical fields do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindClassifier;

impl GradientClassifier for KindClassifier {
    fn should_use_gradient(&self, role: &ColorRole) -> bool {
        role.field_kind == FieldKind::Measure
    }
}
