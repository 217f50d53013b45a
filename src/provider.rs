//! Color-provider seam and the default deterministic provider.
//!
//! The default provider maps an identifier to a base color from the Office
//! chart palette via a stable hash, then applies a deterministic shade so
//! identifiers that collide on the same palette slot still separate.

use crate::models::ColorValue;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic default-color generator keyed by an identifier string.
/// The same identifier must yield the same color across distinct engine
/// instances; sequencing is identifier-driven, not call-order-driven.
pub trait ColorProvider {
    fn color(&self, seed: &str) -> ColorValue;
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [(u8, u8, u8); 10] = [
    (68, 114, 196),  // blue      (#4472C4)
    (237, 125, 49),  // orange    (#ED7D31)
    (165, 165, 165), // gray      (#A5A5A5)
    (255, 192, 0),   // gold      (#FFC000)
    (91, 155, 213),  // light blue(#5B9BD5)
    (112, 173, 71),  // green     (#70AD47)
    (38, 68, 120),   // dark blue (#264478)
    (158, 72, 14),   // dark org. (#9E480E)
    (99, 99, 99),    // dark gray (#636363)
    (153, 115, 0),   // brownish  (#997300)
];

/// Default provider over the Office palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfficePaletteProvider;

impl ColorProvider for OfficePaletteProvider {
    fn color(&self, seed: &str) -> ColorValue {
        let h = stable_hash64(seed);
        let base = OFFICE10[(h as usize) % OFFICE10.len()];
        // Brightness factor in [0.75, 1.25), from an independent rotation
        // of the same hash.
        let factor = 0.75 + 0.5 * ((h.rotate_left(17) % 100) as f64 / 100.0);
        let (r, g, b) = adjust_brightness(base, factor);
        ColorValue::new(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

fn stable_hash64<T: Hash>(value: T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn adjust_brightness(color: (u8, u8, u8), factor: f64) -> (u8, u8, u8) {
    let scale = |c: u8| ((c as f64 * factor).clamp(0.0, 255.0)) as u8;
    (scale(color.0), scale(color.1), scale(color.2))
}
