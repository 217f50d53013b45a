// Settings-panel projection of resolved group colors.

use map_palette::{ColorRole, ColorValue, FeatureRecord, PaletteEngine, RoleMap};
use serde_json::json;

fn categorical_roles() -> RoleMap {
    RoleMap {
        color: Some(ColorRole::categorical("segment")),
    }
}

#[test]
fn descriptors_mirror_resolved_entries() {
    let mut engine = PaletteEngine::new();
    let batch = vec![
        FeatureRecord::new(json!({ "segment": "harbor" })),
        FeatureRecord::new(json!({ "segment": "airport" })),
    ];
    engine.update(&categorical_roles(), &batch, None).unwrap();

    let descriptors = engine.enumerate_instances("dataColorsPalette");
    assert_eq!(descriptors.len(), 2);
    for (descriptor, entry) in descriptors.iter().zip(engine.group_colors()) {
        assert_eq!(descriptor.object_name, "dataColorsPalette");
        assert_eq!(descriptor.display_name, entry.name);
        assert_eq!(descriptor.selector.id, entry.name);
        assert_eq!(descriptor.properties.fill.solid.color, entry.color);
    }
}

#[test]
fn edited_descriptor_routes_back_to_the_override_slot() {
    // A host edit produces a config snapshot keyed by the selector id; a
    // later cycle must honor it for that exact group.
    let mut engine = PaletteEngine::new();
    let batch = vec![
        FeatureRecord::new(json!({ "segment": "harbor" })),
        FeatureRecord::new(json!({ "segment": "airport" })),
    ];
    let roles = categorical_roles();
    engine.update(&roles, &batch, None).unwrap();

    let selector = engine.enumerate_instances("dataColorsPalette")[1]
        .selector
        .id
        .clone();
    let objects = json!({
        "dataColorsPalette": {
            "$instances": {
                (selector.as_str()): { "fill": { "solid": { "color": "#ABCDEF" } } }
            }
        }
    });

    engine.update(&roles, &batch, Some(&objects)).unwrap();
    let descriptors = engine.enumerate_instances("dataColorsPalette");
    assert_eq!(
        descriptors[1].properties.fill.solid.color,
        ColorValue::from("#ABCDEF")
    );
    // The other group keeps its default.
    assert_eq!(descriptors[0].properties.fill.solid.color, engine.get_color("harbor"));
}

#[test]
fn empty_state_enumerates_nothing() {
    let engine = PaletteEngine::new();
    assert!(engine.enumerate_instances("dataColorsPalette").is_empty());
}
