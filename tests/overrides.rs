// Persisted-override reconciliation: precedence, write-back, and lenient
// handling of malformed configuration.

use map_palette::{ColorRole, ColorValue, FeatureRecord, PaletteEngine, RoleMap};
use serde_json::json;

fn records(values: &[&str]) -> Vec<FeatureRecord> {
    values
        .iter()
        .map(|v| FeatureRecord::new(json!({ "segment": v })))
        .collect()
}

fn categorical_roles() -> RoleMap {
    RoleMap {
        color: Some(ColorRole::categorical("segment")),
    }
}

fn override_for(group: &str, color: &str) -> serde_json::Value {
    json!({
        "dataColorsPalette": {
            "$instances": {
                (group): { "fill": { "solid": { "color": color } } }
            }
        }
    })
}

#[test]
fn override_supersedes_the_default() {
    let mut engine = PaletteEngine::new();
    let objects = override_for("A", "#ff0000");

    // Baseline for B without any override, for comparison.
    let baseline_b = engine.get_color("B");

    engine
        .update(&categorical_roles(), &records(&["A", "B"]), Some(&objects))
        .unwrap();

    let entries = engine.group_colors();
    assert_eq!(entries[0].name, "A");
    assert_eq!(entries[0].color, ColorValue::from("#ff0000"));
    assert_eq!(entries[1].name, "B");
    assert_eq!(entries[1].color, baseline_b);
}

#[test]
fn override_becomes_the_new_baseline() {
    let mut engine = PaletteEngine::new();
    let objects = override_for("A", "#ff0000");
    let batch = records(&["A"]);
    let roles = categorical_roles();

    engine.update(&roles, &batch, Some(&objects)).unwrap();

    // Next cycle has no configuration snapshot; the override persists via
    // the memo.
    engine.update(&roles, &batch, None).unwrap();
    assert_eq!(engine.group_colors()[0].color, ColorValue::from("#ff0000"));
    assert_eq!(engine.get_color("A"), ColorValue::from("#ff0000"));
}

#[test]
fn malformed_configuration_falls_back_to_defaults() {
    let roles = categorical_roles();
    let batch = records(&["A"]);

    let mut plain = PaletteEngine::new();
    plain.update(&roles, &batch, None).unwrap();
    let expected = plain.group_colors()[0].color.clone();

    for objects in [
        json!({}),
        json!({ "dataColorsPalette": "not an object" }),
        json!({ "dataColorsPalette": { "$instances": { "A": { "fill": {} } } } }),
        json!({ "dataColorsPalette": { "$instances": { "B": { "fill": { "solid": { "color": "#123456" } } } } } }),
    ] {
        let mut engine = PaletteEngine::new();
        engine.update(&roles, &batch, Some(&objects)).unwrap();
        assert_eq!(engine.group_colors()[0].color, expected);
    }
}

#[test]
fn override_for_the_empty_group_applies() {
    let mut engine = PaletteEngine::new();
    let objects = override_for("", "#00ff00");
    let batch = records(&[""]);

    engine
        .update(&categorical_roles(), &batch, Some(&objects))
        .unwrap();
    assert_eq!(engine.group_colors()[0].name, "");
    assert_eq!(engine.group_colors()[0].color, ColorValue::from("#00ff00"));
}
