use podium_model::{
    builtin_roadmap, parse_roadmap, HorizonKey, BUILTIN_ROADMAP_JSON, HORIZON_KEYS,
};
use serde_json::Value;

fn builtin_value() -> Value {
    serde_json::from_str(BUILTIN_ROADMAP_JSON).expect("builtin json")
}

#[test]
fn builtin_document_satisfies_every_invariant() {
    let document = builtin_roadmap();
    for key in HORIZON_KEYS {
        let horizon = document.horizon(key);
        assert!(!horizon.label.is_empty());
        assert!(!horizon.personas.is_empty(), "{key} ships personas");
        assert_eq!(horizon.timeline.len(), 3, "{key} timeline has three entries");
    }
}

#[test]
fn builtin_document_covers_optional_field_spread() {
    let document = builtin_roadmap();
    // h1 carries the full optional surface; h2/h3 exercise the absent paths.
    let h1 = document.horizon(HorizonKey::H1);
    assert!(!h1.operating_model.roles.is_empty());
    assert!(h1.operating_model.figure.is_some());
    assert!(h1.technical_evolution.integration_table.is_none());

    let h2 = document.horizon(HorizonKey::H2);
    assert!(h2.operating_model.roles.is_empty());
    assert!(h2.technical_evolution.integration_table.is_some());
    assert!(h2.technical_evolution.figure.is_some());

    let h3 = document.horizon(HorizonKey::H3);
    assert!(h3.operating_model.roles.is_empty());
    assert!(h3.operating_model.figure.is_none());
    assert!(h3.technical_evolution.integration_table.is_none());
}

#[test]
fn missing_horizon_is_rejected() {
    let mut value = builtin_value();
    value
        .get_mut("horizons")
        .and_then(Value::as_object_mut)
        .expect("horizons object")
        .remove("h2");
    let text = serde_json::to_string(&value).expect("serialize");
    let err = parse_roadmap(&text).expect_err("missing horizon must fail");
    assert!(err.0.contains("h2"), "error names the missing key: {err}");
}

#[test]
fn empty_horizon_label_is_rejected() {
    let mut value = builtin_value();
    value["horizons"]["h1"]["label"] = Value::String(String::new());
    let text = serde_json::to_string(&value).expect("serialize");
    let err = parse_roadmap(&text).expect_err("empty label must fail");
    assert!(err.0.contains("label"), "{err}");
}

#[test]
fn trajectory_value_outside_domain_is_rejected() {
    let mut value = builtin_value();
    value["trajectory"]["points"][0]["efficiency"] = Value::from(11.0);
    let text = serde_json::to_string(&value).expect("serialize");
    let err = parse_roadmap(&text).expect_err("out-of-domain value must fail");
    assert!(err.0.contains("domain"), "{err}");
}

#[test]
fn duplicate_trajectory_horizon_is_rejected() {
    let mut value = builtin_value();
    value["trajectory"]["points"][1]["horizon"] = Value::String("h1".to_string());
    let text = serde_json::to_string(&value).expect("serialize");
    let err = parse_roadmap(&text).expect_err("duplicate point must fail");
    assert!(err.0.contains("duplicate"), "{err}");
}

#[test]
fn missing_cost_stage_is_rejected() {
    let mut value = builtin_value();
    value["cost_impact"]["chart"]["stages"]
        .as_object_mut()
        .expect("stages object")
        .remove("h3");
    let text = serde_json::to_string(&value).expect("serialize");
    let err = parse_roadmap(&text).expect_err("missing stage must fail");
    assert!(err.0.contains("h3"), "{err}");
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = parse_roadmap("{not json").expect_err("parse must fail");
    assert!(err.0.contains("parse failed"), "{err}");
}
