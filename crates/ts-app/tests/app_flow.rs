//! End-to-end coverage of the ts-app service layer: session handling,
//! comparison, report text, and the error chrome frontends rely on.

use ts_core::units::UnitSystem;
use ts_steam::{PropertyId, PropertyValue, Specification};

use ts_app::{
    ComparisonRequest, Session, StateComparison, StateSlot, compare_states, get_saturation_report,
    get_state_report, parse_value, to_json,
};

fn spec(first: PropertyId, value1: f64, second: PropertyId, value2: f64) -> Specification {
    Specification::new(
        PropertyValue::new(first, value1),
        PropertyValue::new(second, value2),
    )
}

#[test]
fn default_session_compares_identical_states() {
    let session = Session::default();
    let request = ComparisonRequest::from_session(&session);
    let comparison = compare_states(&request).expect("comparison succeeds");

    assert_eq!(comparison.state1.region, "superheated");
    assert_eq!(comparison.state2.region, "superheated");
    assert_eq!(comparison.delta.p, 0.0);
    assert_eq!(comparison.delta.t, 0.0);
    assert_eq!(comparison.delta.h, 0.0);
}

#[test]
fn comparison_reports_the_property_change() {
    let request = ComparisonRequest {
        units: UnitSystem::Si,
        state1: spec(PropertyId::Pressure, 1.0, PropertyId::Temperature, 150.0),
        state2: spec(PropertyId::Pressure, 10.0, PropertyId::Temperature, 300.0),
    };
    let comparison = compare_states(&request).expect("comparison succeeds");

    assert_eq!(comparison.delta.p, 9.0);
    assert_eq!(comparison.delta.t, 150.0);
    // h: 2776.6 -> 3051.6 kJ/kg
    assert!(
        (comparison.delta.h - 275.0).abs() < 3.0,
        "delta h = {}",
        comparison.delta.h
    );
}

#[test]
fn comparison_text_has_all_three_blocks() {
    let session = Session::default();
    let comparison =
        compare_states(&ComparisonRequest::from_session(&session)).expect("comparison succeeds");
    let text = comparison.text();

    assert!(text.starts_with("State 1 Properties:\nRegion = superheated"));
    assert!(text.contains("State 2 Properties:\n"));
    assert!(text.contains("Property change:\nT2-T1 = 0.000 C"));
    assert!(text.contains("Pressure = 1.000 (bar)"));
    assert!(text.contains("Quality = -1.000"));
}

#[test]
fn single_state_report_for_a_quality_pair() {
    let report = get_state_report(
        UnitSystem::Si,
        &spec(PropertyId::Pressure, 1.0, PropertyId::Quality, 0.5),
    )
    .expect("resolves");

    assert_eq!(report.region, "two-phase");
    assert_eq!(report.x, 0.5);
    assert!((report.t - 99.606).abs() < 0.01, "t = {}", report.t);
    let text = report.text();
    assert!(text.contains("Quality = 0.500"));
}

#[test]
fn errors_carry_the_state_slot_chrome() {
    let bad_numeric = parse_value("12a", StateSlot::Two).unwrap_err();
    assert_eq!(
        bad_numeric.to_string(),
        "Error: State 2 - Please enter valid numeric values."
    );

    let request = ComparisonRequest {
        units: UnitSystem::Si,
        state1: spec(PropertyId::Pressure, 1.0, PropertyId::Temperature, 150.0),
        state2: spec(PropertyId::Pressure, 1.0, PropertyId::Pressure, 2.0),
    };
    let duplicate = compare_states(&request).unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "Warning: State 2 - You cannot specify the same property twice."
    );

    let request = ComparisonRequest {
        units: UnitSystem::Si,
        state1: spec(PropertyId::Temperature, 150.0, PropertyId::Pressure, 1.0),
        state2: spec(PropertyId::Pressure, 1.0, PropertyId::Temperature, 150.0),
    };
    let unsupported = compare_states(&request).unwrap_err();
    assert_eq!(
        unsupported.to_string(),
        "Error in State 1 calculation: Unsupported property combination: t and p"
    );
}

#[test]
fn saturation_lookup_prefers_pressure() {
    let report = get_saturation_report(UnitSystem::Si, Some(10.0), Some(500.0))
        .expect("saturation resolves");
    // tsat(10 bar) is 179.886 C; the temperature argument is ignored.
    assert_eq!(report.p, 10.0);
    assert!((report.t - 179.886).abs() < 0.01, "t = {}", report.t);

    let from_t = get_saturation_report(UnitSystem::Si, None, Some(99.606))
        .expect("saturation resolves");
    assert!((from_t.p - 1.0).abs() < 0.001, "p = {}", from_t.p);

    let missing = get_saturation_report(UnitSystem::Si, None, None).unwrap_err();
    assert_eq!(
        missing.to_string(),
        "Must specify either pressure or temperature"
    );
}

#[test]
fn saturation_errors_surface_as_backend_messages() {
    let err = get_saturation_report(UnitSystem::Si, Some(300.0), None).unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("Backend error:"),
        "message = {message}"
    );
}

#[test]
fn unit_switch_then_compare_in_english() {
    let mut session = Session::default();
    session.set_unit_system(UnitSystem::English);
    let comparison =
        compare_states(&ComparisonRequest::from_session(&session)).expect("comparison succeeds");

    // 2776.6 kJ/kg over 2.326 is about 1193.7 btu/lb.
    assert!(
        (comparison.state1.h - 1193.7).abs() < 2.0,
        "h = {} btu/lb",
        comparison.state1.h
    );
    assert!(comparison.state1.text().contains("(psi)"));
}

#[test]
fn comparison_json_round_trips() {
    let session = Session::default();
    let comparison =
        compare_states(&ComparisonRequest::from_session(&session)).expect("comparison succeeds");

    let json = to_json(&comparison).expect("encodes");
    let back: StateComparison = serde_json::from_str(&json).expect("decodes");
    assert_eq!(back.state1.region, comparison.state1.region);
    assert_eq!(back.delta.h, comparison.delta.h);
    assert_eq!(back.state2.units, UnitSystem::Si);
}
