//! End-to-end state resolution against the IF97 backend.
//!
//! Region classification and the interpolated two-phase properties are
//! checked against textbook steam-table values with broad tolerances,
//! so backend refinements do not break the tests.

use ts_core::units::UnitSystem;
use ts_steam::{
    If97Table, PLACEHOLDER_QUALITY, PropertyId, PropertyValue, QUALITY_UNDEFINED, Region,
    ResolveError, Specification, SteamTable, TableError, resolve_state,
};

fn pt(p: f64, t: f64) -> Specification {
    Specification::new(
        PropertyValue::new(PropertyId::Pressure, p),
        PropertyValue::new(PropertyId::Temperature, t),
    )
}

fn px(p: f64, x: f64) -> Specification {
    Specification::new(
        PropertyValue::new(PropertyId::Pressure, p),
        PropertyValue::new(PropertyId::Quality, x),
    )
}

#[test]
fn superheated_steam_at_1_bar_150_c() {
    let table = If97Table::new(UnitSystem::Si);
    let state = resolve_state(&table, &pt(1.0, 150.0)).unwrap();

    assert_eq!(state.region, Region::Superheated);
    assert_eq!(state.x, QUALITY_UNDEFINED);
    // Steam tables: h ~ 2776.6 kJ/kg, v ~ 1.9364 m³/kg at this point
    assert!((state.h - 2776.6).abs() < 2.0, "h = {} kJ/kg", state.h);
    assert!((state.v - 1.9364).abs() < 0.01, "v = {} m³/kg", state.v);
}

#[test]
fn superheated_steam_at_10_bar_300_c() {
    let table = If97Table::new(UnitSystem::Si);
    // tsat(10 bar) is about 179.9 C, so 300 C is far into superheat.
    let state = resolve_state(&table, &pt(10.0, 300.0)).unwrap();

    assert_eq!(state.region, Region::Superheated);
    assert_eq!(state.x, QUALITY_UNDEFINED);
    // Steam tables: h ~ 3051.6 kJ/kg, s ~ 7.1246 kJ/(kg C)
    assert!((state.h - 3051.6).abs() < 3.0, "h = {} kJ/kg", state.h);
    assert!((state.s - 7.1246).abs() < 0.01, "s = {}", state.s);
}

#[test]
fn compressed_liquid_at_1_bar_25_c() {
    let table = If97Table::new(UnitSystem::Si);
    let state = resolve_state(&table, &pt(1.0, 25.0)).unwrap();

    assert_eq!(state.region, Region::Subcooled);
    assert_eq!(state.x, QUALITY_UNDEFINED);
    // Liquid water: h ~ 104.9 kJ/kg, v ~ 0.001003 m³/kg
    assert!((state.h - 104.9).abs() < 1.0, "h = {} kJ/kg", state.h);
    assert!((state.v - 0.001003).abs() < 1e-5, "v = {} m³/kg", state.v);
}

#[test]
fn near_saturation_pair_becomes_two_phase() {
    let table = If97Table::new(UnitSystem::Si);
    // tsat(1 bar) is 99.606 C, so 99.65 C sits inside the band.
    let state = resolve_state(&table, &pt(1.0, 99.65)).unwrap();

    assert_eq!(state.region, Region::TwoPhase);
    assert_eq!(state.x, PLACEHOLDER_QUALITY);
    // The entered temperature is reported unchanged.
    assert_eq!(state.t, 99.65);
    // Midpoint of the dome: h ~ (417.4 + 2675.0) / 2
    assert!((state.h - 1546.2).abs() < 2.0, "h = {} kJ/kg", state.h);
}

#[test]
fn just_outside_the_band_is_single_phase() {
    let table = If97Table::new(UnitSystem::Si);

    let hot = resolve_state(&table, &pt(1.0, 99.8)).unwrap();
    assert_eq!(hot.region, Region::Superheated);

    let cold = resolve_state(&table, &pt(1.0, 99.4)).unwrap();
    assert_eq!(cold.region, Region::Subcooled);
}

#[test]
fn quality_pair_interpolates_the_dome() {
    let table = If97Table::new(UnitSystem::Si);
    let state = resolve_state(&table, &px(1.0, 0.5)).unwrap();

    assert_eq!(state.region, Region::TwoPhase);
    assert_eq!(state.x, 0.5);
    // Temperature comes from the saturation line.
    assert!((state.t - 99.606).abs() < 0.01, "t = {} C", state.t);

    // The state must land exactly on the lever rule between the
    // saturated endpoints.
    let line = table.saturation_line(1.0).unwrap();
    let expected = line.at_quality(0.5);
    assert!((state.h - expected.h).abs() < 1e-9);
    assert!((state.v - expected.v).abs() < 1e-9);
    assert!((state.u - expected.u).abs() < 1e-9);
    assert!((state.s - expected.s).abs() < 1e-9);
}

#[test]
fn saturated_liquid_and_vapor_endpoints() {
    let table = If97Table::new(UnitSystem::Si);

    let liquid = resolve_state(&table, &px(1.0, 0.0)).unwrap();
    assert!((liquid.h - 417.44).abs() < 0.5, "hL = {} kJ/kg", liquid.h);
    assert!((liquid.s - 1.3026).abs() < 0.005, "sL = {}", liquid.s);

    let vapor = resolve_state(&table, &px(1.0, 1.0)).unwrap();
    assert!((vapor.h - 2675.0).abs() < 1.0, "hV = {} kJ/kg", vapor.h);
    assert!((vapor.v - 1.694).abs() < 0.005, "vV = {} m³/kg", vapor.v);
}

#[test]
fn english_units_flow_through_resolution() {
    let table = If97Table::new(UnitSystem::English);
    // 14.5 psi is about 1 bar; 300 F is well above saturation there.
    let state = resolve_state(&table, &pt(14.503_773_8, 300.0)).unwrap();

    assert_eq!(state.region, Region::Superheated);
    // h ~ 2776 kJ/kg / 2.326 ~ 1193 btu/lb
    assert!(
        state.h > 1150.0 && state.h < 1250.0,
        "h = {} btu/lb",
        state.h
    );
}

#[test]
fn quality_out_of_range_is_rejected() {
    let table = If97Table::new(UnitSystem::Si);
    let err = resolve_state(&table, &px(1.0, 1.5)).unwrap_err();
    assert!(matches!(err, ResolveError::QualityOutOfRange { x } if x == 1.5));
}

#[test]
fn supercritical_pressure_is_reported_as_out_of_range() {
    let table = If97Table::new(UnitSystem::Si);
    // 250 bar is above the critical pressure, no saturation line there.
    let err = resolve_state(&table, &px(250.0, 0.5)).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Table(TableError::OutOfRange { .. })
    ));
}

#[test]
fn unsupported_and_duplicate_pairs() {
    let table = If97Table::new(UnitSystem::Si);

    let swapped = Specification::new(
        PropertyValue::new(PropertyId::Temperature, 150.0),
        PropertyValue::new(PropertyId::Pressure, 1.0),
    );
    let err = resolve_state(&table, &swapped).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported property combination: t and p");

    let doubled = Specification::new(
        PropertyValue::new(PropertyId::Pressure, 1.0),
        PropertyValue::new(PropertyId::Pressure, 2.0),
    );
    let err = resolve_state(&table, &doubled).unwrap_err();
    assert_eq!(err.to_string(), "You cannot specify the same property twice");
}
