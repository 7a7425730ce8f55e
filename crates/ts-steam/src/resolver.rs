//! State resolution: classify the region for a property pair and fill
//! in the remaining properties from a [`SteamTable`].

use crate::error::{ResolveError, ResolveResult, TableResult};
use crate::property::{PropertyId, PropertyValue, Specification};
use crate::state::{QUALITY_UNDEFINED, Region, ThermoState};
use crate::table::SteamTable;

/// Half-width of the temperature band around saturation that is
/// classified as two-phase, in the table's temperature unit.
pub const SATURATION_BAND: f64 = 0.1;

/// Quality assumed for a pressure/temperature pair that lands inside
/// the saturation band. The pair cannot pin down the real quality, so
/// the mixture is reported at the dome midpoint.
pub const PLACEHOLDER_QUALITY: f64 = 0.5;

/// Resolve a two-property specification into a full state.
///
/// Supported pairs, in order: pressure/temperature and
/// pressure/quality. Values are taken in the unit system of `table`.
pub fn resolve_state(
    table: &dyn SteamTable,
    spec: &Specification,
) -> ResolveResult<ThermoState> {
    check_finite(&spec.first)?;
    check_finite(&spec.second)?;
    if spec.first.id == spec.second.id {
        return Err(ResolveError::DuplicateProperty { id: spec.first.id });
    }
    match (spec.first.id, spec.second.id) {
        (PropertyId::Pressure, PropertyId::Temperature) => {
            resolve_pt(table, spec.first.value, spec.second.value)
        }
        (PropertyId::Pressure, PropertyId::Quality) => {
            resolve_px(table, spec.first.value, spec.second.value)
        }
        (first, second) => Err(ResolveError::UnsupportedPair { first, second }),
    }
}

fn check_finite(property: &PropertyValue) -> ResolveResult<()> {
    if !property.value.is_finite() {
        return Err(ResolveError::NonFinite {
            what: property.id.label(),
        });
    }
    Ok(())
}

fn resolve_pt(table: &dyn SteamTable, p: f64, t: f64) -> ResolveResult<ThermoState> {
    let tsat = table.saturation_temperature(p)?;
    if (t - tsat).abs() < SATURATION_BAND {
        // Close enough to saturation that the pair is degenerate. The
        // entered temperature is kept rather than snapped to tsat.
        let mix = table.saturation_line(p)?.at_quality(PLACEHOLDER_QUALITY);
        return Ok(ThermoState {
            region: Region::TwoPhase,
            p,
            t,
            v: mix.v,
            u: mix.u,
            h: mix.h,
            s: mix.s,
            x: PLACEHOLDER_QUALITY,
        });
    }
    let region = if t > tsat {
        Region::Superheated
    } else {
        Region::Subcooled
    };
    let props = table.single_phase(p, t)?;
    Ok(ThermoState {
        region,
        p,
        t,
        v: props.v,
        u: props.u,
        h: props.h,
        s: props.s,
        x: QUALITY_UNDEFINED,
    })
}

fn resolve_px(table: &dyn SteamTable, p: f64, x: f64) -> ResolveResult<ThermoState> {
    if !(0.0..=1.0).contains(&x) {
        return Err(ResolveError::QualityOutOfRange { x });
    }
    let t = table.saturation_temperature(p)?;
    let mix = table.saturation_line(p)?.at_quality(x);
    Ok(ThermoState {
        region: Region::TwoPhase,
        p,
        t,
        v: mix.v,
        u: mix.u,
        h: mix.h,
        s: mix.s,
        x,
    })
}

/// A point on the saturation line, identified by pressure and the
/// matching temperature (or the other way around).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub p: f64,
    pub t: f64,
}

impl SaturationPoint {
    /// Saturation point at pressure `p`.
    pub fn at_pressure(table: &dyn SteamTable, p: f64) -> TableResult<Self> {
        let t = table.saturation_temperature(p)?;
        Ok(Self { p, t })
    }

    /// Saturation point at temperature `t`.
    pub fn at_temperature(table: &dyn SteamTable, t: f64) -> TableResult<Self> {
        let p = table.saturation_pressure(t)?;
        Ok(Self { p, t })
    }
}
