//! Presentation types for resolved states, deltas, and saturation
//! points, with the classic text label layout and JSON encoding.

use serde::{Deserialize, Serialize};
use ts_core::units::{PropertyKind, UnitSystem};
use ts_steam::{SaturationPoint, StateDelta, ThermoState};

use crate::error::AppResult;

/// A resolved state dressed for presentation.
///
/// Values are plain numbers in the report's unit system; the region is
/// carried as its display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateReport {
    pub units: UnitSystem,
    pub region: String,
    pub p: f64,
    pub t: f64,
    pub u: f64,
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub x: f64,
}

impl StateReport {
    pub fn new(state: &ThermoState, units: UnitSystem) -> Self {
        Self {
            units,
            region: state.region.to_string(),
            p: state.p,
            t: state.t,
            u: state.u,
            h: state.h,
            s: state.s,
            v: state.v,
            x: state.x,
        }
    }

    /// Multi-line property label. Quality is always shown, including
    /// the -1.000 sentinel outside the two-phase region.
    pub fn text(&self) -> String {
        let mut out = format!("Region = {}", self.region);
        out.push_str(&format!(
            "\nPressure = {:.3} ({})",
            self.p,
            self.units.label(PropertyKind::Pressure)
        ));
        out.push_str(&format!(
            "\nTemperature = {:.3} ({})",
            self.t,
            self.units.label(PropertyKind::Temperature)
        ));
        out.push_str(&format!(
            "\nInternal Energy = {:.3} ({})",
            self.u,
            self.units.label(PropertyKind::SpecificEnergy)
        ));
        out.push_str(&format!(
            "\nEnthalpy = {:.3} ({})",
            self.h,
            self.units.label(PropertyKind::SpecificEnergy)
        ));
        out.push_str(&format!(
            "\nEntropy = {:.3} ({})",
            self.s,
            self.units.label(PropertyKind::SpecificEntropy)
        ));
        out.push_str(&format!(
            "\nSpecific Volume = {:.3} ({})",
            self.v,
            self.units.label(PropertyKind::SpecificVolume)
        ));
        out.push_str(&format!("\nQuality = {:.3}", self.x));
        out
    }
}

/// Signed property changes between two reported states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaReport {
    pub units: UnitSystem,
    pub t: f64,
    pub p: f64,
    pub h: f64,
    pub u: f64,
    pub s: f64,
    pub v: f64,
}

impl DeltaReport {
    pub fn new(delta: &StateDelta, units: UnitSystem) -> Self {
        Self {
            units,
            t: delta.t,
            p: delta.p,
            h: delta.h,
            u: delta.u,
            s: delta.s,
            v: delta.v,
        }
    }

    /// Multi-line change label. Unit labels here carry no parentheses.
    pub fn text(&self) -> String {
        let mut out = String::from("Property change:");
        out.push_str(&format!(
            "\nT2-T1 = {:.3} {}",
            self.t,
            self.units.label(PropertyKind::Temperature)
        ));
        out.push_str(&format!(
            "\nP2-P1 = {:.3} {}",
            self.p,
            self.units.label(PropertyKind::Pressure)
        ));
        out.push_str(&format!(
            "\nh2-h1 = {:.3} {}",
            self.h,
            self.units.label(PropertyKind::SpecificEnergy)
        ));
        out.push_str(&format!(
            "\nu2-u1 = {:.3} {}",
            self.u,
            self.units.label(PropertyKind::SpecificEnergy)
        ));
        out.push_str(&format!(
            "\ns2-s1 = {:.3} {}",
            self.s,
            self.units.label(PropertyKind::SpecificEntropy)
        ));
        out.push_str(&format!(
            "\nv2-v1 = {:.3} {}",
            self.v,
            self.units.label(PropertyKind::SpecificVolume)
        ));
        out
    }
}

/// Both resolved states plus their difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateComparison {
    pub state1: StateReport,
    pub state2: StateReport,
    pub delta: DeltaReport,
}

impl StateComparison {
    pub fn text(&self) -> String {
        format!(
            "State 1 Properties:\n{}\n\nState 2 Properties:\n{}\n\n{}",
            self.state1.text(),
            self.state2.text(),
            self.delta.text()
        )
    }
}

/// A point on the saturation line for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaturationReport {
    pub units: UnitSystem,
    pub p: f64,
    pub t: f64,
}

impl SaturationReport {
    pub fn new(point: &SaturationPoint, units: UnitSystem) -> Self {
        Self {
            units,
            p: point.p,
            t: point.t,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Saturation pressure = {:.3} ({})\nSaturation temperature = {:.3} ({})",
            self.p,
            self.units.label(PropertyKind::Pressure),
            self.t,
            self.units.label(PropertyKind::Temperature)
        )
    }
}

/// Serialize a report as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
