//! Resolved thermodynamic states and differences between them.

use std::fmt;
use std::ops::Sub;

/// Sentinel quality for single-phase states, where quality has no meaning.
pub const QUALITY_UNDEFINED: f64 = -1.0;

/// Phase region of a resolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Not yet resolved.
    #[default]
    Unknown,
    /// Compressed liquid, below the saturation temperature.
    Subcooled,
    /// Dry steam, above the saturation temperature.
    Superheated,
    /// Liquid/vapor mixture on the saturation line.
    TwoPhase,
}

impl Region {
    /// Lowercase display label.
    pub fn label(self) -> &'static str {
        match self {
            Region::Unknown => "unknown",
            Region::Subcooled => "subcooled",
            Region::Superheated => "superheated",
            Region::TwoPhase => "two-phase",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully resolved state: region plus the complete property set.
///
/// All values are in the unit system of the table that produced the
/// state. Quality is [`QUALITY_UNDEFINED`] outside the two-phase dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    pub region: Region,
    /// Pressure.
    pub p: f64,
    /// Temperature.
    pub t: f64,
    /// Specific volume.
    pub v: f64,
    /// Internal energy.
    pub u: f64,
    /// Enthalpy.
    pub h: f64,
    /// Entropy.
    pub s: f64,
    /// Quality, only meaningful in the two-phase region.
    pub x: f64,
}

impl ThermoState {
    pub fn is_two_phase(&self) -> bool {
        self.region == Region::TwoPhase
    }
}

impl Default for ThermoState {
    fn default() -> Self {
        Self {
            region: Region::Unknown,
            p: 0.0,
            t: 0.0,
            v: 0.0,
            u: 0.0,
            h: 0.0,
            s: 0.0,
            x: QUALITY_UNDEFINED,
        }
    }
}

/// Signed property change between two states.
///
/// Region and quality do not difference meaningfully (the endpoints can
/// sit in different regions), so only the continuous properties appear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDelta {
    pub p: f64,
    pub t: f64,
    pub u: f64,
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Sub for ThermoState {
    type Output = StateDelta;

    fn sub(self, other: Self) -> StateDelta {
        StateDelta {
            p: self.p - other.p,
            t: self.t - other.t,
            u: self.u - other.u,
            h: self.h - other.h,
            s: self.s - other.s,
            v: self.v - other.v,
        }
    }
}

/// Change from state `a` to state `b`, field by field (`b - a`).
pub fn difference(a: &ThermoState, b: &ThermoState) -> StateDelta {
    *b - *a
}
