//! Steam property table trait and batched lookup results.

use crate::error::TableResult;
use ts_core::units::UnitSystem;

/// The four specific properties a single table lookup produces.
///
/// Values are expressed in the table's active unit system: m³/kg,
/// kJ/kg and kJ/(kg·°C) for SI; ft³/lb, btu/lb and btu/(lb·°F) for
/// English.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseProperties {
    /// Specific volume
    pub v: f64,
    /// Specific internal energy
    pub u: f64,
    /// Specific enthalpy
    pub h: f64,
    /// Specific entropy
    pub s: f64,
}

/// Saturated-liquid and saturated-vapor property sets at one pressure.
///
/// Batching the eight saturation lookups into one call keeps the
/// resolver to a small fixed number of backend queries per state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationLine {
    pub liquid: PhaseProperties,
    pub vapor: PhaseProperties,
}

impl SaturationLine {
    /// Quality-weighted interpolation between the liquid and vapor
    /// sides: `liquid + x * (vapor - liquid)` per property.
    ///
    /// Exact at x=0 (pure liquid); x=1 lands on the vapor values to
    /// within one rounding step.
    pub fn at_quality(&self, x: f64) -> PhaseProperties {
        PhaseProperties {
            v: self.liquid.v + x * (self.vapor.v - self.liquid.v),
            u: self.liquid.u + x * (self.vapor.u - self.liquid.u),
            h: self.liquid.h + x * (self.vapor.h - self.liquid.h),
            s: self.liquid.s + x * (self.vapor.s - self.liquid.s),
        }
    }
}

/// Trait for water/steam property tables.
///
/// Implementations must be thread-safe (Send + Sync). All lookups are
/// deterministic and side-effect-free; inputs and outputs are in the
/// table's unit system, and physically invalid input fails with a
/// `TableError` rather than producing a value.
pub trait SteamTable: Send + Sync {
    /// Get the table name (for debugging/logging).
    fn name(&self) -> &str;

    /// The unit system this table accepts and produces values in.
    fn unit_system(&self) -> UnitSystem;

    /// Saturation temperature at the given pressure.
    fn saturation_temperature(&self, p: f64) -> TableResult<f64>;

    /// Saturation pressure at the given temperature.
    fn saturation_pressure(&self, t: f64) -> TableResult<f64>;

    /// Saturated-liquid and saturated-vapor v, u, h, s at the given
    /// pressure.
    fn saturation_line(&self, p: f64) -> TableResult<SaturationLine>;

    /// Single-phase v, u, h, s at the given pressure and temperature.
    fn single_phase(&self, p: f64, t: f64) -> TableResult<PhaseProperties>;
}
