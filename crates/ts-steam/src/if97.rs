//! IAPWS-IF97 steam table backed by the seuif97 crate.
//!
//! seuif97 works in MPa, °C, m³/kg, kJ/kg and kJ/(kg·°C); this adapter
//! converts at the boundary so that callers see values in the table's
//! configured unit system only. Invalid input is caught by range guards
//! before the backend is called; a NaN coming back anyway is mapped to
//! a backend error.

use seuif97::{OH, OP, OS, OT, OU, OV, pt, px, tx};
use ts_core::units::{PropertyKind, UnitSystem, convert};

use crate::error::{TableError, TableResult};
use crate::table::{PhaseProperties, SaturationLine, SteamTable};

// IF97 validity limits, native units (MPa / °C).
const P_SAT_MIN_MPA: f64 = 0.000_611_657;
const P_SAT_MAX_MPA: f64 = 22.064;
const T_SAT_MIN_C: f64 = 0.01;
const T_SAT_MAX_C: f64 = 373.946;
const P_MAX_MPA: f64 = 100.0;
const T_MIN_C: f64 = 0.0;
const T_MAX_C: f64 = 800.0;

/// IF97 backend for water/steam properties.
///
/// Thread-safe: seuif97 exposes pure functions, and the adapter itself
/// holds only the configured unit system.
pub struct If97Table {
    units: UnitSystem,
}

impl If97Table {
    /// Create a table that accepts and produces values in `units`.
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    fn pressure_to_mpa(&self, p: f64) -> f64 {
        convert(PropertyKind::Pressure, self.units, UnitSystem::Si, p) / 10.0
    }

    fn pressure_from_mpa(&self, p_mpa: f64) -> f64 {
        convert(PropertyKind::Pressure, UnitSystem::Si, self.units, p_mpa * 10.0)
    }

    fn temperature_to_c(&self, t: f64) -> f64 {
        convert(PropertyKind::Temperature, self.units, UnitSystem::Si, t)
    }

    fn temperature_from_c(&self, t_c: f64) -> f64 {
        convert(PropertyKind::Temperature, UnitSystem::Si, self.units, t_c)
    }

    fn phase_from_native(&self, v: f64, u: f64, h: f64, s: f64) -> PhaseProperties {
        PhaseProperties {
            v: convert(PropertyKind::SpecificVolume, UnitSystem::Si, self.units, v),
            u: convert(PropertyKind::SpecificEnergy, UnitSystem::Si, self.units, u),
            h: convert(PropertyKind::SpecificEnergy, UnitSystem::Si, self.units, h),
            s: convert(PropertyKind::SpecificEntropy, UnitSystem::Si, self.units, s),
        }
    }

    fn saturation_pressure_mpa(&self, p: f64) -> TableResult<f64> {
        let p_mpa = self.pressure_to_mpa(p);
        if !(P_SAT_MIN_MPA..=P_SAT_MAX_MPA).contains(&p_mpa) {
            return Err(TableError::OutOfRange {
                what: "saturation pressure [MPa]",
                value: p_mpa,
            });
        }
        Ok(p_mpa)
    }

    /// Saturated-phase v, u, h, s at `p_mpa` for quality 0 (liquid) or
    /// 1 (vapor), in the table's unit system.
    fn saturated_phase(&self, p_mpa: f64, x: f64) -> TableResult<PhaseProperties> {
        let v = checked(px(p_mpa, x, OV), "saturated specific volume")?;
        let u = checked(px(p_mpa, x, OU), "saturated internal energy")?;
        let h = checked(px(p_mpa, x, OH), "saturated enthalpy")?;
        let s = checked(px(p_mpa, x, OS), "saturated entropy")?;
        Ok(self.phase_from_native(v, u, h, s))
    }
}

fn checked(value: f64, what: &'static str) -> TableResult<f64> {
    if value.is_nan() {
        return Err(TableError::Backend {
            message: format!("IF97 returned no value for {what}"),
        });
    }
    Ok(value)
}

impl SteamTable for If97Table {
    fn name(&self) -> &str {
        "IAPWS-IF97 (seuif97)"
    }

    fn unit_system(&self) -> UnitSystem {
        self.units
    }

    fn saturation_temperature(&self, p: f64) -> TableResult<f64> {
        let p_mpa = self.saturation_pressure_mpa(p)?;
        let t_c = px(p_mpa, 0.0, OT);
        if t_c.is_nan() {
            return Err(TableError::Backend {
                message: format!("IF97 saturation temperature failed at p={p_mpa} MPa"),
            });
        }
        Ok(self.temperature_from_c(t_c))
    }

    fn saturation_pressure(&self, t: f64) -> TableResult<f64> {
        let t_c = self.temperature_to_c(t);
        if !(T_SAT_MIN_C..=T_SAT_MAX_C).contains(&t_c) {
            return Err(TableError::OutOfRange {
                what: "saturation temperature [C]",
                value: t_c,
            });
        }
        let p_mpa = tx(t_c, 0.0, OP);
        if p_mpa.is_nan() {
            return Err(TableError::Backend {
                message: format!("IF97 saturation pressure failed at t={t_c} C"),
            });
        }
        Ok(self.pressure_from_mpa(p_mpa))
    }

    fn saturation_line(&self, p: f64) -> TableResult<SaturationLine> {
        let p_mpa = self.saturation_pressure_mpa(p)?;
        Ok(SaturationLine {
            liquid: self.saturated_phase(p_mpa, 0.0)?,
            vapor: self.saturated_phase(p_mpa, 1.0)?,
        })
    }

    fn single_phase(&self, p: f64, t: f64) -> TableResult<PhaseProperties> {
        let p_mpa = self.pressure_to_mpa(p);
        let t_c = self.temperature_to_c(t);
        if !(P_SAT_MIN_MPA..=P_MAX_MPA).contains(&p_mpa) {
            return Err(TableError::OutOfRange {
                what: "pressure [MPa]",
                value: p_mpa,
            });
        }
        if !(T_MIN_C..=T_MAX_C).contains(&t_c) {
            return Err(TableError::OutOfRange {
                what: "temperature [C]",
                value: t_c,
            });
        }
        let v = checked(pt(p_mpa, t_c, OV), "specific volume")?;
        let u = checked(pt(p_mpa, t_c, OU), "internal energy")?;
        let h = checked(pt(p_mpa, t_c, OH), "enthalpy")?;
        let s = checked(pt(p_mpa, t_c, OS), "entropy")?;
        Ok(self.phase_from_native(v, u, h, s))
    }
}
