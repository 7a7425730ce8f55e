// ts-core/src/units.rs

use core::fmt;

/// The two unit systems the engine works in.
///
/// Property values are plain scalars expressed in whichever system is
/// active; [`convert`] re-expresses a value when the system changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// bar, °C, kJ/kg, kJ/(kg·°C), m³/kg
    Si,
    /// psi, °F, btu/lb, btu/(lb·°F), ft³/lb
    English,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => write!(f, "SI"),
            Self::English => write!(f, "English"),
        }
    }
}

/// Category a property value belongs to for conversion purposes.
///
/// Internal energy and enthalpy share one category (specific energy),
/// so the closed set of categories is smaller than the property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Pressure,
    Temperature,
    SpecificEnergy,
    SpecificEntropy,
    SpecificVolume,
    Quality,
}

impl UnitSystem {
    /// Display label for a property category in this unit system.
    pub fn label(self, kind: PropertyKind) -> &'static str {
        match (self, kind) {
            (Self::Si, PropertyKind::Pressure) => "bar",
            (Self::English, PropertyKind::Pressure) => "psi",
            (Self::Si, PropertyKind::Temperature) => "C",
            (Self::English, PropertyKind::Temperature) => "F",
            (Self::Si, PropertyKind::SpecificEnergy) => "kJ/kg",
            (Self::English, PropertyKind::SpecificEnergy) => "btu/lb",
            (Self::Si, PropertyKind::SpecificEntropy) => "kJ/kg*C",
            (Self::English, PropertyKind::SpecificEntropy) => "btu/lb*F",
            (Self::Si, PropertyKind::SpecificVolume) => "m^3/kg",
            (Self::English, PropertyKind::SpecificVolume) => "ft^3/lb",
            (_, PropertyKind::Quality) => "",
        }
    }
}

/// Re-express `value` from one unit system in another.
///
/// Multiplicative for pressure, specific energy, specific entropy and
/// specific volume; affine for temperature; identity for quality.
/// `from == to` is an exact no-op. Callers own the once-per-switch
/// discipline: this function converts every time it is asked to.
pub fn convert(kind: PropertyKind, from: UnitSystem, to: UnitSystem, value: f64) -> f64 {
    if from == to {
        return value;
    }
    match (kind, to) {
        (PropertyKind::Pressure, UnitSystem::English) => value * constants::PSI_PER_BAR,
        (PropertyKind::Pressure, UnitSystem::Si) => value / constants::PSI_PER_BAR,
        (PropertyKind::Temperature, UnitSystem::English) => value * 9.0 / 5.0 + 32.0,
        (PropertyKind::Temperature, UnitSystem::Si) => (value - 32.0) * 5.0 / 9.0,
        (PropertyKind::SpecificEnergy, UnitSystem::English) => {
            value / constants::KJ_PER_KG_PER_BTU_PER_LB
        }
        (PropertyKind::SpecificEnergy, UnitSystem::Si) => {
            value * constants::KJ_PER_KG_PER_BTU_PER_LB
        }
        (PropertyKind::SpecificEntropy, UnitSystem::English) => {
            value / constants::KJ_PER_KG_C_PER_BTU_PER_LB_F
        }
        (PropertyKind::SpecificEntropy, UnitSystem::Si) => {
            value * constants::KJ_PER_KG_C_PER_BTU_PER_LB_F
        }
        (PropertyKind::SpecificVolume, UnitSystem::English) => {
            value * constants::FT3_PER_LB_PER_M3_PER_KG
        }
        (PropertyKind::SpecificVolume, UnitSystem::Si) => {
            value / constants::FT3_PER_LB_PER_M3_PER_KG
        }
        (PropertyKind::Quality, _) => value,
    }
}

pub mod constants {
    /// psi per bar
    pub const PSI_PER_BAR: f64 = 14.503_773_8;

    /// kJ/kg per btu/lb (international table Btu)
    pub const KJ_PER_KG_PER_BTU_PER_LB: f64 = 2.326;

    /// kJ/(kg·°C) per btu/(lb·°F)
    pub const KJ_PER_KG_C_PER_BTU_PER_LB_F: f64 = 4.186_8;

    /// ft³/lb per m³/kg
    pub const FT3_PER_LB_PER_M3_PER_KG: f64 = 16.018_463_374;
}
