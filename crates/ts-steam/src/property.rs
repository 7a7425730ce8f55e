//! Property identifiers and specified (identifier, value) pairs.

use core::fmt;
use ts_core::units::{PropertyKind, UnitSystem, convert};

/// One of the closed set of properties a state can be specified by.
///
/// Each identifier has a one-letter code for parsing and a longer
/// display label such as "Pressure (p)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Pressure,
    Temperature,
    SpecificVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
    Quality,
}

impl PropertyId {
    pub const ALL: [PropertyId; 7] = [
        Self::Pressure,
        Self::Temperature,
        Self::SpecificVolume,
        Self::InternalEnergy,
        Self::Enthalpy,
        Self::Entropy,
        Self::Quality,
    ];

    /// One-letter code: p, t, v, u, h, s, x.
    pub fn code(self) -> char {
        match self {
            Self::Pressure => 'p',
            Self::Temperature => 't',
            Self::SpecificVolume => 'v',
            Self::InternalEnergy => 'u',
            Self::Enthalpy => 'h',
            Self::Entropy => 's',
            Self::Quality => 'x',
        }
    }

    /// Parse a one-letter code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        if trimmed.chars().count() != 1 {
            return None;
        }
        let letter = trimmed.chars().next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|id| id.code() == letter)
    }

    /// Human-readable label, e.g. "Pressure (p)".
    pub fn label(self) -> &'static str {
        match self {
            Self::Pressure => "Pressure (p)",
            Self::Temperature => "Temperature (T)",
            Self::SpecificVolume => "Specific Volume (v)",
            Self::InternalEnergy => "Internal Energy (u)",
            Self::Enthalpy => "Enthalpy (h)",
            Self::Entropy => "Entropy (s)",
            Self::Quality => "Quality (x)",
        }
    }

    /// Conversion category for this property.
    pub fn kind(self) -> PropertyKind {
        match self {
            Self::Pressure => PropertyKind::Pressure,
            Self::Temperature => PropertyKind::Temperature,
            Self::SpecificVolume => PropertyKind::SpecificVolume,
            Self::InternalEnergy | Self::Enthalpy => PropertyKind::SpecificEnergy,
            Self::Entropy => PropertyKind::SpecificEntropy,
            Self::Quality => PropertyKind::Quality,
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A property identifier together with its raw value in the active
/// unit system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValue {
    pub id: PropertyId,
    pub value: f64,
}

impl PropertyValue {
    pub fn new(id: PropertyId, value: f64) -> Self {
        Self { id, value }
    }

    /// Re-express the value in another unit system.
    pub fn converted(self, from: UnitSystem, to: UnitSystem) -> Self {
        Self {
            id: self.id,
            value: convert(self.id.kind(), from, to, self.value),
        }
    }
}

/// The pair of specified properties that determines a state.
///
/// The two identifiers must differ; the resolver rejects duplicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specification {
    pub first: PropertyValue,
    pub second: PropertyValue,
}

impl Specification {
    pub fn new(first: PropertyValue, second: PropertyValue) -> Self {
        Self { first, second }
    }

    /// Convert both specified values to another unit system.
    pub fn converted(self, from: UnitSystem, to: UnitSystem) -> Self {
        Self {
            first: self.first.converted(from, to),
            second: self.second.converted(from, to),
        }
    }
}
