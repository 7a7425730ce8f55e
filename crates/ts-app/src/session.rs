//! Session state shared by frontends: the active unit system and the
//! input pairs for the two compared states.

use ts_core::units::UnitSystem;
use ts_steam::{PropertyId, PropertyValue, Specification};

/// Default input pair: 1.0 bar at 150.0 degrees C, superheated steam.
fn default_inputs() -> Specification {
    Specification::new(
        PropertyValue::new(PropertyId::Pressure, 1.0),
        PropertyValue::new(PropertyId::Temperature, 150.0),
    )
}

/// Mutable application state for a comparison workflow.
///
/// The unit system is private so that every switch goes through
/// [`Session::set_unit_system`], which converts the stored inputs
/// exactly once per actual change.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    units: UnitSystem,
    /// Input pair for the first state.
    pub state1: Specification,
    /// Input pair for the second state.
    pub state2: Specification,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            units: UnitSystem::Si,
            state1: default_inputs(),
            state2: default_inputs(),
        }
    }
}

impl Session {
    /// Session in the given unit system, with the default inputs
    /// converted from their SI values.
    pub fn new(units: UnitSystem) -> Self {
        let mut session = Self::default();
        session.set_unit_system(units);
        session
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.units
    }

    /// Switch the active unit system, converting both stored input
    /// pairs. Selecting the system that is already active leaves the
    /// values untouched, so repeated switches cannot accumulate
    /// rounding error. Returns whether a switch happened.
    pub fn set_unit_system(&mut self, target: UnitSystem) -> bool {
        if target == self.units {
            return false;
        }
        self.state1 = self.state1.converted(self.units, target);
        self.state2 = self.state2.converted(self.units, target);
        self.units = target;
        true
    }
}
