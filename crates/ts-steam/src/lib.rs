//! ts-steam: water/steam properties for thermostate.
//!
//! Wraps the IAPWS-IF97 formulation (via the seuif97 crate) behind the
//! [`SteamTable`] trait and resolves two-property specifications into
//! fully populated thermodynamic states.

pub mod error;
pub mod if97;
pub mod property;
pub mod resolver;
pub mod state;
pub mod table;

pub use error::{ResolveError, ResolveResult, TableError, TableResult};
pub use if97::If97Table;
pub use property::{PropertyId, PropertyValue, Specification};
pub use resolver::{PLACEHOLDER_QUALITY, SATURATION_BAND, SaturationPoint, resolve_state};
pub use state::{QUALITY_UNDEFINED, Region, StateDelta, ThermoState, difference};
pub use table::{PhaseProperties, SaturationLine, SteamTable};
