//! ts-core: shared foundation for thermostate.
//!
//! Contains:
//! - units (unit systems, property categories, conversion)
//! - numeric (scalar type, tolerances, float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Flat re-exports so downstream crates can skip the module paths
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
