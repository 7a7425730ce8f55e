//! Shared application service layer for thermostate.
//!
//! This crate provides a unified interface for frontends, centralizing
//! session state, input parsing, state resolution, and report
//! formatting.

pub mod error;
pub mod report;
pub mod service;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult, StateSlot};
pub use report::{DeltaReport, SaturationReport, StateComparison, StateReport, to_json};
pub use service::{
    ComparisonRequest, compare_states, get_saturation_report, get_state_report, parse_property,
    parse_value, resolve_input,
};
pub use session::Session;
