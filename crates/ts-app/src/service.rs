//! Input parsing, state resolution, and comparison services.

use tracing::debug;
use ts_core::numeric::ensure_finite;
use ts_core::units::UnitSystem;
use ts_steam::{
    If97Table, PropertyId, ResolveError, SaturationPoint, Specification, ThermoState, difference,
    resolve_state,
};

use crate::error::{AppError, AppResult, StateSlot};
use crate::report::{DeltaReport, SaturationReport, StateComparison, StateReport};
use crate::session::Session;

/// Parse one numeric input field. Text that does not form a finite
/// number is rejected with the state slot in the message.
pub fn parse_value(text: &str, slot: StateSlot) -> AppResult<f64> {
    let invalid = || AppError::InvalidNumeric {
        slot,
        input: text.to_string(),
    };
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    ensure_finite(value, "input value").map_err(|_| invalid())
}

/// Parse a one-letter property code such as "p" or "T".
pub fn parse_property(code: &str) -> AppResult<PropertyId> {
    PropertyId::from_code(code)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown property code: {}", code)))
}

fn map_resolve_error(err: ResolveError, slot: StateSlot) -> AppError {
    match err {
        // A doubled property is an entry mistake, reported as a
        // warning rather than a calculation failure.
        ResolveError::DuplicateProperty { .. } => AppError::DuplicateProperty { slot },
        other => AppError::Calculation {
            slot,
            message: other.to_string(),
        },
    }
}

/// Resolve one state from its input pair, tagging failures with the
/// state slot they belong to.
pub fn resolve_input(
    table: &If97Table,
    spec: &Specification,
    slot: StateSlot,
) -> AppResult<ThermoState> {
    debug!(
        "{slot} inputs: {} = {}, {} = {}",
        spec.first.id, spec.first.value, spec.second.id, spec.second.value
    );
    let state = resolve_state(table, spec).map_err(|err| map_resolve_error(err, slot))?;
    debug!(
        "{slot} resolved: region={}, p={}, t={}, u={}, h={}, s={}, v={}, x={}",
        state.region, state.p, state.t, state.u, state.h, state.s, state.v, state.x
    );
    Ok(state)
}

/// Resolve a single state and wrap it for presentation.
pub fn get_state_report(units: UnitSystem, spec: &Specification) -> AppResult<StateReport> {
    let table = If97Table::new(units);
    let state = resolve_input(&table, spec, StateSlot::One)?;
    Ok(StateReport::new(&state, units))
}

/// Request to resolve and compare two states.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    pub units: UnitSystem,
    pub state1: Specification,
    pub state2: Specification,
}

impl ComparisonRequest {
    pub fn from_session(session: &Session) -> Self {
        Self {
            units: session.unit_system(),
            state1: session.state1,
            state2: session.state2,
        }
    }
}

/// Resolve both states and the property change between them.
pub fn compare_states(request: &ComparisonRequest) -> AppResult<StateComparison> {
    debug!("starting state comparison, units = {}", request.units);
    let table = If97Table::new(request.units);

    let state1 = resolve_input(&table, &request.state1, StateSlot::One)?;
    let state2 = resolve_input(&table, &request.state2, StateSlot::Two)?;
    let delta = difference(&state1, &state2);

    Ok(StateComparison {
        state1: StateReport::new(&state1, request.units),
        state2: StateReport::new(&state2, request.units),
        delta: DeltaReport::new(&delta, request.units),
    })
}

/// Look up the saturation point from a pressure or a temperature.
/// Pressure wins when both are given.
pub fn get_saturation_report(
    units: UnitSystem,
    pressure: Option<f64>,
    temperature: Option<f64>,
) -> AppResult<SaturationReport> {
    let table = If97Table::new(units);
    let point = if let Some(p) = pressure {
        SaturationPoint::at_pressure(&table, p)?
    } else if let Some(t) = temperature {
        SaturationPoint::at_temperature(&table, t)?
    } else {
        return Err(AppError::MissingSaturationInput);
    };
    Ok(SaturationReport::new(&point, units))
}
