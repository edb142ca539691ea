//! Request checks performed before allocation.
//!
//! Only malformed requests are rejected. Degenerate but well-formed ones
//! (negative load, `pmin > pmax`, an empty fleet) pass through and the
//! allocator's arithmetic decides the outcome.

use std::collections::HashSet;

use crate::error::PlanError;

use super::types::Payload;

/// Validates a payload, returning the first problem found.
///
/// # Errors
///
/// - [`PlanError::NonFinite`] for NaN or infinite numbers
/// - [`PlanError::WindOutOfRange`] when wind availability is outside `[0, 100]`
/// - [`PlanError::DuplicateName`] when two plants share a name
pub fn validate(payload: &Payload) -> Result<(), PlanError> {
    check_finite("load", payload.load)?;

    let fuels = &payload.fuels;
    check_finite("fuels.gas(euro/MWh)", fuels.gas)?;
    check_finite("fuels.kerosine(euro/MWh)", fuels.kerosine)?;
    check_finite("fuels.co2(euro/ton)", fuels.co2)?;
    check_finite("fuels.wind(%)", fuels.wind_pct)?;
    if !(0.0..=100.0).contains(&fuels.wind_pct) {
        return Err(PlanError::WindOutOfRange(fuels.wind_pct));
    }

    let mut seen = HashSet::with_capacity(payload.powerplants.len());
    for (i, plant) in payload.powerplants.iter().enumerate() {
        check_finite(&format!("powerplants[{i}].efficiency"), plant.efficiency)?;
        check_finite(&format!("powerplants[{i}].pmin"), plant.pmin)?;
        check_finite(&format!("powerplants[{i}].pmax"), plant.pmax)?;
        if !seen.insert(plant.name.as_str()) {
            return Err(PlanError::DuplicateName(plant.name.clone()));
        }
    }

    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::NonFinite {
            field: field.to_string(),
        })
    }
}
