//! Production planning core: merit order, load allocation, and plan summary.

/// Greedy load allocation along the merit order.
pub mod allocator;
pub mod merit_order;
pub mod summary;
pub mod types;
/// Request checks run before allocation.
pub mod validate;

pub use allocator::allocate;
pub use merit_order::merit_order;
pub use summary::PlanSummary;
pub use types::{Allocation, FuelPrices, Payload, PlantType, PowerPlant, ProductionPlan};
pub use validate::validate;

use crate::error::PlanError;

/// Validates `payload` and computes its production plan.
///
/// # Errors
///
/// Returns a [`PlanError`] if the payload fails validation; the allocator
/// itself never fails.
pub fn solve(payload: &Payload) -> Result<ProductionPlan, PlanError> {
    validate(payload)?;
    Ok(allocate(payload))
}
