//! Greedy load allocation along the merit order.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::merit_order::merit_order;
use super::types::{Allocation, Payload, PowerPlant, ProductionPlan};

/// Distributes the requested load over the units in merit order.
///
/// Each unit, cheapest first, takes as much of the remaining load as its
/// operating band allows:
///
/// 1. Nothing left to cover: the unit produces `0`.
/// 2. Remaining load covers the unit's full output: it runs at `pmax`.
/// 3. Remaining load falls within `[pmin, pmax]`: it takes all of it.
/// 4. Remaining load is below `pmin` and this is the first unit: it produces
///    `0` and the remaining load is carried on unchanged.
/// 5. Remaining load is below `pmin` otherwise: the unit runs at `pmin` and the
///    previous unit gives up the excess. The previous allocation is not
///    floored and may end up negative.
///
/// Wind units are limited to `pmax * wind / 100`. With no wind at all, every
/// wind unit is appended at `0` after the merit-order pass, in input order.
///
/// The payload is only read; running totals live in local copies. Duplicate
/// names resolve to the first unit with that name.
///
/// # Arguments
///
/// * `payload` - Load, fuel prices, and fleet
///
/// # Returns
///
/// The production plan in merit order.
pub fn allocate(payload: &Payload) -> ProductionPlan {
    let fuels = &payload.fuels;
    let order = merit_order(fuels, &payload.powerplants);

    let mut by_name: HashMap<&str, &PowerPlant> = HashMap::with_capacity(payload.powerplants.len());
    for plant in &payload.powerplants {
        by_name.entry(plant.name.as_str()).or_insert(plant);
    }

    let mut remaining = payload.load;
    let mut plan: Vec<Allocation> = Vec::with_capacity(payload.powerplants.len());

    for name in order {
        let Some(plant) = by_name.get(name) else {
            continue;
        };
        let pmin = plant.pmin;
        let pmax = plant.available_pmax(fuels);

        if remaining == 0.0 {
            plan.push(Allocation::new(name, 0.0));
        } else if remaining - pmax >= 0.0 {
            plan.push(Allocation::new(name, pmax));
            remaining -= pmax;
        } else if pmin <= remaining && remaining <= pmax {
            plan.push(Allocation::new(name, remaining));
            remaining = 0.0;
        } else if remaining < pmin {
            match plan.last_mut() {
                Some(previous) => {
                    let excess = pmin - remaining;
                    previous.p -= excess;
                    if previous.p < 0.0 {
                        warn!(
                            unit = %previous.name,
                            p = previous.p,
                            excess,
                            "min-output adjustment left a negative allocation"
                        );
                    }
                    plan.push(Allocation::new(name, pmin));
                    remaining = 0.0;
                }
                // First unit: skipped, remainder carried on as-is.
                None => plan.push(Allocation::new(name, 0.0)),
            }
        }

        debug!(unit = name, pmin, pmax, remaining, "allocated");
    }

    if fuels.is_windless() {
        plan.extend(
            payload
                .powerplants
                .iter()
                .filter(|p| p.is_wind())
                .map(|p| Allocation::new(p.name.as_str(), 0.0)),
        );
    }

    ProductionPlan(plan)
}
