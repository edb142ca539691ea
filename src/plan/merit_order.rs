//! Merit-order ranking of generating units by marginal cost.

use super::types::{FuelPrices, PlantType, PowerPlant};

/// Marginal production cost of one MWh for `plant` (EUR/MWh).
///
/// Returns `None` for wind units when there is no wind: they take no part in
/// the merit order. Turbojets are priced on gas, like gas-fired units.
///
/// # Arguments
///
/// * `fuels` - Fuel prices and wind availability
/// * `plant` - Unit to price
pub fn marginal_cost(fuels: &FuelPrices, plant: &PowerPlant) -> Option<f64> {
    match plant.kind {
        PlantType::GasFired | PlantType::Turbojet => Some(fuels.gas / plant.efficiency),
        PlantType::WindTurbine if fuels.is_windless() => None,
        PlantType::WindTurbine => Some(0.0),
    }
}

/// Ranks units from cheapest to most expensive marginal cost.
///
/// The sort is stable: units with equal cost keep their input order. Wind
/// units are omitted entirely when wind availability is zero.
///
/// # Arguments
///
/// * `fuels` - Fuel prices and wind availability
/// * `plants` - Units to rank
///
/// # Returns
///
/// Unit names in merit order.
pub fn merit_order<'a>(fuels: &FuelPrices, plants: &'a [PowerPlant]) -> Vec<&'a str> {
    let mut costs: Vec<(&str, f64)> = plants
        .iter()
        .filter_map(|p| marginal_cost(fuels, p).map(|cost| (p.name.as_str(), cost)))
        .collect();
    costs.sort_by(|a, b| a.1.total_cmp(&b.1));
    costs.into_iter().map(|(name, _)| name).collect()
}
