//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use production_plan::plan::{FuelPrices, Payload, PlantType, PowerPlant, ProductionPlan};

/// Fuel prices used throughout the scenarios (gas 6, kerosine 50, CO2 20, wind 60%).
pub fn fuels() -> FuelPrices {
    FuelPrices {
        gas: 6.0,
        kerosine: 50.0,
        co2: 20.0,
        wind_pct: 60.0,
    }
}

/// Same prices with no wind.
pub fn fuels_no_wind() -> FuelPrices {
    FuelPrices {
        wind_pct: 0.0,
        ..fuels()
    }
}

fn plant(name: &str, kind: PlantType, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        kind,
        efficiency,
        pmin,
        pmax,
    }
}

/// 460 MW gas unit at 50% efficiency.
pub fn gasfired1() -> PowerPlant {
    plant("gasfiredbig1", PlantType::GasFired, 0.5, 100.0, 460.0)
}

/// 460 MW gas unit at 60% efficiency.
pub fn gasfired2() -> PowerPlant {
    plant("gasfiredbig2", PlantType::GasFired, 0.6, 100.0, 460.0)
}

/// 210 MW gas unit at 37% efficiency.
pub fn gasfired3() -> PowerPlant {
    plant("gasfiredsomewhatsmaller", PlantType::GasFired, 0.37, 40.0, 210.0)
}

/// 16 MW turbojet.
pub fn turbojet1() -> PowerPlant {
    plant("tj1", PlantType::Turbojet, 0.3, 0.0, 16.0)
}

/// 150 MW nameplate wind farm.
pub fn windturbine1() -> PowerPlant {
    plant("windpark1", PlantType::WindTurbine, 1.0, 0.0, 150.0)
}

/// Builds a payload from a load, prices, and fleet.
pub fn payload(load: f64, fuels: FuelPrices, powerplants: Vec<PowerPlant>) -> Payload {
    Payload {
        load,
        fuels,
        powerplants,
    }
}

/// Flattens a plan into `(name, p)` pairs for comparison.
pub fn pairs(plan: &ProductionPlan) -> Vec<(String, f64)> {
    plan.iter().map(|a| (a.name.clone(), a.p)).collect()
}

/// Owned `(name, p)` pairs from string literals.
pub fn expected(entries: &[(&str, f64)]) -> Vec<(String, f64)> {
    entries.iter().map(|(n, p)| ((*n).to_string(), *p)).collect()
}
