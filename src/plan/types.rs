//! Request and plan types shared by the ranker, the allocator, and the API.
//!
//! Field names on the wire follow the payload format accepted by
//! `POST /productionplan`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fuel prices and wind conditions for the hour being planned.
///
/// # Examples
///
/// ```
/// use production_plan::plan::types::FuelPrices;
///
/// let fuels: FuelPrices = serde_json::from_str(
///     r#"{"gas(euro/MWh)": 13.4, "kerosine(euro/MWh)": 50.8, "co2(euro/ton)": 20, "wind(%)": 60}"#,
/// )
/// .unwrap();
/// assert_eq!(fuels.wind_pct, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    /// Gas price (EUR/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    /// Kerosine price (EUR/MWh). Accepted but not used by the cost model.
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    /// CO2 emission allowance price (EUR/ton). Accepted but not used by the cost model.
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    /// Wind availability as a percentage of nameplate capacity (0 to 100).
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

impl FuelPrices {
    /// Returns `true` when wind availability is exactly zero.
    ///
    /// Wind units are left out of the merit order in that case.
    pub fn is_windless(&self) -> bool {
        self.wind_pct == 0.0
    }
}

/// Generating technology of a power plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    /// Gas-fired thermal plant.
    GasFired,
    /// Turbojet peaker.
    Turbojet,
    /// Wind farm; `pmax` is nameplate capacity.
    WindTurbine,
}

impl PlantType {
    /// Returns the wire name of the plant type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GasFired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::WindTurbine => "windturbine",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generating unit as described in the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Unique name, used as the lookup key during allocation.
    pub name: String,
    /// Generating technology.
    #[serde(rename = "type")]
    pub kind: PlantType,
    /// Thermal efficiency (dimensionless). Ignored for wind units.
    pub efficiency: f64,
    /// Minimum stable output (MW).
    pub pmin: f64,
    /// Maximum output (MW). Nameplate capacity for wind units.
    pub pmax: f64,
}

impl PowerPlant {
    /// Returns `true` for wind units.
    pub fn is_wind(&self) -> bool {
        self.kind == PlantType::WindTurbine
    }

    /// Maximum output available this hour.
    ///
    /// Wind units are scaled by the wind availability; thermal units return
    /// `pmax` unchanged.
    pub fn available_pmax(&self, fuels: &FuelPrices) -> f64 {
        if self.is_wind() {
            self.pmax * fuels.wind_pct / 100.0
        } else {
            self.pmax
        }
    }
}

/// A production plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Total load to cover (MW).
    pub load: f64,
    /// Fuel prices and wind conditions.
    pub fuels: FuelPrices,
    /// Available generating units, in no particular order.
    pub powerplants: Vec<PowerPlant>,
}

/// Production assigned to one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Unit name.
    pub name: String,
    /// Assigned production (MW). Negative after an uncorrected min-output
    /// adjustment.
    pub p: f64,
}

impl Allocation {
    pub fn new(name: impl Into<String>, p: f64) -> Self {
        Self {
            name: name.into(),
            p,
        }
    }
}

/// Ordered list of allocations, merit order first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionPlan(pub Vec<Allocation>);

impl ProductionPlan {
    /// Iterates the allocations in plan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all assigned production (MW).
    pub fn total_mw(&self) -> f64 {
        self.0.iter().map(|a| a.p).sum()
    }

    /// Returns a copy with every `p` rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self(
            self.0
                .iter()
                .map(|a| Allocation::new(a.name.clone(), round_to(a.p, decimals)))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ProductionPlan {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProductionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.0 {
            writeln!(f, "{:<28} {:>10.1} MW", a.name, a.p)?;
        }
        Ok(())
    }
}

/// Rounds `value` half away from zero to `decimals` places.
///
/// Negative zero is normalized to `0.0` so rounded output never prints `-0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_wire_names() {
        let json = r#"{
            "load": 480,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150}
            ]
        }"#;
        let payload: Payload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.load, 480.0);
        assert_eq!(payload.fuels.gas, 13.4);
        assert_eq!(payload.powerplants[0].kind, PlantType::WindTurbine);
    }

    #[test]
    fn unknown_plant_type_is_rejected() {
        let json = r#"{"name": "x", "type": "nuclear", "efficiency": 0.3, "pmin": 0, "pmax": 10}"#;
        assert!(serde_json::from_str::<PowerPlant>(json).is_err());
    }

    #[test]
    fn wind_pmax_scaled_by_availability() {
        let fuels = FuelPrices {
            gas: 6.0,
            kerosine: 50.0,
            co2: 20.0,
            wind_pct: 60.0,
        };
        let wind = PowerPlant {
            name: "windpark1".into(),
            kind: PlantType::WindTurbine,
            efficiency: 1.0,
            pmin: 0.0,
            pmax: 150.0,
        };
        let gas = PowerPlant {
            kind: PlantType::GasFired,
            ..wind.clone()
        };
        assert_eq!(wind.available_pmax(&fuels), 90.0);
        assert_eq!(gas.available_pmax(&fuels), 150.0);
    }

    #[test]
    fn plan_serializes_as_array() {
        let plan = ProductionPlan(vec![Allocation::new("a", 1.0), Allocation::new("b", 0.0)]);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json, serde_json::json!([{"name": "a", "p": 1.0}, {"name": "b", "p": 0.0}]));
    }

    #[test]
    fn total_sums_all_entries() {
        let plan = ProductionPlan(vec![Allocation::new("a", 380.0), Allocation::new("b", 100.0)]);
        assert_eq!(plan.total_mw(), 480.0);
        assert_eq!(ProductionPlan::default().total_mw(), 0.0);
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_eq!(round_to(338.400_000_000_01, 1), 338.4);
        assert_eq!(round_to(21.65, 0), 22.0);
        assert_eq!(round_to(-0.04, 1), 0.0);
        assert!(round_to(-0.04, 1).is_sign_positive());
    }
}
