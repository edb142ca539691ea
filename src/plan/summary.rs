//! Post-hoc figures computed from a finished production plan.

use std::fmt;

use super::merit_order::marginal_cost;
use super::types::{Payload, PowerPlant, ProductionPlan};

/// Aggregate figures for one production plan.
///
/// Computed from the plan after allocation so reported numbers always match
/// what was emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    /// Requested load (MW).
    pub load_mw: f64,
    /// Sum of all allocations (MW).
    pub total_mw: f64,
    /// `total_mw - load_mw`; zero when the plan covers the load exactly.
    pub imbalance_mw: f64,
    /// Estimated fuel cost of running the plan for one hour (EUR).
    pub hourly_cost: f64,
    /// Number of allocations below zero.
    pub negative_entries: usize,
}

impl PlanSummary {
    /// Computes the summary of `plan` against the request it was built from.
    ///
    /// Cost uses the same marginal cost as the merit order; units that were
    /// left out of the ranking and idle units contribute nothing.
    pub fn from_plan(payload: &Payload, plan: &ProductionPlan) -> Self {
        let total_mw = plan.total_mw();
        let mut hourly_cost = 0.0;
        let mut negative_entries = 0;

        for a in plan {
            if a.p < 0.0 {
                negative_entries += 1;
            }
            // Idle units are free even when their cost is infinite (zero efficiency)
            if a.p == 0.0 {
                continue;
            }
            let cost = find_plant(payload, &a.name)
                .and_then(|plant| marginal_cost(&payload.fuels, plant))
                .unwrap_or(0.0);
            hourly_cost += a.p * cost;
        }

        Self {
            load_mw: payload.load,
            total_mw,
            imbalance_mw: total_mw - payload.load,
            hourly_cost,
            negative_entries,
        }
    }

    /// Returns `true` when output matches load within `tolerance_mw`.
    pub fn is_balanced(&self, tolerance_mw: f64) -> bool {
        self.imbalance_mw.abs() <= tolerance_mw
    }
}

fn find_plant<'a>(payload: &'a Payload, name: &str) -> Option<&'a PowerPlant> {
    payload.powerplants.iter().find(|p| p.name == name)
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Plan Summary ---")?;
        writeln!(f, "Requested load:    {:.1} MW", self.load_mw)?;
        writeln!(f, "Planned output:    {:.1} MW", self.total_mw)?;
        writeln!(f, "Imbalance:         {:.1} MW", self.imbalance_mw)?;
        writeln!(f, "Hourly fuel cost:  {:.2} EUR", self.hourly_cost)?;
        write!(f, "Negative entries:  {}", self.negative_entries)
    }
}
