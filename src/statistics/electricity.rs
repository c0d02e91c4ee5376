//! Profit analysis for resold electricity.
//!
//! The landlord buys electricity at the actual rate and charges tenants the
//! billing rate. [analyze] reports whether that margin covers the cost and
//! suggests a corrected rate when it does not.

/// Aggregated electricity figures for some time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElectricityTotals {
    /// The total fees billed to tenants.
    pub charged: i64,
    /// The total usage in meter units.
    pub usage: i64,
    /// What the usage cost the landlord.
    pub actual_cost: i64,
    /// The landlord's per-unit cost rate.
    pub actual_rate: i64,
}

/// Whether the billing rate covers the landlord's cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateRecommendation {
    /// The billing rate is covering cost.
    Ok,
    /// Billing is running at a loss; raise the rate to at least
    /// `suggested_rate`.
    Raise {
        /// The recommended per-unit billing rate, the actual rate plus a 30%
        /// margin rounded up.
        suggested_rate: i64,
    },
}

/// The outcome of analyzing a set of [ElectricityTotals].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricityAnalysis {
    /// The figures the analysis was computed from.
    pub totals: ElectricityTotals,
    /// Billed amount minus actual cost.
    pub profit: i64,
    /// Profit as a percentage of actual cost, 0 when there was no cost.
    pub profit_rate: f64,
    /// Whether the billing rate needs raising.
    pub recommendation: RateRecommendation,
}

/// Compute profit, profit rate and a rate recommendation from aggregated
/// electricity figures. Deterministic, no side effects.
pub fn analyze(totals: ElectricityTotals) -> ElectricityAnalysis {
    let profit = totals.charged - totals.actual_cost;

    let profit_rate = if totals.actual_cost == 0 {
        0.0
    } else {
        profit as f64 / totals.actual_cost as f64 * 100.0
    };

    let recommendation = if profit >= 0 {
        RateRecommendation::Ok
    } else {
        RateRecommendation::Raise {
            suggested_rate: (totals.actual_rate as f64 * 1.3).ceil() as i64,
        }
    };

    ElectricityAnalysis {
        totals,
        profit,
        profit_rate,
        recommendation,
    }
}
