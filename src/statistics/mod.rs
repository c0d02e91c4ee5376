//! Derives occupancy, revenue and electricity statistics from the raw
//! property records.

pub use electricity::{ElectricityAnalysis, ElectricityTotals, RateRecommendation, analyze};
pub use occupancy::{FloorOccupancy, floor_breakdown};
pub use snapshot::{
    ElectricityStatistics, PropertyStatistics, aggregate_statistics, property_statistics,
};
pub use time_filter::{Billed, TimeScope, filter_scope};

mod electricity;
mod occupancy;
mod snapshot;
mod time_filter;
