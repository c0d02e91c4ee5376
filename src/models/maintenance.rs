//! This file defines `Maintenance`, the repair and upkeep records tracked per
//! property.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::RoomId;

/// Alias for the integer type used for maintenance record IDs.
pub type MaintenanceId = i64;

/// How quickly a maintenance job needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Can wait for the next scheduled visit.
    Low,
    /// Should be handled within the usual turnaround.
    Normal,
    /// Needs attention now.
    Urgent,
}

/// The lifecycle state of a maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Reported but not started.
    Open,
    /// Work has started.
    InProgress,
    /// Work is finished.
    Done,
}

/// A repair or upkeep job, tied to a room or to the property as a whole.
///
/// Maintenance records have their own lifecycle and are independent of the
/// billing timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    /// The ID of the record, unique within its property.
    pub id: MaintenanceId,
    /// The room the job concerns, or `None` for property-wide work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    /// Short summary of the job.
    pub title: String,
    /// Longer description of the problem and the work done.
    #[serde(default)]
    pub description: String,
    /// How quickly the job needs attention.
    pub urgency: Urgency,
    /// The lifecycle state of the job.
    pub status: MaintenanceStatus,
    /// The cost quoted before work started.
    #[serde(default)]
    pub estimated_cost: i64,
    /// The cost actually paid, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<i64>,
    /// When the problem was reported.
    pub reported_date: Date,
    /// When the work was finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<Date>,
}
