//! This file defines `Payment`, the monthly charge raised against a room.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::{BillingMonth, RoomId};

/// Alias for the integer type used for payment IDs.
pub type PaymentId = i64;

/// Whether a charge has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// The charge is awaiting payment.
    Pending,
    /// The charge has been settled.
    Paid,
}

/// A monthly charge for a room: rent plus resold electricity.
///
/// A payment lives in exactly one of a property's pending or history
/// collections. Settling a payment moves the record, it is never duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The ID of the payment, unique across pending and history within a
    /// property.
    pub id: PaymentId,
    /// The room this charge was raised against.
    pub room_id: RoomId,
    /// The month the charge covers.
    pub month: BillingMonth,
    /// The rent portion of the charge.
    pub rent: i64,
    /// Electricity usage in meter units.
    pub electricity_usage: i64,
    /// The electricity fee charged for [Payment::electricity_usage].
    pub electricity_fee: i64,
    /// The per-unit billing rate in force when this charge was written.
    ///
    /// Captured on the record so later rate changes never rewrite history.
    pub rate: i64,
    /// Rent plus electricity fee.
    pub total: i64,
    /// When the charge falls due.
    pub due_date: Date,
    /// Whether the charge has been settled.
    pub status: PaymentStatus,
    /// When the charge was settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<Date>,
    /// How the charge was settled, e.g. "cash" or "transfer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Free-form note, e.g. marking a charge settled at move-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
