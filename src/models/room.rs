//! This file defines `Room`, the rentable unit that tenants, contracts and
//! meter readings hang off.

use serde::{Deserialize, Serialize};
use time::Date;

/// Alias for the integer type used for room IDs.
pub type RoomId = i64;

/// Whether a room currently has a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// The room is vacant and can be rented out.
    Available,
    /// The room has a tenant under contract.
    Occupied,
}

/// A rentable unit within a property.
///
/// Tenant details, contract dates and meter readings are only meaningful
/// while the room is [RoomStatus::Occupied]; the integrity checker reports
/// occupied rooms that are missing them but nothing enforces it structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// The ID of the room, unique within its property.
    pub id: RoomId,
    /// The floor the room is on.
    pub floor: u8,
    /// The room number as displayed, e.g. "201".
    pub number: String,
    /// The monthly rent.
    pub rent: i64,
    /// The deposit held while the room is occupied.
    pub deposit: i64,
    /// Whether the room currently has a tenant.
    pub status: RoomStatus,
    /// The current tenant's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    /// The current tenant's phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_phone: Option<String>,
    /// When the current tenancy contract started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_start: Option<Date>,
    /// When the current tenancy contract ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<Date>,
    /// The latest electricity meter reading.
    pub current_meter: i64,
    /// The meter reading at the start of the current billing cycle.
    pub previous_meter: i64,
}

impl Room {
    /// Whether the room currently has a tenant.
    pub fn is_occupied(&self) -> bool {
        self.status == RoomStatus::Occupied
    }

    /// The unbilled electricity usage for the current cycle.
    ///
    /// A reading lower than the previous one (replaced meter, typo) yields
    /// zero usage rather than a negative charge.
    pub fn usage(&self) -> i64 {
        (self.current_meter - self.previous_meter).max(0)
    }
}

#[cfg(test)]
mod room_tests {
    use super::{Room, RoomStatus};

    fn create_test_room(current_meter: i64, previous_meter: i64) -> Room {
        Room {
            id: 1,
            floor: 1,
            number: "101".to_owned(),
            rent: 7000,
            deposit: 14000,
            status: RoomStatus::Occupied,
            tenant_name: Some("Alex".to_owned()),
            tenant_phone: None,
            contract_start: None,
            contract_end: None,
            current_meter,
            previous_meter,
        }
    }

    #[test]
    fn usage_is_meter_delta() {
        let room = create_test_room(150, 100);

        assert_eq!(room.usage(), 50);
    }

    #[test]
    fn usage_clamps_decreasing_readings_to_zero() {
        let room = create_test_room(90, 100);

        assert_eq!(room.usage(), 0);
    }

    #[test]
    fn usage_is_zero_for_equal_readings() {
        let room = create_test_room(100, 100);

        assert_eq!(room.usage(), 0);
    }
}
