//! The meter reading command: record a new cycle's meter value for a room.

use crate::Error;
use crate::models::{Property, RoomId};

/// A monthly meter reading for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterReadingCommand {
    /// The room the reading belongs to.
    pub room_id: RoomId,
    /// The cumulative meter value read.
    pub reading: i64,
}

/// Record a meter reading: the previous cycle closes at the old current
/// value and the new reading becomes current.
///
/// Returns the unbilled usage for the new cycle. A reading below the old one
/// is accepted but logged, since the delta will clamp to zero when billed
/// and that usually means a data-entry mistake.
pub fn record_meter_reading(
    property: &mut Property,
    command: MeterReadingCommand,
) -> Result<i64, Error> {
    if command.reading < 0 {
        return Err(Error::InvalidMeterReading(command.reading));
    }

    let property_id = property.id;
    let room = property
        .room_mut(command.room_id)
        .ok_or(Error::RoomNotFound(command.room_id))?;

    if command.reading < room.current_meter {
        tracing::warn!(
            property = property_id,
            room = command.room_id,
            previous = room.current_meter,
            reading = command.reading,
            "meter reading decreased, usage will clamp to zero"
        );
    }

    room.previous_meter = room.current_meter;
    room.current_meter = command.reading;

    Ok(room.usage())
}

#[cfg(test)]
mod record_meter_reading_tests {
    use super::{MeterReadingCommand, record_meter_reading};
    use crate::Error;
    use crate::models::{Property, Room, RoomStatus};

    fn create_test_property() -> Property {
        Property {
            id: 1,
            name: "Test House".to_owned(),
            address: String::new(),
            floors: 1,
            rooms: vec![Room {
                id: 1,
                floor: 1,
                number: "101".to_owned(),
                rent: 7000,
                deposit: 0,
                status: RoomStatus::Occupied,
                tenant_name: Some("Alex".to_owned()),
                tenant_phone: None,
                contract_start: None,
                contract_end: None,
                current_meter: 150,
                previous_meter: 100,
            }],
            payments: Vec::new(),
            history: Vec::new(),
            maintenance: Vec::new(),
            utility_expenses: Vec::new(),
            extra_income: Vec::new(),
        }
    }

    #[test]
    fn advances_the_billing_cycle() {
        let mut property = create_test_property();

        let usage = record_meter_reading(
            &mut property,
            MeterReadingCommand {
                room_id: 1,
                reading: 190,
            },
        )
        .unwrap();

        assert_eq!(usage, 40);

        let room = property.room(1).unwrap();
        assert_eq!(room.previous_meter, 150);
        assert_eq!(room.current_meter, 190);
    }

    #[test]
    fn decreasing_reading_clamps_usage() {
        let mut property = create_test_property();

        let usage = record_meter_reading(
            &mut property,
            MeterReadingCommand {
                room_id: 1,
                reading: 120,
            },
        )
        .unwrap();

        assert_eq!(usage, 0);
    }

    #[test]
    fn rejects_negative_reading() {
        let mut property = create_test_property();

        let result = record_meter_reading(
            &mut property,
            MeterReadingCommand {
                room_id: 1,
                reading: -1,
            },
        );

        assert_eq!(result, Err(Error::InvalidMeterReading(-1)));
    }

    #[test]
    fn rejects_missing_room() {
        let mut property = create_test_property();

        let result = record_meter_reading(
            &mut property,
            MeterReadingCommand {
                room_id: 42,
                reading: 100,
            },
        );

        assert_eq!(result, Err(Error::RoomNotFound(42)));
    }
}
