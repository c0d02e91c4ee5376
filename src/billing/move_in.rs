//! The rent-out command: move a tenant in and back-fill charges for a
//! retroactive contract start.

use time::Date;

use crate::Error;
use crate::billing::generate::write_charge;
use crate::models::{BillingMonth, Property, RoomId, RoomStatus};

/// Everything needed to move a tenant into a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RentOutCommand {
    /// The room to rent out.
    pub room_id: RoomId,
    /// The tenant's name.
    pub tenant_name: String,
    /// The tenant's phone number.
    pub tenant_phone: Option<String>,
    /// When the tenancy contract starts.
    pub contract_start: Date,
    /// When the tenancy contract ends.
    pub contract_end: Date,
    /// The meter reading handed over at move-in.
    pub initial_meter: i64,
}

/// Move a tenant in and bring the room's charges up to date.
///
/// When the contract started before the current month, one rent-only pending
/// charge is written per elapsed month from the start month up to (but
/// excluding) the current month. Those months predate any meter reading, so
/// their electricity usage and fee are zero. A current-month charge is then
/// written if one does not already exist.
///
/// Returns the number of charges written.
pub fn rent_out(
    property: &mut Property,
    command: RentOutCommand,
    billing_rate: i64,
    today: Date,
) -> Result<u32, Error> {
    if command.initial_meter < 0 {
        return Err(Error::InvalidMeterReading(command.initial_meter));
    }

    if command.contract_end < command.contract_start {
        return Err(Error::InvalidContractDates {
            start: command.contract_start,
            end: command.contract_end,
        });
    }

    let room = property
        .room(command.room_id)
        .ok_or(Error::RoomNotFound(command.room_id))?;

    if room.is_occupied() {
        return Err(Error::RoomOccupied(command.room_id));
    }

    let rent = room.rent;
    let room_id = command.room_id;

    {
        let room = property
            .room_mut(room_id)
            .ok_or(Error::RoomNotFound(room_id))?;
        room.status = RoomStatus::Occupied;
        room.tenant_name = Some(command.tenant_name.clone());
        room.tenant_phone = command.tenant_phone.clone();
        room.contract_start = Some(command.contract_start);
        room.contract_end = Some(command.contract_end);
        room.current_meter = command.initial_meter;
        room.previous_meter = command.initial_meter;
    }

    let current_month = BillingMonth::from_date(today);
    let start_month = BillingMonth::from_date(command.contract_start);
    let mut written = 0;

    for month in start_month.months_until(current_month) {
        write_charge(property, room_id, rent, 0, billing_rate, month);
        written += 1;
    }

    let current_exists = property
        .payments
        .iter()
        .any(|payment| payment.room_id == room_id && payment.month == current_month);

    if !current_exists {
        // Meters were just zeroed against the move-in reading, so the
        // current-month charge starts as rent only.
        write_charge(property, room_id, rent, 0, billing_rate, current_month);
        written += 1;
    }

    tracing::info!(
        property = property.id,
        room = room_id,
        tenant = %command.tenant_name,
        charges = written,
        "room rented out"
    );

    Ok(written)
}
