//! The move-out command: settle a room's outstanding charges and vacate it.

use time::Date;

use crate::Error;
use crate::models::{
    BillingMonth, Payment, PaymentStatus, Property, RoomId, RoomStatus,
};

/// Note attached to pending charges that are settled as part of a move-out.
const SETTLED_AT_MOVE_OUT: &str = "settled at move-out";

/// Everything needed to move a tenant out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutCommand {
    /// The room being vacated.
    pub room_id: RoomId,
    /// The meter reading taken at hand-over.
    pub final_meter: i64,
    /// Confirmation that outstanding pending charges should be settled as
    /// part of the move-out. Without it, a nonzero balance blocks the
    /// operation.
    pub settle_outstanding: bool,
}

/// What a completed move-out settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutOutcome {
    /// Pending charges moved to history.
    pub settled: u32,
    /// The fee for the final, unbilled electricity usage.
    pub final_fee: i64,
}

/// Move a tenant out.
///
/// The room's pending charges move to history as paid, dated `today` and
/// noted as settled at move-out; a nonzero outstanding balance requires
/// [MoveOutCommand::settle_outstanding] and fails with
/// [Error::OutstandingPayments] otherwise. A final electricity-only charge is
/// written straight into history for the usage between the last recorded
/// reading and `final_meter`, clamped to zero if the reading decreased. The
/// billing rate is captured on that record so later rate changes do not
/// disturb historical profit figures.
pub fn move_out(
    property: &mut Property,
    command: MoveOutCommand,
    billing_rate: i64,
    today: Date,
) -> Result<MoveOutOutcome, Error> {
    if command.final_meter < 0 {
        return Err(Error::InvalidMeterReading(command.final_meter));
    }

    let room = property
        .room(command.room_id)
        .ok_or(Error::RoomNotFound(command.room_id))?;

    if !room.is_occupied() {
        return Err(Error::RoomVacant(command.room_id));
    }

    let last_reading = room.current_meter;

    let outstanding: i64 = property
        .payments
        .iter()
        .filter(|payment| payment.room_id == command.room_id)
        .map(|payment| payment.total)
        .sum();

    if outstanding != 0 && !command.settle_outstanding {
        return Err(Error::OutstandingPayments {
            room_id: command.room_id,
            amount: outstanding,
        });
    }

    // Settle the room's pending charges into history.
    let mut settled = 0;
    let mut remaining = Vec::with_capacity(property.payments.len());
    for mut payment in property.payments.drain(..) {
        if payment.room_id != command.room_id {
            remaining.push(payment);
            continue;
        }

        payment.status = PaymentStatus::Paid;
        payment.paid_date = Some(today);
        payment.note = Some(SETTLED_AT_MOVE_OUT.to_owned());
        property.history.push(payment);
        settled += 1;
    }
    property.payments = remaining;

    // Final electricity-only charge from the hand-over reading.
    let usage = (command.final_meter - last_reading).max(0);
    let final_fee = usage * billing_rate;
    if command.final_meter < last_reading {
        tracing::warn!(
            property = property.id,
            room = command.room_id,
            last_reading,
            final_meter = command.final_meter,
            "final meter reading decreased, charging zero usage"
        );
    }

    let month = BillingMonth::from_date(today);
    property.history.push(Payment {
        id: property.next_payment_id(),
        room_id: command.room_id,
        month,
        rent: 0,
        electricity_usage: usage,
        electricity_fee: final_fee,
        rate: billing_rate,
        total: final_fee,
        due_date: today,
        status: PaymentStatus::Paid,
        paid_date: Some(today),
        method: None,
        note: Some("final electricity charge at move-out".to_owned()),
    });

    let room = property
        .room_mut(command.room_id)
        .ok_or(Error::RoomNotFound(command.room_id))?;
    room.status = RoomStatus::Available;
    room.tenant_name = None;
    room.tenant_phone = None;
    room.contract_start = None;
    room.contract_end = None;
    room.current_meter = command.final_meter;
    room.previous_meter = command.final_meter;

    tracing::info!(
        property = property.id,
        room = command.room_id,
        settled,
        final_fee,
        "room vacated"
    );

    Ok(MoveOutOutcome { settled, final_fee })
}
