//! Monthly charge generation and reconciliation.

use std::collections::HashSet;

use time::Date;

use crate::models::{
    BillingMonth, Payment, PaymentId, PaymentStatus, Property, RoomId,
};

/// What one generator run did to a property's pending charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationResult {
    /// Charges written for the current month.
    pub created: u32,
    /// Stale charges removed for rooms that are no longer occupied.
    pub removed: u32,
}

/// Append a pending charge for `month` and return its ID.
///
/// IDs come from [Property::next_payment_id], so they stay monotonic across
/// pending and settled charges.
pub(crate) fn write_charge(
    property: &mut Property,
    room_id: RoomId,
    rent: i64,
    usage: i64,
    rate: i64,
    month: BillingMonth,
) -> PaymentId {
    let id = property.next_payment_id();
    let fee = usage * rate;

    property.payments.push(Payment {
        id,
        room_id,
        month,
        rent,
        electricity_usage: usage,
        electricity_fee: fee,
        rate,
        total: rent + fee,
        due_date: month.due_date(),
        status: PaymentStatus::Pending,
        paid_date: None,
        method: None,
        note: None,
    });

    id
}

/// Whether a charge already exists for `(room_id, month)`, pending or
/// settled. A charge that was settled moves wholesale into history, so both
/// collections count or a settled month would be billed again.
fn has_charge_for_month(property: &Property, room_id: RoomId, month: BillingMonth) -> bool {
    property
        .payments
        .iter()
        .chain(property.history.iter())
        .any(|payment| payment.room_id == room_id && payment.month == month)
}

/// Bring a property's pending charges up to date for the current month.
///
/// Every occupied room without a pending charge for the month of `today`
/// gets one: electricity from the unbilled meter delta at `billing_rate`,
/// total = rent + fee, due on the 5th of the next month. Charges are keyed
/// by `(room id, month)` across both pending and settled records, so repeat
/// runs write nothing, even after the month's charge has been paid.
///
/// After generation, pending charges whose room has been vacated (or no
/// longer exists) are dropped. This reconciliation half runs on every
/// invocation, not only when something was generated.
pub fn generate_monthly_payments(
    property: &mut Property,
    billing_rate: i64,
    today: Date,
) -> GenerationResult {
    let month = BillingMonth::from_date(today);
    let mut created = 0;

    let due: Vec<(RoomId, i64, i64)> = property
        .rooms
        .iter()
        .filter(|room| room.is_occupied())
        .map(|room| (room.id, room.rent, room.usage()))
        .collect();

    for (room_id, rent, usage) in due {
        if has_charge_for_month(property, room_id, month) {
            continue;
        }

        write_charge(property, room_id, rent, usage, billing_rate, month);
        created += 1;
    }

    let occupied: HashSet<RoomId> = property
        .rooms
        .iter()
        .filter(|room| room.is_occupied())
        .map(|room| room.id)
        .collect();

    let before = property.payments.len();
    property
        .payments
        .retain(|payment| occupied.contains(&payment.room_id));
    let removed = (before - property.payments.len()) as u32;

    if created > 0 || removed > 0 {
        tracing::info!(
            property = property.id,
            month = %month,
            created,
            removed,
            "updated pending charges"
        );
    }

    GenerationResult { created, removed }
}

#[cfg(test)]
mod generate_monthly_payments_tests {
    use time::macros::date;

    use super::generate_monthly_payments;
    use crate::models::{BillingMonth, Property, Room, RoomStatus};

    fn create_test_room(id: i64, rent: i64) -> Room {
        Room {
            id,
            floor: 1,
            number: format!("10{id}"),
            rent,
            deposit: 0,
            status: RoomStatus::Occupied,
            tenant_name: Some("Alex".to_owned()),
            tenant_phone: None,
            contract_start: Some(date!(2025 - 01 - 01)),
            contract_end: Some(date!(2025 - 12 - 31)),
            current_meter: 150,
            previous_meter: 100,
        }
    }

    fn create_test_property(rooms: Vec<Room>) -> Property {
        Property {
            id: 1,
            name: "Test House".to_owned(),
            address: String::new(),
            floors: 1,
            rooms,
            payments: Vec::new(),
            history: Vec::new(),
            maintenance: Vec::new(),
            utility_expenses: Vec::new(),
            extra_income: Vec::new(),
        }
    }

    #[test]
    fn writes_charge_for_occupied_room() {
        let mut property = create_test_property(vec![create_test_room(1, 7000)]);

        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        assert_eq!(result.created, 1);
        assert_eq!(property.payments.len(), 1);

        let payment = &property.payments[0];
        assert_eq!(payment.month, BillingMonth::new(2025, 6).unwrap());
        assert_eq!(payment.electricity_usage, 50);
        assert_eq!(payment.electricity_fee, 300);
        assert_eq!(payment.total, 7300);
        assert_eq!(payment.due_date, date!(2025 - 07 - 05));
        assert_eq!(payment.rate, 6);
    }

    #[test]
    fn repeat_runs_are_idempotent() {
        let mut property = create_test_property(vec![
            create_test_room(1, 7000),
            create_test_room(2, 6500),
        ]);

        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));
        let first_run = property.payments.clone();

        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        assert_eq!(result.created, 0);
        assert_eq!(result.removed, 0);
        assert_eq!(property.payments, first_run);
    }

    #[test]
    fn vacant_rooms_get_no_charge() {
        let mut room = create_test_room(1, 7000);
        room.status = RoomStatus::Available;
        let mut property = create_test_property(vec![room]);

        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        assert_eq!(result.created, 0);
        assert!(property.payments.is_empty());
    }

    #[test]
    fn removes_pending_charges_for_vacated_rooms() {
        let mut property = create_test_property(vec![
            create_test_room(1, 7000),
            create_test_room(2, 6500),
        ]);
        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));
        assert_eq!(property.payments.len(), 2);

        property.rooms[1].status = RoomStatus::Available;
        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        assert_eq!(result.removed, 1);
        assert_eq!(property.payments.len(), 1);
        assert_eq!(property.payments[0].room_id, 1);
    }

    #[test]
    fn decreasing_meter_clamps_usage_and_fee_to_zero() {
        let mut room = create_test_room(1, 7000);
        room.previous_meter = 200;
        room.current_meter = 150;
        let mut property = create_test_property(vec![room]);

        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        let payment = &property.payments[0];
        assert_eq!(payment.electricity_usage, 0);
        assert_eq!(payment.electricity_fee, 0);
        assert_eq!(payment.total, 7000);
    }

    #[test]
    fn settled_month_is_not_billed_again() {
        let mut property = create_test_property(vec![create_test_room(1, 7000)]);
        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        // The tenant pays June's charge, which moves it into history.
        let mut settled = property.payments.remove(0);
        settled.status = crate::models::PaymentStatus::Paid;
        settled.paid_date = Some(date!(2025 - 06 - 18));
        property.history.push(settled);

        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 20));

        assert_eq!(result.created, 0);
        assert!(property.payments.is_empty());
        assert_eq!(property.history.len(), 1);
    }

    #[test]
    fn ids_stay_monotonic_across_history() {
        let mut property = create_test_property(vec![create_test_room(1, 7000)]);
        generate_monthly_payments(&mut property, 6, date!(2025 - 05 - 15));

        // Settle May's charge, then generate June.
        let mut settled = property.payments.remove(0);
        settled.status = crate::models::PaymentStatus::Paid;
        let settled_id = settled.id;
        property.history.push(settled);

        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));

        assert_eq!(property.payments[0].id, settled_id + 1);
    }

    #[test]
    fn next_month_gets_its_own_charge() {
        let mut property = create_test_property(vec![create_test_room(1, 7000)]);

        generate_monthly_payments(&mut property, 6, date!(2025 - 06 - 15));
        let result = generate_monthly_payments(&mut property, 6, date!(2025 - 07 - 01));

        assert_eq!(result.created, 1);
        assert_eq!(property.payments.len(), 2);
    }
}
