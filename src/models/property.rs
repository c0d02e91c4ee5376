//! This file defines `Property`, the building-level aggregate that owns
//! rooms, charges and maintenance records.

use serde::{Deserialize, Serialize};

use crate::models::{BillingMonth, Maintenance, Payment, PaymentId, Room, RoomId};

/// Alias for the integer type used for property IDs.
pub type PropertyId = i64;

/// A utility bill paid by the landlord, e.g. water or shared lighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityExpense {
    /// The ID of the record.
    pub id: i64,
    /// The month the expense belongs to.
    pub month: BillingMonth,
    /// What the expense was for.
    pub label: String,
    /// The amount paid.
    pub amount: i64,
}

/// Income outside the regular rent roll, e.g. vending machines or parking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraIncome {
    /// The ID of the record.
    pub id: i64,
    /// The month the income belongs to.
    pub month: BillingMonth,
    /// Where the income came from.
    pub label: String,
    /// The amount received.
    pub amount: i64,
}

/// A managed building: rooms plus the pending and settled charges raised
/// against them.
///
/// Pending charges live in [Property::payments]; settling a charge moves it
/// into [Property::history].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The ID of the property.
    pub id: PropertyId,
    /// Display name, e.g. "Hillside House".
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Number of floors.
    pub floors: u8,
    /// The rooms in this property.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Charges awaiting payment.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Settled charges.
    #[serde(default)]
    pub history: Vec<Payment>,
    /// Repair and upkeep records.
    #[serde(default)]
    pub maintenance: Vec<Maintenance>,
    /// Utility bills paid by the landlord for this property.
    #[serde(default)]
    pub utility_expenses: Vec<UtilityExpense>,
    /// Income outside the rent roll for this property.
    #[serde(default)]
    pub extra_income: Vec<ExtraIncome>,
}

impl Property {
    /// Look up a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Look up a room by ID for mutation.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Allocate the next payment ID: one above the highest ID across both
    /// pending and settled charges, so IDs are never reused even after a
    /// charge moves to history.
    pub fn next_payment_id(&self) -> PaymentId {
        let highest = self
            .payments
            .iter()
            .chain(self.history.iter())
            .map(|payment| payment.id)
            .max()
            .unwrap_or(0);

        highest + 1
    }
}

#[cfg(test)]
mod next_payment_id_tests {
    use time::macros::date;

    use crate::models::{BillingMonth, Payment, PaymentStatus, Property};

    fn create_test_property() -> Property {
        Property {
            id: 1,
            name: "Test House".to_owned(),
            address: String::new(),
            floors: 1,
            rooms: Vec::new(),
            payments: Vec::new(),
            history: Vec::new(),
            maintenance: Vec::new(),
            utility_expenses: Vec::new(),
            extra_income: Vec::new(),
        }
    }

    fn create_test_payment(id: i64) -> Payment {
        Payment {
            id,
            room_id: 1,
            month: BillingMonth::new(2025, 1).unwrap(),
            rent: 5000,
            electricity_usage: 0,
            electricity_fee: 0,
            rate: 6,
            total: 5000,
            due_date: date!(2025 - 02 - 05),
            status: PaymentStatus::Pending,
            paid_date: None,
            method: None,
            note: None,
        }
    }

    #[test]
    fn starts_at_one_for_empty_collections() {
        let property = create_test_property();

        assert_eq!(property.next_payment_id(), 1);
    }

    #[test]
    fn counts_ids_across_pending_and_history() {
        let mut property = create_test_property();
        property.payments.push(create_test_payment(3));
        property.history.push(create_test_payment(7));

        assert_eq!(property.next_payment_id(), 8);
    }
}
