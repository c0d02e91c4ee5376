//! This module defines the domain data types.

pub use app_data::AppData;
pub use maintenance::{Maintenance, MaintenanceId, MaintenanceStatus, Urgency};
pub use month::BillingMonth;
pub use payment::{Payment, PaymentId, PaymentStatus};
pub use property::{ExtraIncome, Property, PropertyId, UtilityExpense};
pub use room::{Room, RoomId, RoomStatus};

mod app_data;
mod maintenance;
mod month;
mod payment;
mod property;
mod room;
