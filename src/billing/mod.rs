//! Charge generation and the room lifecycle commands.
//!
//! [generate_monthly_payments] keeps each property's pending charges in step
//! with its occupied rooms; [rent_out], [move_out] and [record_meter_reading]
//! are the command handlers the front end drives tenancy changes through.

pub use generate::{GenerationResult, generate_monthly_payments};
pub use meter::{MeterReadingCommand, record_meter_reading};
pub use move_in::{RentOutCommand, rent_out};
pub use move_out::{MoveOutCommand, MoveOutOutcome, move_out};

mod generate;
mod meter;
mod move_in;
mod move_out;
