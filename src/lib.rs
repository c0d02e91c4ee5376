//! Rentledger is a bookkeeping tool for landlords renting out rooms across
//! multiple properties: tenants, rent and resold-electricity billing,
//! maintenance records and the statistics derived from them.
//!
//! The library holds the domain models and the pure core: the statistics
//! engine, the monthly payment generator, the room lifecycle commands and
//! the integrity checker. State is a single JSON document persisted
//! wholesale through [stores::JsonFileStore]; the binaries under `src/bin/`
//! are thin front ends over these functions.

#![warn(missing_docs)]

use time::Date;

pub mod billing;
pub mod integrity;
pub mod models;
pub mod statistics;
pub mod stores;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A billing month string did not match the `YYYY/MM` format.
    #[error("\"{0}\" is not a valid billing month, expected YYYY/MM")]
    InvalidMonth(String),

    /// No property exists with the given ID.
    #[error("no property with ID {0}")]
    PropertyNotFound(models::PropertyId),

    /// No room exists with the given ID in the selected property.
    #[error("no room with ID {0}")]
    RoomNotFound(models::RoomId),

    /// Tried to rent out a room that already has a tenant.
    #[error("room {0} is already occupied")]
    RoomOccupied(models::RoomId),

    /// Tried to move a tenant out of a room that has none.
    #[error("room {0} is not occupied")]
    RoomVacant(models::RoomId),

    /// A tenancy contract was given an end date before its start date.
    #[error("the contract end date {end} is before the start date {start}")]
    InvalidContractDates {
        /// The contract start date that was given.
        start: Date,
        /// The offending end date.
        end: Date,
    },

    /// A meter reading was negative. Meters are cumulative counters, so
    /// readings below zero can only be data-entry mistakes.
    #[error("{0} is not a valid meter reading")]
    InvalidMeterReading(i64),

    /// A move-out would settle a nonzero outstanding balance without the
    /// user having confirmed it.
    #[error(
        "room {room_id} has {amount} outstanding in pending payments, \
        settling them at move-out needs confirmation"
    )]
    OutstandingPayments {
        /// The room being moved out of.
        room_id: models::RoomId,
        /// The combined total of the room's pending payments.
        amount: i64,
    },

    /// The data file could not be read or written.
    #[error("could not access the data file: {0}")]
    Io(String),

    /// The data document could not be parsed or serialized.
    #[error("could not parse the data document: {0}")]
    InvalidJson(String),
}
