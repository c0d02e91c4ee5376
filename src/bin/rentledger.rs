//! The command-line front end: loads the JSON data file, runs one operation
//! against the core, and saves the result back.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use time::{Date, OffsetDateTime, macros::format_description};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use rentledger::{
    Error,
    billing::{
        MeterReadingCommand, MoveOutCommand, RentOutCommand, generate_monthly_payments, move_out,
        record_meter_reading, rent_out,
    },
    integrity,
    models::{AppData, BillingMonth, PropertyId, RoomId},
    statistics::{
        PropertyStatistics, RateRecommendation, TimeScope, aggregate_statistics,
        property_statistics,
    },
    stores::{AppDataStore, JsonFileStore, export_json, import_json},
};

/// Rent, electricity billing and statistics for room rentals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application data document.
    #[arg(long, default_value = "rentledger.json")]
    data_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the statistics snapshot for one property, or the aggregate over
    /// all of them.
    Stats {
        /// The property to report on; omit for the all-properties view.
        #[arg(long)]
        property: Option<PropertyId>,
        /// The time window for revenue and electricity figures.
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,
        /// The year for the year or month scope; defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
        /// The month (1-12) for the month scope; defaults to the current month.
        #[arg(long)]
        month: Option<u8>,
    },
    /// Write this month's pending payments for every occupied room and drop
    /// stale ones for vacated rooms.
    Generate,
    /// Run the data integrity checks and list any issues found.
    Check,
    /// Move a tenant into a room.
    RentOut {
        /// The property the room belongs to.
        #[arg(long)]
        property: PropertyId,
        /// The room to rent out.
        #[arg(long)]
        room: RoomId,
        /// The tenant's name.
        #[arg(long)]
        tenant: String,
        /// The tenant's phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Contract start date, YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        start: Date,
        /// Contract end date, YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        end: Date,
        /// The meter reading at hand-over.
        #[arg(long)]
        meter: i64,
    },
    /// Move a tenant out of a room.
    MoveOut {
        /// The property the room belongs to.
        #[arg(long)]
        property: PropertyId,
        /// The room being vacated.
        #[arg(long)]
        room: RoomId,
        /// The meter reading at hand-over.
        #[arg(long)]
        meter: i64,
        /// Confirm settling any outstanding pending payments as paid.
        #[arg(long)]
        settle: bool,
    },
    /// Record a new meter reading for a room.
    Meter {
        /// The property the room belongs to.
        #[arg(long)]
        property: PropertyId,
        /// The room the reading is for.
        #[arg(long)]
        room: RoomId,
        /// The cumulative meter value.
        #[arg(long)]
        reading: i64,
    },
    /// Write the whole document to a backup file as pretty-printed JSON.
    Export {
        /// Where to write the backup.
        #[arg(long)]
        output: PathBuf,
    },
    /// Replace the whole document with a previously exported backup.
    Import {
        /// The backup file to read.
        #[arg(long)]
        input: PathBuf,
    },
}

/// The time window selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    /// Everything up to the current month.
    All,
    /// One calendar year.
    Year,
    /// One month.
    Month,
}

fn parse_date(text: &str) -> Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(text, &format).map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

fn main() {
    setup_logging();

    let args = Args::parse();
    let today = OffsetDateTime::now_utc().date();

    if let Err(error) = run(args, today) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args, today: Date) -> Result<(), Error> {
    let store = JsonFileStore::new(args.data_path);

    match args.command {
        Command::Stats {
            property,
            scope,
            year,
            month,
        } => {
            let data = store.load()?;
            let scope = resolve_scope(scope, year, month, today)?;
            print_stats(&data, property, scope, today)
        }
        Command::Generate => {
            let mut data = store.load()?;
            let billing_rate = data.billing_rate;
            for property in &mut data.properties {
                let result = generate_monthly_payments(property, billing_rate, today);
                println!(
                    "{}: {} created, {} removed",
                    property.name, result.created, result.removed
                );
            }
            store.save(&data)
        }
        Command::Check => {
            let data = store.load()?;
            let report = integrity::check(&data, today);
            if report.ok {
                println!("no issues found");
            } else {
                for issue in &report.issues {
                    println!("- {issue}");
                }
                std::process::exit(1);
            }
            Ok(())
        }
        Command::RentOut {
            property,
            room,
            tenant,
            phone,
            start,
            end,
            meter,
        } => {
            let mut data = store.load()?;
            let billing_rate = data.billing_rate;
            let target = data
                .property_mut(property)
                .ok_or(Error::PropertyNotFound(property))?;
            let written = rent_out(
                target,
                RentOutCommand {
                    room_id: room,
                    tenant_name: tenant,
                    tenant_phone: phone,
                    contract_start: start,
                    contract_end: end,
                    initial_meter: meter,
                },
                billing_rate,
                today,
            )?;
            println!("room {room} rented out, {written} payment(s) written");
            store.save(&data)
        }
        Command::MoveOut {
            property,
            room,
            meter,
            settle,
        } => {
            let mut data = store.load()?;
            let billing_rate = data.billing_rate;
            let target = data
                .property_mut(property)
                .ok_or(Error::PropertyNotFound(property))?;
            let outcome = move_out(
                target,
                MoveOutCommand {
                    room_id: room,
                    final_meter: meter,
                    settle_outstanding: settle,
                },
                billing_rate,
                today,
            )?;
            println!(
                "room {room} vacated: {} payment(s) settled, final electricity fee {}",
                outcome.settled, outcome.final_fee
            );
            store.save(&data)
        }
        Command::Meter {
            property,
            room,
            reading,
        } => {
            let mut data = store.load()?;
            let target = data
                .property_mut(property)
                .ok_or(Error::PropertyNotFound(property))?;
            let usage = record_meter_reading(
                target,
                MeterReadingCommand {
                    room_id: room,
                    reading,
                },
            )?;
            println!("room {room} meter set to {reading}, unbilled usage {usage}");
            store.save(&data)
        }
        Command::Export { output } => {
            let data = store.load()?;
            let text = export_json(&data)?;
            std::fs::write(&output, text).map_err(|error| Error::Io(error.to_string()))?;
            println!("exported to {}", output.display());
            Ok(())
        }
        Command::Import { input } => {
            let text =
                std::fs::read_to_string(&input).map_err(|error| Error::Io(error.to_string()))?;
            let data = import_json(&text)?;
            store.save(&data)?;
            println!(
                "imported {} propert{} from {}",
                data.properties.len(),
                if data.properties.len() == 1 { "y" } else { "ies" },
                input.display()
            );
            Ok(())
        }
    }
}

fn resolve_scope(
    scope: ScopeArg,
    year: Option<i32>,
    month: Option<u8>,
    today: Date,
) -> Result<TimeScope, Error> {
    match scope {
        ScopeArg::All => Ok(TimeScope::All),
        ScopeArg::Year => Ok(TimeScope::Year(year.unwrap_or_else(|| today.year()))),
        ScopeArg::Month => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or(today.month() as u8);
            Ok(TimeScope::Month(BillingMonth::new(year, month)?))
        }
    }
}

fn print_stats(
    data: &AppData,
    property: Option<PropertyId>,
    scope: TimeScope,
    today: Date,
) -> Result<(), Error> {
    let snapshot = match property {
        Some(id) => {
            let property = data.property(id).ok_or(Error::PropertyNotFound(id))?;
            println!("{}", property.name);
            property_statistics(property, data, scope, scope, today)
        }
        None => {
            println!("all properties ({})", data.properties.len());
            let snapshots: Vec<PropertyStatistics> = data
                .properties
                .iter()
                .map(|property| property_statistics(property, data, scope, scope, today))
                .collect();
            aggregate_statistics(&snapshots)
        }
    };

    println!(
        "rooms: {} total, {} occupied, {} available ({}% occupancy)",
        snapshot.total_rooms, snapshot.occupied, snapshot.available, snapshot.occupancy_rate
    );
    println!(
        "rent: {} total / {} average, deposits held: {}",
        snapshot.rent_total, snapshot.rent_average, snapshot.deposit_total
    );
    println!(
        "payments: {} pending across {} record(s), {} received",
        snapshot.pending_total, snapshot.pending_count, snapshot.received_total
    );

    let electricity = &snapshot.electricity;
    println!(
        "electricity: {} units billed for {}, cost {}, profit {} ({:.1}%), {} receivable",
        electricity.analysis.totals.usage,
        electricity.analysis.totals.charged,
        electricity.analysis.totals.actual_cost,
        electricity.analysis.profit,
        electricity.analysis.profit_rate,
        electricity.receivable
    );
    if let RateRecommendation::Raise { suggested_rate } = electricity.analysis.recommendation {
        println!("electricity is billed at a loss, consider a rate of {suggested_rate}");
    }

    println!("contracts expiring within 90 days: {}", snapshot.expiring_contracts);

    for floor in &snapshot.floors {
        println!(
            "floor {}: {}/{} occupied, rent {}",
            floor.floor, floor.occupied, floor.rooms, floor.rent_total
        );
    }

    Ok(())
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}
