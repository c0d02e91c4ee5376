use std::error::Error;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use rentledger::{
    billing::{RentOutCommand, generate_monthly_payments, rent_out},
    models::{AppData, Property, Room, RoomStatus},
    stores::{AppDataStore, JsonFileStore},
};

/// A utility for creating a sample data file for manually testing rentledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the data document to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a data file for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if std::path::Path::new(&args.output_path).is_file() {
        eprintln!("File already exists at {}!", args.output_path);
        exit(1);
    }

    let today = OffsetDateTime::now_utc().date();

    let mut data = AppData {
        billing_rate: 6,
        actual_rate: 4,
        current_property: Some(1),
        ..Default::default()
    };

    let rooms = [
        (1, 1, "101", 7000),
        (2, 1, "102", 7000),
        (3, 2, "201", 7500),
        (4, 2, "202", 7500),
    ]
    .map(|(id, floor, number, rent)| Room {
        id,
        floor,
        number: number.to_owned(),
        rent,
        deposit: rent * 2,
        status: RoomStatus::Available,
        tenant_name: None,
        tenant_phone: None,
        contract_start: None,
        contract_end: None,
        current_meter: 0,
        previous_meter: 0,
    });

    data.properties.push(Property {
        id: 1,
        name: "Hillside House".to_owned(),
        address: "12 Hillside Terrace".to_owned(),
        floors: 2,
        rooms: rooms.to_vec(),
        payments: Vec::new(),
        history: Vec::new(),
        maintenance: Vec::new(),
        utility_expenses: Vec::new(),
        extra_income: Vec::new(),
    });

    println!("Renting out sample rooms...");

    let billing_rate = data.billing_rate;
    let property = &mut data.properties[0];
    rent_out(
        property,
        RentOutCommand {
            room_id: 1,
            tenant_name: "Alex Chen".to_owned(),
            tenant_phone: Some("021 555 0123".to_owned()),
            contract_start: today - Duration::days(60),
            contract_end: today + Duration::days(305),
            initial_meter: 1200,
        },
        billing_rate,
        today,
    )?;
    rent_out(
        property,
        RentOutCommand {
            room_id: 3,
            tenant_name: "Priya Sharma".to_owned(),
            tenant_phone: None,
            contract_start: today,
            contract_end: today + Duration::days(365),
            initial_meter: 830,
        },
        billing_rate,
        today,
    )?;

    generate_monthly_payments(property, billing_rate, today);

    let store = JsonFileStore::new(&args.output_path);
    store.save(&data)?;

    println!("Sample data written to {}", args.output_path);

    Ok(())
}
