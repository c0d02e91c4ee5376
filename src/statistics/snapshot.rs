//! The statistics engine: one snapshot per property, plus the cross-property
//! aggregate used by the all-properties view.

use time::{Date, Duration};

use crate::models::{AppData, BillingMonth, PaymentStatus, Property};
use crate::statistics::{
    ElectricityAnalysis, ElectricityTotals, FloorOccupancy, TimeScope, analyze, filter_scope,
    floor_breakdown,
};

/// Contracts ending within this many days of today count as expiring.
const EXPIRY_WINDOW_DAYS: i64 = 90;

/// Electricity figures for a snapshot: the billed history analysis plus the
/// current unbilled receivable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricityStatistics {
    /// Profit analysis of the settled charges in the electricity scope.
    pub analysis: ElectricityAnalysis,
    /// The fee for usage on the meters that has not been billed yet, at the
    /// current billing rate.
    pub receivable: i64,
}

/// A full statistics snapshot for one property (or the aggregate of several).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyStatistics {
    /// Total number of rooms.
    pub total_rooms: u32,
    /// Number of occupied rooms.
    pub occupied: u32,
    /// Number of available rooms.
    pub available: u32,
    /// Occupied share of rooms as a rounded integer percentage.
    pub occupancy_rate: u32,
    /// Total monthly rent of the occupied rooms.
    pub rent_total: i64,
    /// Average monthly rent of the occupied rooms, rounded.
    pub rent_average: i64,
    /// Total deposit held for the occupied rooms.
    pub deposit_total: i64,
    /// Combined amount of unsettled charges.
    pub pending_total: i64,
    /// Number of unsettled charges.
    pub pending_count: u32,
    /// Amount settled within the revenue scope.
    pub received_total: i64,
    /// Electricity figures for the electricity scope.
    pub electricity: ElectricityStatistics,
    /// Occupied rooms whose contract ends within the next 90 days.
    pub expiring_contracts: u32,
    /// Per-floor breakdown. Empty for aggregated snapshots.
    pub floors: Vec<FloorOccupancy>,
}

/// Build the statistics snapshot for one property.
///
/// `revenue_scope` selects which settled charges count as received;
/// `electricity_scope` independently selects which settled charges feed the
/// electricity profit analysis. Pending figures always cover every unsettled
/// charge up to the current month.
pub fn property_statistics(
    property: &Property,
    data: &AppData,
    revenue_scope: TimeScope,
    electricity_scope: TimeScope,
    today: Date,
) -> PropertyStatistics {
    let now = BillingMonth::from_date(today);

    let total_rooms = property.rooms.len() as u32;
    let occupied_rooms: Vec<_> = property
        .rooms
        .iter()
        .filter(|room| room.is_occupied())
        .collect();
    let occupied = occupied_rooms.len() as u32;
    let available = total_rooms - occupied;

    let occupancy_rate = if total_rooms == 0 {
        0
    } else {
        (occupied as f64 / total_rooms as f64 * 100.0).round() as u32
    };

    let rent_total: i64 = occupied_rooms.iter().map(|room| room.rent).sum();
    let rent_average = if occupied == 0 {
        0
    } else {
        (rent_total as f64 / occupied as f64).round() as i64
    };
    let deposit_total: i64 = occupied_rooms.iter().map(|room| room.deposit).sum();

    let pending = filter_scope(&property.payments, TimeScope::All, now);
    let pending_total: i64 = pending.iter().map(|payment| payment.total).sum();
    let pending_count = pending.len() as u32;

    let received: Vec<_> = filter_scope(&property.history, revenue_scope, now)
        .into_iter()
        .filter(|payment| payment.status == PaymentStatus::Paid)
        .collect();
    let received_total: i64 = received.iter().map(|payment| payment.total).sum();

    let billed = filter_scope(&property.history, electricity_scope, now);
    let usage: i64 = billed.iter().map(|payment| payment.electricity_usage).sum();
    let charged: i64 = billed.iter().map(|payment| payment.electricity_fee).sum();
    let analysis = analyze(ElectricityTotals {
        charged,
        usage,
        actual_cost: usage * data.actual_rate,
        actual_rate: data.actual_rate,
    });

    let receivable: i64 = occupied_rooms
        .iter()
        .map(|room| room.usage() * data.billing_rate)
        .sum();

    let expiring_contracts = occupied_rooms
        .iter()
        .filter(|room| {
            room.contract_end.is_some_and(|end| {
                let remaining = end - today;
                remaining >= Duration::ZERO && remaining <= Duration::days(EXPIRY_WINDOW_DAYS)
            })
        })
        .count() as u32;

    PropertyStatistics {
        total_rooms,
        occupied,
        available,
        occupancy_rate,
        rent_total,
        rent_average,
        deposit_total,
        pending_total,
        pending_count,
        received_total,
        electricity: ElectricityStatistics {
            analysis,
            receivable,
        },
        expiring_contracts,
        floors: floor_breakdown(property),
    }
}

/// Combine per-property snapshots into the all-properties view.
///
/// Counts and amounts are summed. Rate-like fields (occupancy rate, average
/// rent, electricity profit rate) are averaged across properties, which is an
/// average of averages rather than a weighted one.
pub fn aggregate_statistics(snapshots: &[PropertyStatistics]) -> PropertyStatistics {
    let count = snapshots.len();

    let mut totals = ElectricityTotals::default();
    let mut aggregate = PropertyStatistics {
        total_rooms: 0,
        occupied: 0,
        available: 0,
        occupancy_rate: 0,
        rent_total: 0,
        rent_average: 0,
        deposit_total: 0,
        pending_total: 0,
        pending_count: 0,
        received_total: 0,
        electricity: ElectricityStatistics {
            analysis: analyze(totals),
            receivable: 0,
        },
        expiring_contracts: 0,
        floors: Vec::new(),
    };

    if count == 0 {
        return aggregate;
    }

    for snapshot in snapshots {
        aggregate.total_rooms += snapshot.total_rooms;
        aggregate.occupied += snapshot.occupied;
        aggregate.available += snapshot.available;
        aggregate.rent_total += snapshot.rent_total;
        aggregate.deposit_total += snapshot.deposit_total;
        aggregate.pending_total += snapshot.pending_total;
        aggregate.pending_count += snapshot.pending_count;
        aggregate.received_total += snapshot.received_total;
        aggregate.expiring_contracts += snapshot.expiring_contracts;
        aggregate.electricity.receivable += snapshot.electricity.receivable;

        totals.charged += snapshot.electricity.analysis.totals.charged;
        totals.usage += snapshot.electricity.analysis.totals.usage;
        totals.actual_cost += snapshot.electricity.analysis.totals.actual_cost;
        totals.actual_rate = snapshot.electricity.analysis.totals.actual_rate;
    }

    let mean = |value: f64| (value / count as f64).round();
    aggregate.occupancy_rate = mean(
        snapshots
            .iter()
            .map(|snapshot| snapshot.occupancy_rate as f64)
            .sum(),
    ) as u32;
    aggregate.rent_average = mean(
        snapshots
            .iter()
            .map(|snapshot| snapshot.rent_average as f64)
            .sum(),
    ) as i64;

    let mut analysis = analyze(totals);
    analysis.profit_rate = snapshots
        .iter()
        .map(|snapshot| snapshot.electricity.analysis.profit_rate)
        .sum::<f64>()
        / count as f64;
    aggregate.electricity.analysis = analysis;

    aggregate
}


#[cfg(test)]
mod aggregate_statistics_tests {
    use time::macros::date;

    use super::{aggregate_statistics, property_statistics};
    use crate::models::{AppData, Property, Room, RoomStatus};
    use crate::statistics::TimeScope;

    fn create_test_property(id: i64, rooms: Vec<Room>) -> Property {
        Property {
            id,
            name: format!("House {id}"),
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

    fn create_test_room(id: i64, rent: i64, status: RoomStatus) -> Room {
        Room {
            id,
            floor: 1,
            number: format!("10{id}"),
            rent,
            deposit: 0,
            status,
            tenant_name: None,
            tenant_phone: None,
            contract_start: None,
            contract_end: None,
            current_meter: 0,
            previous_meter: 0,
        }
    }

    #[test]
    fn sums_counts_and_averages_rates() {
        let data = AppData {
            billing_rate: 6,
            actual_rate: 4,
            ..Default::default()
        };
        let today = date!(2025 - 06 - 15);

        // 100% occupied at 6000 rent and 50% occupied at 8000 rent.
        let first = create_test_property(1, vec![create_test_room(1, 6000, RoomStatus::Occupied)]);
        let second = create_test_property(
            2,
            vec![
                create_test_room(1, 8000, RoomStatus::Occupied),
                create_test_room(2, 8000, RoomStatus::Available),
            ],
        );

        let snapshots = vec![
            property_statistics(&first, &data, TimeScope::All, TimeScope::All, today),
            property_statistics(&second, &data, TimeScope::All, TimeScope::All, today),
        ];

        let result = aggregate_statistics(&snapshots);

        assert_eq!(result.total_rooms, 3);
        assert_eq!(result.occupied, 2);
        assert_eq!(result.rent_total, 14000);
        // Average of the per-property rates, not a weighted average.
        assert_eq!(result.occupancy_rate, 75);
        assert_eq!(result.rent_average, 7000);
        assert!(result.floors.is_empty());
    }

    #[test]
    fn empty_input_yields_zeroed_snapshot() {
        let result = aggregate_statistics(&[]);

        assert_eq!(result.total_rooms, 0);
        assert_eq!(result.occupancy_rate, 0);
        assert_eq!(result.pending_total, 0);
    }
}
