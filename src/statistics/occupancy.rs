//! Per-floor occupancy and rent rollups.

use std::collections::BTreeMap;

use crate::models::Property;

/// Occupancy and rent figures for one floor of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorOccupancy {
    /// The floor number.
    pub floor: u8,
    /// How many rooms the floor has.
    pub rooms: u32,
    /// How many of those rooms are occupied.
    pub occupied: u32,
    /// Total monthly rent of the occupied rooms on this floor.
    pub rent_total: i64,
}

/// Roll the property's rooms up into per-floor figures, ordered by floor.
pub fn floor_breakdown(property: &Property) -> Vec<FloorOccupancy> {
    let mut floors: BTreeMap<u8, FloorOccupancy> = BTreeMap::new();

    for room in &property.rooms {
        let entry = floors.entry(room.floor).or_insert(FloorOccupancy {
            floor: room.floor,
            rooms: 0,
            occupied: 0,
            rent_total: 0,
        });

        entry.rooms += 1;

        if room.is_occupied() {
            entry.occupied += 1;
            entry.rent_total += room.rent;
        }
    }

    floors.into_values().collect()
}
