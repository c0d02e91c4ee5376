//! On-demand consistency checks over the whole document.
//!
//! These are warnings, not gates: nothing here blocks billing or statistics,
//! the report is only produced when the user asks for it.

use std::collections::BTreeMap;

use time::Date;

use crate::models::AppData;

/// The outcome of running [check] over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    /// True when no issues were found.
    pub ok: bool,
    /// One human-readable line per issue.
    pub issues: Vec<String>,
}

/// Inspect the document for cross-reference and bookkeeping problems.
///
/// Never mutates state. Reported issues: no properties, properties without
/// rooms, duplicate room numbers, non-positive electricity rates, occupied
/// rooms missing contract dates, occupied rooms with lapsed contracts, and
/// payments referencing rooms that do not exist.
pub fn check(data: &AppData, today: Date) -> IntegrityReport {
    let mut issues = Vec::new();

    if data.properties.is_empty() {
        issues.push("no properties have been created".to_owned());
    }

    if data.billing_rate <= 0 {
        issues.push("the electricity billing rate must be greater than zero".to_owned());
    }

    if data.actual_rate <= 0 {
        issues.push("the electricity cost rate must be greater than zero".to_owned());
    }

    for property in &data.properties {
        let name = &property.name;

        if property.rooms.is_empty() {
            issues.push(format!("property \"{name}\" has no rooms"));
        }

        let mut number_counts: BTreeMap<&str, u32> = BTreeMap::new();
        for room in &property.rooms {
            *number_counts.entry(room.number.as_str()).or_insert(0) += 1;
        }
        for (number, count) in number_counts {
            if count > 1 {
                issues.push(format!(
                    "property \"{name}\" has {count} rooms numbered \"{number}\""
                ));
            }
        }

        for room in &property.rooms {
            if !room.is_occupied() {
                continue;
            }

            let number = &room.number;

            match (room.contract_start, room.contract_end) {
                (Some(_), Some(end)) => {
                    if end < today {
                        issues.push(format!(
                            "the contract for room {number} in \"{name}\" expired on {end}"
                        ));
                    }
                }
                _ => issues.push(format!(
                    "room {number} in \"{name}\" is occupied but missing contract dates"
                )),
            }
        }

        for payment in property.payments.iter().chain(property.history.iter()) {
            if property.room(payment.room_id).is_none() {
                issues.push(format!(
                    "payment {} in \"{name}\" references missing room {}",
                    payment.id, payment.room_id
                ));
            }
        }
    }

    IntegrityReport {
        ok: issues.is_empty(),
        issues,
    }
}
