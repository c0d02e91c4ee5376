//! This file defines `AppData`, the root document that everything else is
//! persisted inside.

use serde::{Deserialize, Serialize};

use crate::models::{ExtraIncome, Property, PropertyId, UtilityExpense};

/// The root aggregate: every property plus the global electricity rates.
///
/// The whole document is serialized and replaced wholesale on each save.
/// There is no partial write and no cross-process locking; concurrent
/// writers are last-write-wins at the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    /// All managed properties.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// The per-unit electricity rate charged to tenants.
    #[serde(default)]
    pub billing_rate: i64,
    /// The per-unit electricity rate the landlord actually pays.
    #[serde(default)]
    pub actual_rate: i64,
    /// Utility bills not tied to a single property.
    #[serde(default)]
    pub utility_expenses: Vec<UtilityExpense>,
    /// Income not tied to a single property.
    #[serde(default)]
    pub extra_income: Vec<ExtraIncome>,
    /// The property currently selected for display, `None` for the
    /// all-properties view.
    #[serde(default)]
    pub current_property: Option<PropertyId>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            billing_rate: 0,
            actual_rate: 0,
            utility_expenses: Vec::new(),
            extra_income: Vec::new(),
            current_property: None,
        }
    }
}

impl AppData {
    /// Look up a property by ID.
    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    /// Look up a property by ID for mutation.
    pub fn property_mut(&mut self, id: PropertyId) -> Option<&mut Property> {
        self.properties.iter_mut().find(|property| property.id == id)
    }
}
