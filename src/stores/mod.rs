//! Persistence for the [AppData](crate::models::AppData) document, plus the
//! manual export/import used for backups.

pub use json_file::JsonFileStore;

mod json_file;

use crate::Error;
use crate::models::AppData;

/// Loads and saves the whole application document.
pub trait AppDataStore {
    /// Load the document. A store with nothing saved yet returns an empty
    /// default document, not an error.
    fn load(&self) -> Result<AppData, Error>;

    /// Persist the whole document, replacing the previous version.
    fn save(&self, data: &AppData) -> Result<(), Error>;
}

/// Render the document as pretty-printed JSON for a manual backup.
pub fn export_json(data: &AppData) -> Result<String, Error> {
    serde_json::to_string_pretty(data).map_err(|error| Error::InvalidJson(error.to_string()))
}

/// Parse a backup document, replacing whatever was loaded before.
///
/// The selected property is reset to the first property in the imported
/// document, or to `None` (the all-properties view) when it has no
/// properties. A parse failure leaves the caller's state untouched.
pub fn import_json(text: &str) -> Result<AppData, Error> {
    let mut data: AppData =
        serde_json::from_str(text).map_err(|error| Error::InvalidJson(error.to_string()))?;

    data.current_property = data.properties.first().map(|property| property.id);

    Ok(data)
}

#[cfg(test)]
mod export_import_tests {
    use super::{export_json, import_json};
    use crate::Error;
    use crate::models::{AppData, Property};

    fn create_test_property(id: i64) -> Property {
        Property {
            id,
            name: format!("House {id}"),
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

    #[test]
    fn export_then_import_round_trips() {
        let data = AppData {
            properties: vec![create_test_property(3), create_test_property(5)],
            billing_rate: 6,
            actual_rate: 4,
            current_property: Some(5),
            ..Default::default()
        };

        let text = export_json(&data).unwrap();
        let imported = import_json(&text).unwrap();

        assert_eq!(imported.properties, data.properties);
        assert_eq!(imported.billing_rate, 6);
    }

    #[test]
    fn import_selects_the_first_property() {
        let data = AppData {
            properties: vec![create_test_property(3), create_test_property(5)],
            current_property: Some(5),
            ..Default::default()
        };

        let imported = import_json(&export_json(&data).unwrap()).unwrap();

        assert_eq!(imported.current_property, Some(3));
    }

    #[test]
    fn import_with_no_properties_selects_none() {
        let data = AppData {
            current_property: Some(7),
            ..Default::default()
        };

        let imported = import_json(&export_json(&data).unwrap()).unwrap();

        assert_eq!(imported.current_property, None);
    }

    #[test]
    fn import_rejects_malformed_json() {
        let result = import_json("{ \"properties\": ");

        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn export_is_pretty_printed() {
        let text = export_json(&AppData::default()).unwrap();

        assert!(text.contains('\n'));
    }
}
