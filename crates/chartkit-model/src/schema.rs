//! Dataset-specific field names.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Sentinel group name for records whose category is missing or a placeholder.
pub const UNKNOWN_KEY: &str = "Unknown";

/// Names the columns the views read, plus the tokens that mean "no value".
///
/// Defaults describe the Australian Vehicle Prices dataset. Every field can be
/// overridden from a TOML file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetSchema {
    /// Primary categorical column (e.g. brand).
    pub category_field: String,
    /// Temporal column used as a string key (e.g. year).
    pub time_field: String,
    /// Price-like column averaged by the average views.
    pub value_field: String,
    /// Secondary categorical column (e.g. body type).
    pub secondary_field: String,
    /// Column consulted when the secondary column is absent or blank.
    pub secondary_fallback_field: Option<String>,
    /// Values treated as missing when they appear in a categorical column.
    pub placeholders: Vec<String>,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            category_field: "Brand".to_string(),
            time_field: "Year".to_string(),
            value_field: "Price".to_string(),
            secondary_field: "BodyType".to_string(),
            secondary_fallback_field: Some("Car/Suv".to_string()),
            placeholders: vec!["-".to_string()],
        }
    }
}

impl DatasetSchema {
    /// Rejects schemas with blank field names.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidSchema`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("category_field", self.category_field.as_str()),
            ("time_field", self.time_field.as_str()),
            ("value_field", self.value_field.as_str()),
            ("secondary_field", self.secondary_field.as_str()),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ModelError::InvalidSchema {
                    reason: format!("{key} must not be empty"),
                });
            }
        }
        if let Some(fallback) = &self.secondary_fallback_field
            && fallback.trim().is_empty()
        {
            return Err(ModelError::InvalidSchema {
                reason: "secondary_fallback_field must not be empty when set".to_string(),
            });
        }
        Ok(())
    }
}
