//! Detail choice lists
//!
//! Previously seen values per asset attribute, offered to the operator as
//! choices during intake. Lists are append-only and may hold duplicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Asset attribute that has a choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    Model,
    SerialNumber,
    HardDriveDetails,
    CosmeticCondition,
}

impl DetailField {
    pub const ALL: [DetailField; 4] = [
        DetailField::Model,
        DetailField::SerialNumber,
        DetailField::HardDriveDetails,
        DetailField::CosmeticCondition,
    ];

    /// Key used in `details.json`
    pub fn key(&self) -> &'static str {
        match self {
            DetailField::Model => "model",
            DetailField::SerialNumber => "serial_number",
            DetailField::HardDriveDetails => "hard_drive_details",
            DetailField::CosmeticCondition => "cosmetic_condition",
        }
    }

    /// Operator-facing label
    pub fn label(&self) -> &'static str {
        match self {
            DetailField::Model => "Model",
            DetailField::SerialNumber => "Serial Number",
            DetailField::HardDriveDetails => "Hard Drive Details",
            DetailField::CosmeticCondition => "Cosmetic Condition",
        }
    }
}

impl std::fmt::Display for DetailField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DetailField {
    type Err = CoreError;

    /// Accepts the JSON key or its kebab-case spelling
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        DetailField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown detail field '{}' (expected one of: model, serial-number, hard-drive-details, cosmetic-condition)",
                    s
                ))
            })
    }
}

/// Contents of `details.json`
///
/// A key absent from the file loads as an empty list. Keys this tool does
/// not know are kept in `other` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub model: Vec<String>,
    #[serde(default)]
    pub serial_number: Vec<String>,
    #[serde(default)]
    pub hard_drive_details: Vec<String>,
    #[serde(default)]
    pub cosmetic_condition: Vec<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Details {
    pub fn options(&self, field: DetailField) -> &[String] {
        match field {
            DetailField::Model => &self.model,
            DetailField::SerialNumber => &self.serial_number,
            DetailField::HardDriveDetails => &self.hard_drive_details,
            DetailField::CosmeticCondition => &self.cosmetic_condition,
        }
    }

    fn options_mut(&mut self, field: DetailField) -> &mut Vec<String> {
        match field {
            DetailField::Model => &mut self.model,
            DetailField::SerialNumber => &mut self.serial_number,
            DetailField::HardDriveDetails => &mut self.hard_drive_details,
            DetailField::CosmeticCondition => &mut self.cosmetic_condition,
        }
    }

    /// Appends a value to a field's list
    ///
    /// Blank values are rejected. Duplicates are kept.
    pub fn add_option(&mut self, field: DetailField, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CoreError::Validation(format!(
                "new {} option cannot be empty",
                field.label().to_lowercase()
            )));
        }

        self.options_mut(field).push(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_field() {
        assert_eq!("model".parse::<DetailField>().unwrap(), DetailField::Model);
        assert_eq!(
            "serial-number".parse::<DetailField>().unwrap(),
            DetailField::SerialNumber
        );
        assert_eq!(
            "hard_drive_details".parse::<DetailField>().unwrap(),
            DetailField::HardDriveDetails
        );
        assert_eq!(
            "Cosmetic-Condition".parse::<DetailField>().unwrap(),
            DetailField::CosmeticCondition
        );
        assert!("colour".parse::<DetailField>().is_err());
    }

    #[test]
    fn test_add_option_appends_duplicates() {
        let mut details = Details::default();
        details.add_option(DetailField::Model, "OptiPlex 7050").unwrap();
        details.add_option(DetailField::Model, " OptiPlex 7050 ").unwrap();

        assert_eq!(
            details.options(DetailField::Model),
            ["OptiPlex 7050", "OptiPlex 7050"]
        );
        assert!(details.options(DetailField::SerialNumber).is_empty());
    }

    #[test]
    fn test_add_blank_option_rejected() {
        let mut details = Details::default();
        let err = details
            .add_option(DetailField::CosmeticCondition, "  ")
            .unwrap_err();

        assert!(err.is_validation());
        assert!(details.cosmetic_condition.is_empty());
    }

    #[test]
    fn test_missing_keys_load_as_empty() {
        let details: Details = serde_json::from_str(r#"{"model": ["T480"]}"#).unwrap();
        assert_eq!(details.model, ["T480"]);
        assert!(details.hard_drive_details.is_empty());
    }

    #[test]
    fn test_wrong_shape_fails_to_parse() {
        assert!(serde_json::from_str::<Details>(r#"{"model": "T480"}"#).is_err());
        assert!(serde_json::from_str::<Details>(r#"["model"]"#).is_err());
    }

    #[test]
    fn test_unknown_keys_survive_save() {
        let json = r#"{"model": ["T480"], "colour": ["black", "silver"], "version": 2}"#;
        let mut details: Details = serde_json::from_str(json).unwrap();
        details.add_option(DetailField::Model, "X1 Carbon").unwrap();

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["colour"], serde_json::json!(["black", "silver"]));
        assert_eq!(value["version"], 2);
        assert_eq!(value["model"], serde_json::json!(["T480", "X1 Carbon"]));
        assert_eq!(details.other.len(), 2);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(Details::default()).unwrap();
        for field in DetailField::ALL {
            assert!(value.get(field.key()).is_some(), "missing {}", field.key());
        }
    }
}
