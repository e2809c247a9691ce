//! Asset domain types

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::ids::IdAllocator;

/// A single inventoried item
///
/// Structure shared between the open job, the asset history document and
/// closed-job reports. The `id` is assigned once by an [`IdAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub model: String,
    pub serial_number: String,
    pub hard_drive_details: String,
    pub cosmetic_condition: String,
    pub is_desktop: bool,
    pub is_hard_drive_wiped: bool,
}

/// Operator-entered attributes for an asset that has no id yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAsset {
    pub model: String,
    pub serial_number: String,
    pub hard_drive_details: String,
    pub cosmetic_condition: String,
    pub is_desktop: bool,
    pub is_hard_drive_wiped: bool,
}

impl NewAsset {
    /// Trims the text fields and checks the required ones
    ///
    /// `model` and `serial_number` must be non-blank. Drive details and
    /// cosmetic condition may be left empty.
    pub fn validate(self) -> Result<Self> {
        let normalized = Self {
            model: self.model.trim().to_string(),
            serial_number: self.serial_number.trim().to_string(),
            hard_drive_details: self.hard_drive_details.trim().to_string(),
            cosmetic_condition: self.cosmetic_condition.trim().to_string(),
            ..self
        };

        if normalized.model.is_empty() {
            return Err(CoreError::Validation("model cannot be empty".to_string()));
        }

        if normalized.serial_number.is_empty() {
            return Err(CoreError::Validation(
                "serial_number cannot be empty".to_string(),
            ));
        }

        Ok(normalized)
    }

    /// Validates the fields and assigns the next asset id
    ///
    /// The allocator is only advanced when validation succeeds, so a
    /// rejected entry does not burn an id.
    pub fn create(self, ids: &mut IdAllocator) -> Result<Asset> {
        let fields = self.validate()?;

        Ok(Asset {
            id: ids.next_id()?,
            model: fields.model,
            serial_number: fields.serial_number,
            hard_drive_details: fields.hard_drive_details,
            cosmetic_condition: fields.cosmetic_condition,
            is_desktop: fields.is_desktop,
            is_hard_drive_wiped: fields.is_hard_drive_wiped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> NewAsset {
        NewAsset {
            model: "ThinkPad T480".to_string(),
            serial_number: "PF1ABC23".to_string(),
            hard_drive_details: "256GB NVMe".to_string(),
            cosmetic_condition: "Grade B".to_string(),
            is_desktop: false,
            is_hard_drive_wiped: true,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut ids = IdAllocator::assets();

        let first = laptop().create(&mut ids).unwrap();
        let second = laptop().create(&mut ids).unwrap();

        assert_eq!(first.id, "Asset-1");
        assert_eq!(second.id, "Asset-2");
        assert_eq!(first.model, "ThinkPad T480");
        assert!(first.is_hard_drive_wiped);
    }

    #[test]
    fn test_validate_trims_fields() {
        let fields = NewAsset {
            model: "  OptiPlex 7050 ".to_string(),
            serial_number: "\tSN-9\n".to_string(),
            ..NewAsset::default()
        };

        let fields = fields.validate().unwrap();
        assert_eq!(fields.model, "OptiPlex 7050");
        assert_eq!(fields.serial_number, "SN-9");
    }

    #[test]
    fn test_blank_required_fields_rejected() {
        let mut ids = IdAllocator::assets();

        let missing_model = NewAsset {
            model: "   ".to_string(),
            ..laptop()
        };
        let err = missing_model.create(&mut ids).unwrap_err();
        assert!(err.is_validation());

        let missing_serial = NewAsset {
            serial_number: String::new(),
            ..laptop()
        };
        assert!(missing_serial.create(&mut ids).unwrap_err().is_validation());

        // Rejected entries do not consume ids
        assert_eq!(laptop().create(&mut ids).unwrap().id, "Asset-1");
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let fields = NewAsset {
            hard_drive_details: String::new(),
            cosmetic_condition: String::new(),
            ..laptop()
        };

        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_asset_serializes_with_plain_field_names() {
        let mut ids = IdAllocator::assets();
        let asset = laptop().create(&mut ids).unwrap();

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["id"], "Asset-1");
        assert_eq!(value["serial_number"], "PF1ABC23");
        assert_eq!(value["is_desktop"], false);
        assert_eq!(value["is_hard_drive_wiped"], true);
    }
}
