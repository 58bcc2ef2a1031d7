//! Inventory error taxonomy with diagnostic codes

use miette::Diagnostic;
use thiserror::Error;

/// Every failure a core operation can report
///
/// All variants are local validation failures. None of them leaves the
/// inventory in a partially updated state.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum InventoryError {
    #[error("SKU '{sku}' already exists")]
    #[diagnostic(
        code(partbin::inventory::duplicate_sku),
        help("choose another SKU or use `stock` to add quantity to the existing entry")
    )]
    DuplicateSku { sku: String },

    #[error("SKU '{sku}' does not exist")]
    #[diagnostic(code(partbin::inventory::unknown_sku))]
    UnknownSku { sku: String },

    #[error("Quantity cannot be negative (got {quantity})")]
    #[diagnostic(code(partbin::inventory::invalid_quantity))]
    InvalidQuantity { quantity: i64 },

    #[error("Unknown part type: {name}")]
    #[diagnostic(
        code(partbin::part::invalid_part),
        help("valid part types: resistor, solder, wire, display-cable, ethernet-cable")
    )]
    InvalidPart { name: String },

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(partbin::part::invalid_characteristic))]
    InvalidCharacteristic { field: String, reason: String },
}

impl InventoryError {
    pub(crate) fn unknown_sku(sku: &str) -> Self {
        InventoryError::UnknownSku {
            sku: sku.to_string(),
        }
    }

    pub(crate) fn invalid_characteristic(field: &str, reason: impl Into<String>) -> Self {
        InventoryError::InvalidCharacteristic {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
