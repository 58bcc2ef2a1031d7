//! Resistor part type

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{
    check_whole, CharValue, Characteristics, FieldReader, FieldSpec, FieldType, Part, PartKind,
};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "resistance",
        field_type: FieldType::Integer,
        hint: "ohms",
    },
    FieldSpec {
        name: "tolerance",
        field_type: FieldType::Integer,
        hint: "%",
    },
];

/// A resistor with whole-number resistance and tolerance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resistor {
    /// Resistance in ohms
    resistance: i64,

    /// Tolerance in percent
    tolerance: i64,

    /// Last quantity change of the owning entry
    last_updated: DateTime<Utc>,
}

impl Resistor {
    pub fn new(resistance: i64, tolerance: i64) -> Result<Self, InventoryError> {
        Ok(Self {
            resistance: check_whole("resistance", resistance)?,
            tolerance: check_whole("tolerance", tolerance)?,
            last_updated: Utc::now(),
        })
    }

    /// Build from a raw field map; both fields must be whole numbers
    pub fn from_fields(fields: &Characteristics) -> Result<Self, InventoryError> {
        let reader = FieldReader::new(PartKind::Resistor, fields)?;
        Self::new(reader.integer("resistance")?, reader.integer("tolerance")?)
    }

    pub fn resistance(&self) -> i64 {
        self.resistance
    }

    pub fn tolerance(&self) -> i64 {
        self.tolerance
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl Part for Resistor {
    fn kind(&self) -> PartKind {
        PartKind::Resistor
    }

    fn characteristics(&self) -> Characteristics {
        let mut map = Characteristics::new();
        map.insert("resistance".to_string(), CharValue::Integer(self.resistance));
        map.insert("tolerance".to_string(), CharValue::Integer(self.tolerance));
        map
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resistance: {} ohms, Tolerance: {}%",
            self.resistance, self.tolerance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_creation() {
        let r = Resistor::new(220, 5).unwrap();
        assert_eq!(r.resistance(), 220);
        assert_eq!(r.tolerance(), 5);
        assert_eq!(r.kind(), PartKind::Resistor);
    }

    #[test]
    fn test_resistor_characteristics() {
        let r = Resistor::new(100, 1).unwrap();
        let chars = r.characteristics();

        assert_eq!(chars.len(), 2);
        assert_eq!(chars.get("resistance"), Some(&CharValue::Integer(100)));
        assert_eq!(chars.get("tolerance"), Some(&CharValue::Integer(1)));
        assert!(chars.get("last_updated").is_none());
    }

    #[test]
    fn test_resistor_rejects_negative() {
        assert!(matches!(
            Resistor::new(-1, 5),
            Err(InventoryError::InvalidCharacteristic { ref field, .. }) if field == "resistance"
        ));
    }

    #[test]
    fn test_resistor_from_fields_requires_whole_numbers() {
        let mut fields = Characteristics::new();
        fields.insert("resistance".into(), CharValue::Real(2.5));
        fields.insert("tolerance".into(), CharValue::Integer(5));

        assert!(matches!(
            Resistor::from_fields(&fields),
            Err(InventoryError::InvalidCharacteristic { ref field, .. }) if field == "resistance"
        ));

        fields.insert("resistance".into(), CharValue::Integer(470));
        let r = Resistor::from_fields(&fields).unwrap();
        assert_eq!(r.resistance(), 470);
    }

    #[test]
    fn test_resistor_display() {
        let r = Resistor::new(220, 5).unwrap();
        assert_eq!(r.to_string(), "Resistance: 220 ohms, Tolerance: 5%");
    }
}
