//! Solder part type

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{
    check_real, CharValue, Characteristics, FieldReader, FieldSpec, FieldType, Part, PartKind,
};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "solder_type",
        field_type: FieldType::Choice(&["lead", "lead-free", "rosin-core", "acid-core"]),
        hint: "lead, lead-free, rosin-core, acid-core",
    },
    FieldSpec {
        name: "length",
        field_type: FieldType::Real,
        hint: "ft",
    },
];

/// Solder alloy / flux type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolderType {
    Lead,
    LeadFree,
    RosinCore,
    AcidCore,
}

impl SolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolderType::Lead => "lead",
            SolderType::LeadFree => "lead-free",
            SolderType::RosinCore => "rosin-core",
            SolderType::AcidCore => "acid-core",
        }
    }
}

impl fmt::Display for SolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SolderType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lead" => Ok(SolderType::Lead),
            "lead-free" => Ok(SolderType::LeadFree),
            "rosin-core" => Ok(SolderType::RosinCore),
            "acid-core" => Ok(SolderType::AcidCore),
            _ => Err(InventoryError::invalid_characteristic(
                "solder_type",
                format!(
                    "'{}' is not one of lead, lead-free, rosin-core, acid-core",
                    s
                ),
            )),
        }
    }
}

/// A spool of solder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solder {
    solder_type: SolderType,

    /// Length in feet
    length: f64,

    last_updated: DateTime<Utc>,
}

impl Solder {
    pub fn new(solder_type: SolderType, length: f64) -> Result<Self, InventoryError> {
        Ok(Self {
            solder_type,
            length: check_real("length", length)?,
            last_updated: Utc::now(),
        })
    }

    pub fn from_fields(fields: &Characteristics) -> Result<Self, InventoryError> {
        let reader = FieldReader::new(PartKind::Solder, fields)?;
        Self::new(reader.text("solder_type")?.parse()?, reader.real("length")?)
    }

    pub fn solder_type(&self) -> SolderType {
        self.solder_type
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl Part for Solder {
    fn kind(&self) -> PartKind {
        PartKind::Solder
    }

    fn characteristics(&self) -> Characteristics {
        let mut map = Characteristics::new();
        map.insert("solder_type".to_string(), self.solder_type.as_str().into());
        map.insert("length".to_string(), CharValue::Real(self.length));
        map
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl fmt::Display for Solder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solder Type: {}, Length: {} ft",
            self.solder_type, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solder_type_parse() {
        assert_eq!("lead".parse::<SolderType>().unwrap(), SolderType::Lead);
        assert_eq!("Rosin-Core".parse::<SolderType>().unwrap(), SolderType::RosinCore);
        assert!(matches!(
            "silver".parse::<SolderType>(),
            Err(InventoryError::InvalidCharacteristic { .. })
        ));
    }

    #[test]
    fn test_solder_characteristics() {
        let s = Solder::new(SolderType::LeadFree, 25.0).unwrap();
        let chars = s.characteristics();

        assert_eq!(chars.len(), 2);
        assert_eq!(chars.get("solder_type"), Some(&CharValue::from("lead-free")));
        assert_eq!(chars.get("length"), Some(&CharValue::Real(25.0)));
    }

    #[test]
    fn test_solder_rejects_bad_length() {
        assert!(Solder::new(SolderType::Lead, -2.0).is_err());
        assert!(Solder::new(SolderType::Lead, f64::NAN).is_err());
    }

    #[test]
    fn test_solder_from_fields_rejects_unknown_type() {
        let mut fields = Characteristics::new();
        fields.insert("solder_type".into(), CharValue::from("tin"));
        fields.insert("length".into(), CharValue::Real(10.0));

        assert!(Solder::from_fields(&fields).is_err());
    }

    #[test]
    fn test_solder_display() {
        let s = Solder::new(SolderType::AcidCore, 2.5).unwrap();
        assert_eq!(s.to_string(), "Solder Type: acid-core, Length: 2.5 ft");
    }
}
