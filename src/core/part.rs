//! Part trait - common interface for all part variants

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::InventoryError;

/// A part's variant-specific fields, in declaration order
///
/// Equality ignores order, so two fingerprints compare equal when they hold
/// the same field names with the same values.
pub type Characteristics = IndexMap<String, CharValue>;

/// Common trait for all stocked part variants
pub trait Part {
    /// Which variant this part is
    fn kind(&self) -> PartKind;

    /// The characteristics fingerprint (timestamp excluded)
    fn characteristics(&self) -> Characteristics;

    /// When the owning inventory entry last changed quantity
    fn last_updated(&self) -> DateTime<Utc>;

    /// Whether `other` is the same catalog item as `self`
    fn same_item(&self, other: &dyn Part) -> bool {
        self.kind() == other.kind() && self.characteristics() == other.characteristics()
    }
}

/// A single characteristic value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CharValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CharValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Real value; whole numbers are widened since a length of `10` is `10.0`
    pub fn as_real(&self) -> Option<f64> {
        match self {
            CharValue::Real(v) => Some(*v),
            CharValue::Integer(v) => Some(*v as f64),
            CharValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CharValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CharValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharValue::Integer(v) => write!(f, "{}", v),
            CharValue::Real(v) => write!(f, "{}", v),
            CharValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for CharValue {
    fn from(v: i64) -> Self {
        CharValue::Integer(v)
    }
}

impl From<f64> for CharValue {
    fn from(v: f64) -> Self {
        CharValue::Real(v)
    }
}

impl From<&str> for CharValue {
    fn from(v: &str) -> Self {
        CharValue::Text(v.to_string())
    }
}

impl From<String> for CharValue {
    fn from(v: String) -> Self {
        CharValue::Text(v)
    }
}

/// The five stocked part variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Resistor,
    Solder,
    Wire,
    DisplayCable,
    EthernetCable,
}

impl PartKind {
    pub fn all() -> &'static [PartKind] {
        &[
            PartKind::Resistor,
            PartKind::Solder,
            PartKind::Wire,
            PartKind::DisplayCable,
            PartKind::EthernetCable,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::Resistor => "resistor",
            PartKind::Solder => "solder",
            PartKind::Wire => "wire",
            PartKind::DisplayCable => "display-cable",
            PartKind::EthernetCable => "ethernet-cable",
        }
    }

    /// Fields accepted by this variant, in declaration order
    pub fn fields(&self) -> &'static [FieldSpec] {
        use crate::entities::{display_cable, ethernet_cable, resistor, solder, wire};
        match self {
            PartKind::Resistor => resistor::FIELDS,
            PartKind::Solder => solder::FIELDS,
            PartKind::Wire => wire::FIELDS,
            PartKind::DisplayCable => display_cable::FIELDS,
            PartKind::EthernetCable => ethernet_cable::FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PartKind {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "resistor" => Ok(PartKind::Resistor),
            "solder" => Ok(PartKind::Solder),
            "wire" => Ok(PartKind::Wire),
            "display-cable" | "displaycable" => Ok(PartKind::DisplayCable),
            "ethernet-cable" | "ethernetcable" => Ok(PartKind::EthernetCable),
            _ => Err(InventoryError::InvalidPart {
                name: s.to_string(),
            }),
        }
    }
}

/// The semantic type of a characteristic field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Whole number
    Integer,
    /// Real number
    Real,
    /// Free text
    Text,
    /// One of a closed set of lowercase names
    Choice(&'static [&'static str]),
}

/// Name and type of one characteristic field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Unit or hint shown when prompting
    pub hint: &'static str,
}

impl FieldSpec {
    /// Parse raw text into a value of this field's type
    pub fn parse(&self, raw: &str) -> Result<CharValue, InventoryError> {
        let raw = raw.trim();
        match self.field_type {
            FieldType::Integer => raw.parse::<i64>().map(CharValue::Integer).map_err(|_| {
                InventoryError::invalid_characteristic(
                    self.name,
                    format!("'{}' is not a whole number", raw),
                )
            }),
            FieldType::Real => raw.parse::<f64>().map(CharValue::Real).map_err(|_| {
                InventoryError::invalid_characteristic(
                    self.name,
                    format!("'{}' is not a number", raw),
                )
            }),
            FieldType::Text => Ok(CharValue::Text(raw.to_string())),
            FieldType::Choice(options) => {
                let lowered = raw.to_lowercase();
                if options.contains(&lowered.as_str()) {
                    Ok(CharValue::Text(lowered))
                } else {
                    Err(InventoryError::invalid_characteristic(
                        self.name,
                        format!("'{}' is not one of {}", raw, options.join(", ")),
                    ))
                }
            }
        }
    }
}

/// Validate that a real-valued field is finite and non-negative
pub(crate) fn check_real(field: &str, value: f64) -> Result<f64, InventoryError> {
    if !value.is_finite() {
        return Err(InventoryError::invalid_characteristic(
            field,
            "must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(InventoryError::invalid_characteristic(
            field,
            "cannot be negative",
        ));
    }
    Ok(value)
}

/// Validate that an integer field is non-negative
pub(crate) fn check_whole(field: &str, value: i64) -> Result<i64, InventoryError> {
    if value < 0 {
        return Err(InventoryError::invalid_characteristic(
            field,
            "cannot be negative",
        ));
    }
    Ok(value)
}

/// Typed access to a raw field map when building a part from text input
pub(crate) struct FieldReader<'a> {
    kind: PartKind,
    fields: &'a Characteristics,
}

impl<'a> FieldReader<'a> {
    /// Reject names the variant does not declare, then allow typed reads
    pub(crate) fn new(kind: PartKind, fields: &'a Characteristics) -> Result<Self, InventoryError> {
        if let Some(unknown) = fields.keys().find(|name| kind.field(name).is_none()) {
            return Err(InventoryError::invalid_characteristic(
                unknown,
                format!("not a {} field", kind),
            ));
        }
        Ok(Self { kind, fields })
    }

    fn get(&self, name: &str) -> Result<&'a CharValue, InventoryError> {
        self.fields.get(name).ok_or_else(|| {
            InventoryError::invalid_characteristic(name, format!("required for {}", self.kind))
        })
    }

    pub(crate) fn integer(&self, name: &str) -> Result<i64, InventoryError> {
        self.get(name)?.as_integer().ok_or_else(|| {
            InventoryError::invalid_characteristic(name, "must be a whole number")
        })
    }

    pub(crate) fn real(&self, name: &str) -> Result<f64, InventoryError> {
        self.get(name)?
            .as_real()
            .ok_or_else(|| InventoryError::invalid_characteristic(name, "must be a number"))
    }

    pub(crate) fn text(&self, name: &str) -> Result<&'a str, InventoryError> {
        self.get(name)?
            .as_text()
            .ok_or_else(|| InventoryError::invalid_characteristic(name, "must be text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_kind_parse() {
        assert_eq!("resistor".parse::<PartKind>().unwrap(), PartKind::Resistor);
        assert_eq!("Display-Cable".parse::<PartKind>().unwrap(), PartKind::DisplayCable);
        assert_eq!("ethernet_cable".parse::<PartKind>().unwrap(), PartKind::EthernetCable);

        let err = "capacitor".parse::<PartKind>().unwrap_err();
        assert!(matches!(err, InventoryError::InvalidPart { ref name } if name == "capacitor"));
    }

    #[test]
    fn test_part_kind_display_roundtrip() {
        for kind in PartKind::all() {
            assert_eq!(kind.to_string().parse::<PartKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_field_spec_parse() {
        let resistance = PartKind::Resistor.field("resistance").unwrap();
        assert_eq!(resistance.parse("220").unwrap(), CharValue::Integer(220));
        assert!(matches!(
            resistance.parse("2.5"),
            Err(InventoryError::InvalidCharacteristic { .. })
        ));

        let solder_type = PartKind::Solder.field("solder_type").unwrap();
        assert_eq!(solder_type.parse("Lead-Free").unwrap(), CharValue::from("lead-free"));
        assert!(solder_type.parse("silver").is_err());

        let gauge = PartKind::Wire.field("gauge").unwrap();
        assert_eq!(gauge.parse("22").unwrap(), CharValue::Real(22.0));
    }

    #[test]
    fn test_char_value_widening() {
        assert_eq!(CharValue::Integer(10).as_real(), Some(10.0));
        assert_eq!(CharValue::Real(1.5).as_integer(), None);
        assert_eq!(CharValue::from("hdmi").as_text(), Some("hdmi"));
    }

    #[test]
    fn test_characteristics_equality_ignores_order() {
        let mut a = Characteristics::new();
        a.insert("gauge".into(), CharValue::Real(22.0));
        a.insert("length".into(), CharValue::Real(10.0));

        let mut b = Characteristics::new();
        b.insert("length".into(), CharValue::Real(10.0));
        b.insert("gauge".into(), CharValue::Real(22.0));

        assert_eq!(a, b);
    }

    #[test]
    fn test_field_reader_rejects_unknown_field() {
        let mut raw = Characteristics::new();
        raw.insert("resistance".into(), CharValue::Integer(100));
        raw.insert("wattage".into(), CharValue::Integer(1));

        assert!(matches!(
            FieldReader::new(PartKind::Resistor, &raw),
            Err(InventoryError::InvalidCharacteristic { ref field, .. }) if field == "wattage"
        ));
    }
}
