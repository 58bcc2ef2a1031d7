//! Display cable part type

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{
    check_real, CharValue, Characteristics, FieldReader, FieldSpec, FieldType, Part, PartKind,
};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "cable_type",
        field_type: FieldType::Choice(&["hdmi", "vga", "displayport", "micro-hdmi"]),
        hint: "hdmi, vga, displayport, micro-hdmi",
    },
    FieldSpec {
        name: "length",
        field_type: FieldType::Real,
        hint: "ft",
    },
    FieldSpec {
        name: "color",
        field_type: FieldType::Text,
        hint: "hex code",
    },
];

/// Video connector standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CableType {
    Hdmi,
    Vga,
    Displayport,
    MicroHdmi,
}

impl CableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CableType::Hdmi => "hdmi",
            CableType::Vga => "vga",
            CableType::Displayport => "displayport",
            CableType::MicroHdmi => "micro-hdmi",
        }
    }
}

impl fmt::Display for CableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CableType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hdmi" => Ok(CableType::Hdmi),
            "vga" => Ok(CableType::Vga),
            "displayport" => Ok(CableType::Displayport),
            "micro-hdmi" => Ok(CableType::MicroHdmi),
            _ => Err(InventoryError::invalid_characteristic(
                "cable_type",
                format!("'{}' is not one of hdmi, vga, displayport, micro-hdmi", s),
            )),
        }
    }
}

/// A video cable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCable {
    cable_type: CableType,
    length: f64,
    color: String,
    last_updated: DateTime<Utc>,
}

impl DisplayCable {
    pub fn new(
        cable_type: CableType,
        length: f64,
        color: impl Into<String>,
    ) -> Result<Self, InventoryError> {
        let color = color.into().trim().to_string();
        if color.is_empty() {
            return Err(InventoryError::invalid_characteristic(
                "color",
                "cannot be empty",
            ));
        }

        Ok(Self {
            cable_type,
            length: check_real("length", length)?,
            color,
            last_updated: Utc::now(),
        })
    }

    pub fn from_fields(fields: &Characteristics) -> Result<Self, InventoryError> {
        let reader = FieldReader::new(PartKind::DisplayCable, fields)?;
        Self::new(
            reader.text("cable_type")?.parse()?,
            reader.real("length")?,
            reader.text("color")?,
        )
    }

    pub fn cable_type(&self) -> CableType {
        self.cable_type
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl Part for DisplayCable {
    fn kind(&self) -> PartKind {
        PartKind::DisplayCable
    }

    fn characteristics(&self) -> Characteristics {
        let mut map = Characteristics::new();
        map.insert("cable_type".to_string(), self.cable_type.as_str().into());
        map.insert("length".to_string(), CharValue::Real(self.length));
        map.insert("color".to_string(), self.color.as_str().into());
        map
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl fmt::Display for DisplayCable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cable Type: {}, Length: {} ft, Color: {}",
            self.cable_type, self.length, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_cable_characteristics() {
        let c = DisplayCable::new(CableType::Hdmi, 6.0, "#000000").unwrap();
        let chars = c.characteristics();

        let keys: Vec<&str> = chars.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cable_type", "length", "color"]);
        assert_eq!(chars.get("cable_type"), Some(&CharValue::from("hdmi")));
        assert_eq!(chars.get("color"), Some(&CharValue::from("#000000")));
    }

    #[test]
    fn test_display_cable_rejects_blank_color() {
        assert!(matches!(
            DisplayCable::new(CableType::Vga, 3.0, "   "),
            Err(InventoryError::InvalidCharacteristic { ref field, .. }) if field == "color"
        ));
    }

    #[test]
    fn test_cable_type_parse() {
        assert_eq!("Micro-HDMI".parse::<CableType>().unwrap(), CableType::MicroHdmi);
        assert!("usb-c".parse::<CableType>().is_err());
    }

    #[test]
    fn test_display_cable_display() {
        let c = DisplayCable::new(CableType::Displayport, 10.0, "black").unwrap();
        assert_eq!(
            c.to_string(),
            "Cable Type: displayport, Length: 10 ft, Color: black"
        );
    }
}
