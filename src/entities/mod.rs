//! Part type definitions
//!
//! Partbin stocks the following part types:
//!
//! - [`Resistor`] - whole-number resistance (ohms) and tolerance (%)
//! - [`Solder`] - solder spools by alloy/flux type and length
//! - [`Wire`] - hookup wire by gauge and length
//! - [`DisplayCable`] - HDMI, VGA, DisplayPort and micro-HDMI cables
//! - [`EthernetCable`] - patch cables by connector ends and rated speed
//!
//! [`PartRecord`] is the closed union of all of them that the inventory holds.

pub mod display_cable;
pub mod ethernet_cable;
pub mod resistor;
pub mod solder;
pub mod wire;

pub use display_cable::{CableType, DisplayCable};
pub use ethernet_cable::{ConnectorGender, EthernetCable, LinkSpeed};
pub use resistor::Resistor;
pub use solder::{Solder, SolderType};
pub use wire::Wire;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{Characteristics, Part, PartKind};

/// Any stocked part
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PartRecord {
    Resistor(Resistor),
    Solder(Solder),
    Wire(Wire),
    DisplayCable(DisplayCable),
    EthernetCable(EthernetCable),
}

impl PartRecord {
    /// Build a part of `kind` from a raw field map
    ///
    /// Every declared field must be present with the right type and nothing
    /// else may be given.
    pub fn from_fields(kind: PartKind, fields: &Characteristics) -> Result<Self, InventoryError> {
        Ok(match kind {
            PartKind::Resistor => Resistor::from_fields(fields)?.into(),
            PartKind::Solder => Solder::from_fields(fields)?.into(),
            PartKind::Wire => Wire::from_fields(fields)?.into(),
            PartKind::DisplayCable => DisplayCable::from_fields(fields)?.into(),
            PartKind::EthernetCable => EthernetCable::from_fields(fields)?.into(),
        })
    }

    fn inner(&self) -> &dyn Part {
        match self {
            PartRecord::Resistor(p) => p,
            PartRecord::Solder(p) => p,
            PartRecord::Wire(p) => p,
            PartRecord::DisplayCable(p) => p,
            PartRecord::EthernetCable(p) => p,
        }
    }

    pub(crate) fn touch(&mut self) {
        match self {
            PartRecord::Resistor(p) => p.touch(),
            PartRecord::Solder(p) => p.touch(),
            PartRecord::Wire(p) => p.touch(),
            PartRecord::DisplayCable(p) => p.touch(),
            PartRecord::EthernetCable(p) => p.touch(),
        }
    }
}

impl Part for PartRecord {
    fn kind(&self) -> PartKind {
        self.inner().kind()
    }

    fn characteristics(&self) -> Characteristics {
        self.inner().characteristics()
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.inner().last_updated()
    }
}

impl fmt::Display for PartRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartRecord::Resistor(p) => fmt::Display::fmt(p, f),
            PartRecord::Solder(p) => fmt::Display::fmt(p, f),
            PartRecord::Wire(p) => fmt::Display::fmt(p, f),
            PartRecord::DisplayCable(p) => fmt::Display::fmt(p, f),
            PartRecord::EthernetCable(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<Resistor> for PartRecord {
    fn from(p: Resistor) -> Self {
        PartRecord::Resistor(p)
    }
}

impl From<Solder> for PartRecord {
    fn from(p: Solder) -> Self {
        PartRecord::Solder(p)
    }
}

impl From<Wire> for PartRecord {
    fn from(p: Wire) -> Self {
        PartRecord::Wire(p)
    }
}

impl From<DisplayCable> for PartRecord {
    fn from(p: DisplayCable) -> Self {
        PartRecord::DisplayCable(p)
    }
}

impl From<EthernetCable> for PartRecord {
    fn from(p: EthernetCable) -> Self {
        PartRecord::EthernetCable(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::part::CharValue;

    #[test]
    fn test_record_delegates_kind() {
        let record: PartRecord = Wire::new(22.0, 10.0).unwrap().into();
        assert_eq!(record.kind(), PartKind::Wire);
        assert_eq!(record.characteristics().len(), 2);
    }

    #[test]
    fn test_from_fields_for_every_kind() {
        for kind in PartKind::all() {
            let mut fields = Characteristics::new();
            for spec in kind.fields() {
                let raw = match spec.name {
                    "resistance" => "100",
                    "tolerance" => "5",
                    "solder_type" => "rosin-core",
                    "cable_type" => "hdmi",
                    "color" => "#ffffff",
                    "alpha_type" | "beta_type" => "female",
                    "speed" => "100mbps",
                    _ => "2.5",
                };
                fields.insert(spec.name.to_string(), spec.parse(raw).unwrap());
            }

            let record = PartRecord::from_fields(*kind, &fields).unwrap();
            assert_eq!(record.kind(), *kind);
            assert_eq!(record.characteristics(), fields);
        }
    }

    #[test]
    fn test_same_item_requires_same_kind() {
        let wire: PartRecord = Wire::new(2.0, 2.0).unwrap().into();
        let solder: PartRecord = Solder::new(SolderType::Lead, 2.0).unwrap().into();
        assert!(!wire.same_item(&solder));

        let other_wire: PartRecord = Wire::new(2.0, 2.0).unwrap().into();
        assert!(wire.same_item(&other_wire));
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record: PartRecord = Resistor::new(220, 5).unwrap().into();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "resistor");
        assert_eq!(json["resistance"], 220);
        assert_eq!(
            record.characteristics().get("tolerance"),
            Some(&CharValue::Integer(5))
        );
    }
}
