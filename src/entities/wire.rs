//! Wire part type

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{
    check_real, CharValue, Characteristics, FieldReader, FieldSpec, FieldType, Part, PartKind,
};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "gauge",
        field_type: FieldType::Real,
        hint: "in",
    },
    FieldSpec {
        name: "length",
        field_type: FieldType::Real,
        hint: "ft",
    },
];

/// Hookup wire of a given gauge and length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wire {
    gauge: f64,
    length: f64,
    last_updated: DateTime<Utc>,
}

impl Wire {
    pub fn new(gauge: f64, length: f64) -> Result<Self, InventoryError> {
        Ok(Self {
            gauge: check_real("gauge", gauge)?,
            length: check_real("length", length)?,
            last_updated: Utc::now(),
        })
    }

    pub fn from_fields(fields: &Characteristics) -> Result<Self, InventoryError> {
        let reader = FieldReader::new(PartKind::Wire, fields)?;
        Self::new(reader.real("gauge")?, reader.real("length")?)
    }

    pub fn gauge(&self) -> f64 {
        self.gauge
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl Part for Wire {
    fn kind(&self) -> PartKind {
        PartKind::Wire
    }

    fn characteristics(&self) -> Characteristics {
        let mut map = Characteristics::new();
        map.insert("gauge".to_string(), CharValue::Real(self.gauge));
        map.insert("length".to_string(), CharValue::Real(self.length));
        map
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wire Gauge: {} in, Length: {} ft", self.gauge, self.length)
    }
}
