//! Ethernet cable part type

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::core::error::InventoryError;
use crate::core::part::{
    check_real, CharValue, Characteristics, FieldReader, FieldSpec, FieldType, Part, PartKind,
};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "alpha_type",
        field_type: FieldType::Choice(&["male", "female"]),
        hint: "male, female",
    },
    FieldSpec {
        name: "beta_type",
        field_type: FieldType::Choice(&["male", "female"]),
        hint: "male, female",
    },
    FieldSpec {
        name: "speed",
        field_type: FieldType::Choice(&["10mbps", "100mbps", "1gbps"]),
        hint: "10mbps, 100mbps, 1gbps",
    },
    FieldSpec {
        name: "length",
        field_type: FieldType::Real,
        hint: "ft",
    },
];

/// Connector gender at one end of the cable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorGender {
    Male,
    Female,
}

impl ConnectorGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorGender::Male => "male",
            ConnectorGender::Female => "female",
        }
    }

    fn parse_field(field: &str, s: &str) -> Result<Self, InventoryError> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(ConnectorGender::Male),
            "female" => Ok(ConnectorGender::Female),
            _ => Err(InventoryError::invalid_characteristic(
                field,
                format!("'{}' is not one of male, female", s),
            )),
        }
    }
}

impl fmt::Display for ConnectorGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rated link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkSpeed {
    #[serde(rename = "10mbps")]
    Mbps10,
    #[serde(rename = "100mbps")]
    Mbps100,
    #[serde(rename = "1gbps")]
    Gbps1,
}

impl LinkSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkSpeed::Mbps10 => "10mbps",
            LinkSpeed::Mbps100 => "100mbps",
            LinkSpeed::Gbps1 => "1gbps",
        }
    }
}

impl fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LinkSpeed {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "10mbps" => Ok(LinkSpeed::Mbps10),
            "100mbps" => Ok(LinkSpeed::Mbps100),
            "1gbps" => Ok(LinkSpeed::Gbps1),
            _ => Err(InventoryError::invalid_characteristic(
                "speed",
                format!("'{}' is not one of 10mbps, 100mbps, 1gbps", s),
            )),
        }
    }
}

/// A patch cable; alpha and beta name its two ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EthernetCable {
    alpha_type: ConnectorGender,
    beta_type: ConnectorGender,
    speed: LinkSpeed,
    length: f64,
    last_updated: DateTime<Utc>,
}

impl EthernetCable {
    pub fn new(
        alpha_type: ConnectorGender,
        beta_type: ConnectorGender,
        speed: LinkSpeed,
        length: f64,
    ) -> Result<Self, InventoryError> {
        Ok(Self {
            alpha_type,
            beta_type,
            speed,
            length: check_real("length", length)?,
            last_updated: Utc::now(),
        })
    }

    pub fn from_fields(fields: &Characteristics) -> Result<Self, InventoryError> {
        let reader = FieldReader::new(PartKind::EthernetCable, fields)?;
        Self::new(
            ConnectorGender::parse_field("alpha_type", reader.text("alpha_type")?)?,
            ConnectorGender::parse_field("beta_type", reader.text("beta_type")?)?,
            reader.text("speed")?.parse()?,
            reader.real("length")?,
        )
    }

    pub fn alpha_type(&self) -> ConnectorGender {
        self.alpha_type
    }

    pub fn beta_type(&self) -> ConnectorGender {
        self.beta_type
    }

    pub fn speed(&self) -> LinkSpeed {
        self.speed
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl Part for EthernetCable {
    fn kind(&self) -> PartKind {
        PartKind::EthernetCable
    }

    fn characteristics(&self) -> Characteristics {
        let mut map = Characteristics::new();
        map.insert("alpha_type".to_string(), self.alpha_type.as_str().into());
        map.insert("beta_type".to_string(), self.beta_type.as_str().into());
        map.insert("speed".to_string(), self.speed.as_str().into());
        map.insert("length".to_string(), CharValue::Real(self.length));
        map
    }

    fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

impl fmt::Display for EthernetCable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alpha Type: {}, Beta Type: {}, Speed: {}, Length: {} ft",
            self.alpha_type, self.beta_type, self.speed, self.length
        )
    }
}
