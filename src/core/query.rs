//! Attribute search over the inventory

use indexmap::IndexMap;
use tracing::Level;

use crate::core::inventory::Inventory;
use crate::core::part::{CharValue, Part, PartKind};
use crate::entities::PartRecord;

/// Exact-match attribute filters, all of which must hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    criteria: IndexMap<String, CharValue>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`
    pub fn with(mut self, field: impl Into<String>, value: impl Into<CharValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CharValue>) {
        self.criteria.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharValue)> {
        self.criteria.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `part` has every filtered field with an equal value
    ///
    /// A field the part does not have never matches.
    pub fn matches(&self, part: &dyn Part) -> bool {
        if self.criteria.is_empty() {
            return true;
        }
        let characteristics = part.characteristics();
        self.criteria
            .iter()
            .all(|(field, wanted)| characteristics.get(field) == Some(wanted))
    }
}

impl Inventory {
    /// Parts of `kind` matching `filter`, in insertion order
    #[tracing::instrument(level = Level::DEBUG, skip(self, filter))]
    pub fn search(&self, kind: PartKind, filter: &SearchFilter) -> Vec<(&str, &PartRecord)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.part().kind() == kind && filter.matches(entry.part()))
            .map(|(sku, entry)| (sku.as_str(), entry.part()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CableType, DisplayCable, Resistor, Wire};

    fn stocked() -> Inventory {
        let mut inv = Inventory::new();
        inv.add_part("R1", Resistor::new(100, 5).unwrap().into(), 1).unwrap();
        inv.add_part("R2", Resistor::new(220, 5).unwrap().into(), 1).unwrap();
        inv.add_part("W1", Wire::new(100.0, 1.0).unwrap().into(), 1).unwrap();
        inv.add_part("R3", Resistor::new(100, 10).unwrap().into(), 1).unwrap();
        inv.add_part(
            "D1",
            DisplayCable::new(CableType::Hdmi, 6.0, "black").unwrap().into(),
            1,
        )
        .unwrap();
        inv
    }

    fn skus<'a>(hits: &[(&'a str, &PartRecord)]) -> Vec<&'a str> {
        hits.iter().map(|(sku, _)| *sku).collect()
    }

    #[test]
    fn test_search_by_resistance_ignores_tolerance() {
        let inv = stocked();
        let filter = SearchFilter::new().with("resistance", 100_i64);

        let hits = inv.search(PartKind::Resistor, &filter);
        assert_eq!(skus(&hits), vec!["R1", "R3"]);
    }

    #[test]
    fn test_search_without_filters_returns_kind() {
        let inv = stocked();
        let hits = inv.search(PartKind::Resistor, &SearchFilter::new());
        assert_eq!(skus(&hits), vec!["R1", "R2", "R3"]);

        let hits = inv.search(PartKind::EthernetCable, &SearchFilter::new());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_multiple_filters() {
        let inv = stocked();
        let filter = SearchFilter::new()
            .with("resistance", 100_i64)
            .with("tolerance", 10_i64);

        assert_eq!(skus(&inv.search(PartKind::Resistor, &filter)), vec!["R3"]);
    }

    #[test]
    fn test_search_unknown_field_never_matches() {
        let inv = stocked();
        let filter = SearchFilter::new().with("wattage", 1_i64);
        assert!(inv.search(PartKind::Resistor, &filter).is_empty());
    }

    #[test]
    fn test_search_values_are_typed() {
        let inv = stocked();
        // resistance is a whole number, so a real-valued filter is a different value
        let filter = SearchFilter::new().with("resistance", 100.0_f64);
        assert!(inv.search(PartKind::Resistor, &filter).is_empty());

        let filter = SearchFilter::new().with("color", "black");
        assert_eq!(skus(&inv.search(PartKind::DisplayCable, &filter)), vec!["D1"]);
    }
}
