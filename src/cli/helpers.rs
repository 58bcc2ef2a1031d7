//! Shared helper functions for CLI commands
//!
//! Line splitting, `field=value` parsing and the human-readable part
//! formatter used by the shell and the tables.

use chrono::{DateTime, Local, Utc};

use crate::core::error::InventoryError;
use crate::core::part::{CharValue, Characteristics, Part, PartKind};
use crate::core::query::SearchFilter;
use crate::core::InventoryEntry;
use crate::entities::PartRecord;

/// Split a shell line into words, honouring single and double quotes
///
/// Returns `None` when a quote is left open.
pub fn split_line(line: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return None;
    }
    if in_word {
        words.push(current);
    }
    Some(words)
}

/// Split `field=value`
fn split_assignment(raw: &str) -> Result<(&str, &str), InventoryError> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => Err(InventoryError::InvalidCharacteristic {
            field: raw.to_string(),
            reason: "expected field=value".to_string(),
        }),
    }
}

/// Parse `field=value` pairs into typed part fields
///
/// Field names must belong to `kind`.
pub fn parse_fields(kind: PartKind, raw: &[String]) -> Result<Characteristics, InventoryError> {
    let mut fields = Characteristics::new();
    for item in raw {
        let (name, value) = split_assignment(item)?;
        let spec = kind
            .field(name)
            .ok_or_else(|| InventoryError::InvalidCharacteristic {
                field: name.to_string(),
                reason: format!("not a {} field", kind),
            })?;
        fields.insert(name.to_string(), spec.parse(value)?);
    }
    Ok(fields)
}

/// Parse `field=value` pairs into a search filter
///
/// Known fields are typed like their declaration. Unknown fields are kept as
/// text so they simply never match.
pub fn parse_filter(kind: PartKind, raw: &[String]) -> Result<SearchFilter, InventoryError> {
    let mut filter = SearchFilter::new();
    for item in raw {
        let (name, value) = split_assignment(item)?;
        let value = match kind.field(name) {
            Some(spec) => spec.parse(value)?,
            None => CharValue::Text(value.to_string()),
        };
        filter.insert(name, value);
    }
    Ok(filter)
}

/// Format a timestamp in local time
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Characteristics plus timestamp, one line
pub fn describe_part(part: &PartRecord) -> String {
    format!(
        "{}, Last Updated: {}",
        part,
        format_timestamp(part.last_updated())
    )
}

pub fn describe_entry(sku: &str, entry: &InventoryEntry) -> String {
    format!(
        "SKU: {}, Quantity: {}, Part: {}",
        sku,
        entry.quantity(),
        describe_part(entry.part())
    )
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
