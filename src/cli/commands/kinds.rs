//! `partbin kinds` command - List part kinds and their fields

use console::style;
use miette::Result;

use crate::core::part::{FieldType, PartKind};

/// Run the kinds command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

pub(crate) fn render() -> String {
    let mut out = String::new();
    for kind in PartKind::all() {
        out.push_str(&format!("{}\n", style(kind.as_str()).bold()));
        for field in kind.fields() {
            let type_name = match field.field_type {
                FieldType::Integer => "integer",
                FieldType::Real => "number",
                FieldType::Text => "text",
                FieldType::Choice(_) => "choice",
            };
            out.push_str(&format!(
                "  {:<12} {:<8} {}\n",
                field.name, type_name, field.hint
            ));
        }
    }
    out
}
