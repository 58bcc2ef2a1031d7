//! Interactive wizard for entering part fields
//!
//! Prompts for every field a part kind declares, using a selection list for
//! closed choices and validated text input for everything else.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::core::part::{Characteristics, FieldSpec, FieldType, PartKind};

/// A field-driven wizard for creating parts
pub struct PartWizard {
    theme: ColorfulTheme,
}

impl Default for PartWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl PartWizard {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Collect every field of `kind`
    pub fn run(&self, kind: PartKind) -> Result<Characteristics> {
        println!();
        println!(
            "{} New {}",
            style("◆").cyan(),
            style(kind.as_str()).bold()
        );
        println!("{}", style("─".repeat(40)).dim());

        let mut values = Characteristics::new();
        for field in kind.fields() {
            let value = self.prompt_field(field)?;
            values.insert(field.name.to_string(), field.parse(&value)?);
        }
        Ok(values)
    }

    /// Ask how many units to add
    pub fn quantity(&self) -> Result<i64> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt("Quantity")
            .default("0".to_string())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                match input.trim().parse::<i64>() {
                    Ok(n) if n >= 0 => Ok(()),
                    _ => Err("enter a whole number of zero or more".to_string()),
                }
            })
            .interact_text()
            .into_diagnostic()?;

        value.trim().parse::<i64>().into_diagnostic()
    }

    fn prompt_field(&self, field: &FieldSpec) -> Result<String> {
        let prompt = format_prompt(field);

        match field.field_type {
            FieldType::Choice(options) => {
                let selection = Select::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .items(options)
                    .default(0)
                    .interact()
                    .into_diagnostic()?;

                Ok(options[selection].to_string())
            }
            _ => {
                let spec = *field;
                Input::with_theme(&self.theme)
                    .with_prompt(&prompt)
                    .validate_with(move |input: &String| -> std::result::Result<(), String> {
                        spec.parse(input).map(|_| ()).map_err(|e| e.to_string())
                    })
                    .interact_text()
                    .into_diagnostic()
            }
        }
    }
}

/// "cable_type" with hint "hdmi, vga" becomes "Cable type (hdmi, vga)"
fn format_prompt(field: &FieldSpec) -> String {
    let name = field.name.replace('_', " ");
    let mut chars = name.chars();
    let name: String = match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if field.hint.is_empty() {
        name
    } else {
        format!("{} ({})", name, field.hint)
    }
}
