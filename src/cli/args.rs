//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{completions::CompletionsArgs, shell::ShellArgs};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "partbin")]
#[command(author, version, about = "Inventory tracker for electronic parts")]
#[command(long_about = "Track resistors, solder, wire and cables by SKU: stock levels, \
duplicate detection by characteristics, search, and usage / out-of-stock rankings.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format (default: config `default_format`, else auto)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// The flag wins, then the configured default, then auto
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        config
            .default_format
            .as_deref()
            .and_then(|s| match OutputFormat::from_str(s, true) {
                Ok(format) => Some(format),
                Err(_) => {
                    tracing::warn!(value = %s, "unknown default_format in config, using auto");
                    None
                }
            })
            .unwrap_or_default()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an inventory session reading commands from stdin
    Shell(ShellArgs),

    /// List part kinds and their fields
    Kinds,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tables for lists and rankings, one line for single entries
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// Tab-separated values (for piping)
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn opts(format: Option<OutputFormat>) -> GlobalOpts {
        GlobalOpts {
            format,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_format() {
        let config = Config {
            default_format: Some("JSON".to_string()),
            ..Config::default()
        };
        assert_eq!(opts(None).resolve_format(&config), OutputFormat::Json);
        assert_eq!(
            opts(Some(OutputFormat::Tsv)).resolve_format(&config),
            OutputFormat::Tsv
        );
        assert_eq!(
            opts(None).resolve_format(&Config::default()),
            OutputFormat::Auto
        );

        let bad = Config {
            default_format: Some("xml".to_string()),
            ..Config::default()
        };
        assert_eq!(opts(None).resolve_format(&bad), OutputFormat::Auto);
    }
}
