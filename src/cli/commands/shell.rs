//! `partbin shell` command - Interactive inventory session
//!
//! Reads one command per line from stdin and applies it to an in-memory
//! inventory that lives for the whole session. Errors are reported and the
//! session continues unless `--strict` is given.

use clap::{Parser, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use crate::cli::commands::kinds;
use crate::cli::helpers::{describe_entry, parse_fields, parse_filter, split_line};
use crate::cli::table::{entries_table, entries_tsv, ranking_table, ranking_tsv};
use crate::cli::wizard::PartWizard;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::part::PartKind;
use crate::core::tracker::Ranking;
use crate::core::{AddOutcome, Config, CounterRetention, Inventory, InventoryEntry};
use crate::entities::PartRecord;

#[derive(clap::Args, Debug)]
pub struct ShellArgs {
    /// Stop at the first failing command and exit with an error
    #[arg(long)]
    pub strict: bool,

    /// Keep usage counters of deleted SKUs (overrides config)
    #[arg(long)]
    pub keep_counters: bool,

    /// Rows shown by top-used / top-out when no count is given (overrides config)
    #[arg(long)]
    pub top_n: Option<usize>,
}

/// One line of shell input
#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true, disable_version_flag = true)]
#[command(help_template = "{subcommands}")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Add a part: add <kind> <sku> [field=value...] [--qty N]
    Add {
        /// Part kind (resistor, solder, wire, display-cable, ethernet-cable)
        kind: String,
        /// SKU for the new entry
        sku: String,
        /// Part fields as field=value (prompted for when omitted on a terminal)
        fields: Vec<String>,
        /// Quantity on hand, or quantity to add when the part already exists
        #[arg(long, short = 'q', allow_negative_numbers = true)]
        qty: Option<i64>,
    },

    /// Add stock to an existing SKU
    #[command(alias = "restock")]
    Stock {
        sku: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Print the quantity on hand for a SKU
    Qty { sku: String },

    /// Show one entry
    Show { sku: String },

    /// List the whole inventory
    #[command(alias = "ls")]
    List,

    /// Search parts of a kind: search <kind> [field=value...]
    Search { kind: String, filters: Vec<String> },

    /// Delete a SKU
    #[command(alias = "rm")]
    Delete { sku: String },

    /// Record one use of a SKU
    Use { sku: String },

    /// Record that a SKU ran out of stock
    Out { sku: String },

    /// Most used parts
    TopUsed { n: Option<usize> },

    /// Parts that ran out of stock most often
    TopOut { n: Option<usize> },

    /// List part kinds and their fields
    Kinds,

    /// Leave the session
    #[command(alias = "quit")]
    Exit,
}

/// Run the shell command
pub fn run(args: ShellArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut session = Session::new(&args, global, &config);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive && !global.quiet {
        eprintln!(
            "{} partbin shell - type {} for commands, {} to leave",
            style("◆").cyan(),
            style("help").bold(),
            style("exit").bold()
        );
    }

    let mut line = String::new();
    loop {
        if interactive {
            eprint!("{} ", style("partbin>").cyan());
            io::stderr().flush().into_diagnostic()?;
        }

        line.clear();
        if stdin.read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }

        match session.execute(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(report) if args.strict => return Err(report),
            Err(report) => eprintln!("{:?}", report),
        }
    }

    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

struct Session {
    inventory: Inventory,
    format: OutputFormat,
    quiet: bool,
    top_n: usize,
    interactive: bool,
}

impl Session {
    fn new(args: &ShellArgs, global: &GlobalOpts, config: &Config) -> Self {
        let retention = if args.keep_counters {
            CounterRetention::Keep
        } else {
            config.counter_retention()
        };

        Self {
            inventory: Inventory::with_retention(retention),
            format: global.resolve_format(config),
            quiet: global.quiet,
            top_n: args.top_n.unwrap_or_else(|| config.top_n()),
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    /// Run one line of input
    fn execute(&mut self, line: &str) -> Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_line(trimmed).ok_or_else(|| miette::miette!("Unterminated quote"))?;
        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    print!("{}", e.render());
                    return Ok(Flow::Continue);
                }
                return Err(miette::miette!("{}", e.render().to_string().trim_end()));
            }
        };

        self.dispatch(parsed.command)
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Add {
                kind,
                sku,
                fields,
                qty,
            } => self.add(&kind, &sku, &fields, qty)?,
            ShellCommand::Stock { sku, quantity } => {
                let total = self.inventory.add_inventory(&sku, quantity)?;
                self.status(format!(
                    "Added {} to {} (now {})",
                    quantity,
                    style(&sku).cyan(),
                    total
                ));
            }
            ShellCommand::Qty { sku } => {
                println!("{}", self.inventory.get_quantity(&sku)?);
            }
            ShellCommand::Show { sku } => {
                let entry = self.inventory.entry(&sku)?;
                match self.format {
                    OutputFormat::Json => print_json(&Keyed { sku: &sku, entry })?,
                    OutputFormat::Yaml => print_yaml(&Keyed { sku: &sku, entry })?,
                    _ => println!("{}", describe_entry(&sku, entry)),
                }
            }
            ShellCommand::List => {
                if self.inventory.is_empty() {
                    println!("Inventory is empty");
                } else {
                    self.print_entries(self.inventory.iter().collect())?;
                }
            }
            ShellCommand::Search { kind, filters } => {
                let kind: PartKind = kind.parse()?;
                let filter = parse_filter(kind, &filters)?;
                let hits = self.inventory.search(kind, &filter);

                if hits.is_empty() {
                    println!("No matching parts found");
                } else {
                    let rows = hits
                        .iter()
                        .map(|&(sku, _)| self.inventory.entry(sku).map(|entry| (sku, entry)))
                        .collect::<std::result::Result<Vec<_>, _>>()?;
                    self.print_entries(rows)?;
                }
            }
            ShellCommand::Delete { sku } => {
                self.inventory.delete_part(&sku)?;
                self.status(format!("Deleted {}", style(&sku).cyan()));
            }
            ShellCommand::Use { sku } => {
                let count = self.inventory.track_usage(&sku)?;
                self.status(format!("Usage of {} tracked ({})", style(&sku).cyan(), count));
            }
            ShellCommand::Out { sku } => {
                let count = self.inventory.track_out_of_stock(&sku)?;
                self.status(format!(
                    "Out of stock for {} tracked ({})",
                    style(&sku).cyan(),
                    count
                ));
            }
            ShellCommand::TopUsed { n } => {
                let ranking = self.inventory.most_used(n.unwrap_or(self.top_n));
                self.print_ranking("Most Used Parts", "Usage Count", &ranking)?;
            }
            ShellCommand::TopOut { n } => {
                let ranking = self.inventory.most_out_of_stock(n.unwrap_or(self.top_n));
                self.print_ranking("Most Out of Stock Parts", "Out of Stock Count", &ranking)?;
            }
            ShellCommand::Kinds => print!("{}", kinds::render()),
            ShellCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn add(&mut self, kind: &str, sku: &str, fields: &[String], qty: Option<i64>) -> Result<()> {
        let kind: PartKind = kind.parse()?;

        let (fields, qty) = if fields.is_empty() && self.interactive {
            let wizard = PartWizard::new();
            let fields = wizard.run(kind)?;
            let qty = match qty {
                Some(qty) => qty,
                None => wizard.quantity()?,
            };
            (fields, qty)
        } else {
            (parse_fields(kind, fields)?, qty.unwrap_or(0))
        };

        let part = PartRecord::from_fields(kind, &fields)?;
        match self.inventory.add_part(sku, part, qty)? {
            AddOutcome::Created { sku, quantity } => self.status(format!(
                "Added {} ({}) with quantity {}",
                style(&sku).cyan(),
                kind,
                quantity
            )),
            AddOutcome::Merged {
                sku,
                added,
                quantity,
            } => self.status(format!(
                "Same part already stocked as {}: added {} (now {})",
                style(&sku).cyan(),
                added,
                quantity
            )),
        }
        Ok(())
    }

    fn print_entries(&self, rows: Vec<(&str, &InventoryEntry)>) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&keyed_rows(&rows)),
            OutputFormat::Yaml => print_yaml(&keyed_rows(&rows)),
            OutputFormat::Tsv => {
                print!("{}", entries_tsv(rows));
                Ok(())
            }
            OutputFormat::Auto => {
                println!("{}", entries_table(rows));
                Ok(())
            }
        }
    }

    fn print_ranking(&self, title: &str, count_label: &str, ranking: &Ranking) -> Result<()> {
        let rows: Vec<RankRow> = ranking
            .iter()
            .map(|(sku, count)| RankRow { sku, count: *count })
            .collect();

        match self.format {
            OutputFormat::Json => print_json(&rows),
            OutputFormat::Yaml => print_yaml(&rows),
            OutputFormat::Tsv => {
                print!("{}", ranking_tsv(ranking));
                Ok(())
            }
            OutputFormat::Auto => {
                if ranking.is_empty() {
                    println!("No parts tracked yet");
                } else {
                    println!("{}", style(title).bold());
                    println!("{}", ranking_table(count_label, ranking));
                }
                Ok(())
            }
        }
    }

    /// A success line, suppressed by --quiet
    fn status(&self, message: String) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }
}

#[derive(Serialize)]
struct Keyed<'a> {
    sku: &'a str,
    #[serde(flatten)]
    entry: &'a InventoryEntry,
}

#[derive(Serialize)]
struct RankRow<'a> {
    sku: &'a str,
    count: u64,
}

fn keyed_rows<'a>(rows: &[(&'a str, &'a InventoryEntry)]) -> Vec<Keyed<'a>> {
    rows.iter()
        .map(|&(sku, entry)| Keyed { sku, entry })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).into_diagnostic()?
    );
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> Result<()> {
    print!("{}", serde_yml::to_string(value).into_diagnostic()?);
    Ok(())
}
