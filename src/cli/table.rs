//! Table formatting for inventory listings and rankings

use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_timestamp, truncate_str};
use crate::core::part::Part;
use crate::core::tracker::Ranking;
use crate::core::InventoryEntry;

const DETAILS_WIDTH: usize = 60;

/// Render entries as a markdown table
pub fn entries_table<'a>(rows: impl IntoIterator<Item = (&'a str, &'a InventoryEntry)>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["SKU", "KIND", "QTY", "DETAILS", "UPDATED"]);

    for (sku, entry) in rows {
        let part = entry.part();
        builder.push_record([
            sku.to_string(),
            part.kind().to_string(),
            entry.quantity().to_string(),
            truncate_str(&part.to_string(), DETAILS_WIDTH),
            format_timestamp(part.last_updated()),
        ]);
    }

    builder.build().with(Style::markdown()).to_string()
}

/// Render entries as tab-separated lines for piping
pub fn entries_tsv<'a>(rows: impl IntoIterator<Item = (&'a str, &'a InventoryEntry)>) -> String {
    let mut out = String::new();
    for (sku, entry) in rows {
        let part = entry.part();
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            sku,
            part.kind(),
            entry.quantity(),
            part
        ));
    }
    out
}

/// Render a ranking with its position, SKU and count
pub fn ranking_table(count_label: &str, ranking: &Ranking) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "SKU", count_label]);

    for (i, (sku, count)) in ranking.iter().enumerate() {
        builder.push_record([(i + 1).to_string(), sku.clone(), count.to_string()]);
    }

    builder.build().with(Style::markdown()).to_string()
}

pub fn ranking_tsv(ranking: &Ranking) -> String {
    ranking
        .iter()
        .map(|(sku, count)| format!("{}\t{}\n", sku, count))
        .collect()
}
