//! partbin: inventory tracking for electronic parts
//!
//! An in-memory catalog of resistors, solder, wire and cables keyed by SKU,
//! with duplicate detection by characteristics, per-kind search and
//! usage / out-of-stock rankings.

pub mod cli;
pub mod core;
pub mod entities;
