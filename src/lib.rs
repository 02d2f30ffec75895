//! rthermal - Linux thermal zone metrics library.
//!
//! Provides:
//! - `collector`: thermal zone discovery and parsing from `/sys/class/thermal`
//! - `models`: snapshot types produced by the collector
//! - `fmt`: formatting helpers for the `rthermal` command-line tool

pub mod collector;
pub mod fmt;
pub mod models;
