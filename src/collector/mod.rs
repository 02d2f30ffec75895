//! Thermal metrics collector for Linux.
//!
//! This module provides infrastructure for collecting thermal zone metrics
//! from the Linux `/sys` filesystem, with support for mocking for testing on macOS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ThermalCollector                        │
//! │  - lists /sys/class/thermal/thermal_zone<N>                 │
//! │  - parses type, policy, temp, mode, passive                 │
//! │  - skips ENODATA zones, aborts on anything else             │
//! │                            │                                │
//! │                     ┌──────▼──────┐                         │
//! │                     │    attr     │ (read_string/int/uint)  │
//! │                     └──────┬──────┘                         │
//! │                     ┌──────▼──────┐                         │
//! │                     │  FileSystem │ (trait)                 │
//! │                     └──────┬──────┘                         │
//! └────────────────────────────┼────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              │               │               │
//!       ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!       │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!       │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//!       └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```no_run
//! use rthermal::collector::{RealFs, ThermalCollector};
//!
//! let collector = ThermalCollector::new(RealFs::new(), "/sys");
//! for zone in collector.collect_zones().unwrap() {
//!     println!("zone {}: {} m°C", zone.name, zone.temperature);
//! }
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use rthermal::collector::{MockFs, ThermalCollector};
//!
//! let collector = ThermalCollector::new(MockFs::typical_laptop(), "/sys");
//! let zones = collector.collect_zones().unwrap();
//! assert_eq!(zones[0].name, "0");
//! ```

pub mod mock;
pub mod sysfs;
pub mod traits;

pub use mock::MockFs;
pub use sysfs::{
    AttributeError, ReadFailure, ThermalCollector, ThermalError, ThermalErrorKind, collect_zones,
};
pub use traits::{FileSystem, RealFs};
