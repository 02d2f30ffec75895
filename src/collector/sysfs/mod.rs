//! Collectors for the Linux `/sys` filesystem.
//!
//! This module provides attribute readers and collectors for reading
//! device class information from the sysfs virtual filesystem.

pub mod attr;
pub mod error;
pub mod thermal;

pub use error::{AttributeError, ReadFailure, ThermalError, ThermalErrorKind};
pub use thermal::{ThermalCollector, ZONE_PREFIX, collect_zones, zone_number};
