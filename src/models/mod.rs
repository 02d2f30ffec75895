//! Data models produced by the collectors.

mod thermal;

pub use thermal::{PASSIVE_TRIP_MIN_MILLICELSIUS, PassiveTrip, ZoneSnapshot};
