//! Thermal zone state collected from `/sys/class/thermal`.
//!
//! See the kernel's `Documentation/driver-api/thermal/sysfs-api.rst` for the
//! meaning of each attribute.

use serde::{Deserialize, Serialize};

/// Passive trip values at or below this are not a valid enabled trip point.
pub const PASSIVE_TRIP_MIN_MILLICELSIUS: u64 = 1000;

/// State of one thermal zone at the time it was read.
///
/// Source: `/sys/class/thermal/thermal_zone<N>/`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct ZoneSnapshot {
    /// Zone number taken from the directory name (`thermal_zone<N>`).
    pub name: String,

    /// Sensor type, e.g. `acpitz` or `x86_pkg_temp`.
    /// Source: `type`
    #[serde(rename = "type")]
    pub zone_type: String,

    /// Temperature in millidegrees Celsius. May be negative.
    /// Source: `temp`
    pub temperature: i64,

    /// Active thermal governor, e.g. `step_wise`.
    /// Source: `policy`
    pub policy: String,

    /// Whether the zone is enabled.
    /// Source: `mode` (optional; `None` if missing, unreadable or unrecognized)
    pub mode: Option<bool>,

    /// Passive trip point in millidegrees Celsius, 0 when disabled.
    /// Source: `passive` (optional)
    pub passive_trip: Option<u64>,
}

/// Interpretation of the `passive` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassiveTrip {
    Disabled,
    Enabled { millicelsius: u64 },
    /// Non-zero but not above [`PASSIVE_TRIP_MIN_MILLICELSIUS`].
    Unrecognized(u64),
}

impl ZoneSnapshot {
    /// Temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> f64 {
        self.temperature as f64 / 1000.0
    }

    /// Returns `None` when the zone has no readable `passive` attribute.
    pub fn passive_trip_state(&self) -> Option<PassiveTrip> {
        self.passive_trip.map(|value| match value {
            0 => PassiveTrip::Disabled,
            v if v > PASSIVE_TRIP_MIN_MILLICELSIUS => PassiveTrip::Enabled { millicelsius: v },
            v => PassiveTrip::Unrecognized(v),
        })
    }
}
