//! Thermal zone collector for `/sys/class/thermal/thermal_zone<N>/`.
//!
//! Each zone directory holds one value per file:
//!
//! | file      | kind               | required |
//! |-----------|--------------------|----------|
//! | `type`    | text               | yes      |
//! | `policy`  | text               | yes      |
//! | `temp`    | millidegrees (i64) | yes      |
//! | `mode`    | enabled/disabled   | no       |
//! | `passive` | millidegrees (u64) | no       |
//!
//! A missing or unreadable required attribute fails the whole collection.
//! Optional attributes that are missing or not permitted are reported as
//! absent. Zones whose reads fail with `ENODATA` are skipped.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::collector::sysfs::attr::{parse_optional_bool, read_int, read_string, read_uint};
use crate::collector::sysfs::error::{AttributeError, ThermalError};
use crate::collector::traits::FileSystem;
use crate::models::ZoneSnapshot;

/// Directory name prefix of a thermal zone.
pub const ZONE_PREFIX: &str = "thermal_zone";

/// Location of the thermal class below the sysfs mount point.
const THERMAL_CLASS_DIR: &str = "class/thermal";

/// Returns the zone number of a `thermal_zone<N>` directory name.
///
/// `N` must be one or more ASCII digits; any other name yields `None`.
pub fn zone_number(dir_name: &str) -> Option<&str> {
    let number = dir_name.strip_prefix(ZONE_PREFIX)?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(number)
}

/// Collects thermal zone snapshots.
///
/// The collector keeps no state between calls: every call of
/// [`collect_zones`](Self::collect_zones) re-reads the tree.
pub struct ThermalCollector<F: FileSystem> {
    fs: F,
    class_root: PathBuf,
}

impl<F: FileSystem> ThermalCollector<F> {
    /// Creates a collector for the sysfs mounted at `sys_path`.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `sys_path` - Sysfs mount point (usually "/sys")
    pub fn new(fs: F, sys_path: impl AsRef<Path>) -> Self {
        Self::with_class_root(fs, sys_path.as_ref().join(THERMAL_CLASS_DIR))
    }

    /// Creates a collector that reads zones directly from `class_root`.
    pub fn with_class_root(fs: F, class_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            class_root: class_root.into(),
        }
    }

    /// Directory the zones are listed from.
    pub fn class_root(&self) -> &Path {
        &self.class_root
    }

    /// Collects all thermal zones, ordered by directory name.
    ///
    /// Returns either every non-skipped zone or an error, never a partial list.
    pub fn collect_zones(&self) -> Result<Vec<ZoneSnapshot>, ThermalError> {
        let zones = self.zone_dirs()?;
        let mut stats = Vec::with_capacity(zones.len());

        for (number, dir) in zones {
            match self.parse_zone(&dir) {
                Ok(mut zone) => {
                    zone.name = number;
                    stats.push(zone);
                }
                Err(e) if e.is_no_data() => {
                    debug!("skipping thermal zone {}: {}", dir.display(), e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(stats)
    }

    /// Reads one zone directory.
    ///
    /// The returned snapshot has an empty `name`; [`collect_zones`](Self::collect_zones)
    /// fills it in from the directory name.
    pub fn parse_zone(&self, zone: &Path) -> Result<ZoneSnapshot, ThermalError> {
        let zone_type = read_string(&self.fs, &zone.join("type"))
            .map_err(|e| required(zone, "type", e))?;
        let policy = read_string(&self.fs, &zone.join("policy"))
            .map_err(|e| required(zone, "policy", e))?;
        let temperature =
            read_int(&self.fs, &zone.join("temp")).map_err(|e| required(zone, "temp", e))?;

        let mode = match read_string(&self.fs, &zone.join("mode")) {
            Ok(value) => parse_optional_bool(&value),
            Err(e) if e.kind.is_absent() => None,
            Err(e) => return Err(optional(zone, "mode", e)),
        };

        let passive_trip = match read_uint(&self.fs, &zone.join("passive")) {
            Ok(value) => Some(value),
            Err(e) if e.kind.is_absent() => None,
            Err(e) => return Err(optional(zone, "passive", e)),
        };

        Ok(ZoneSnapshot {
            name: String::new(),
            zone_type,
            temperature,
            policy,
            mode,
            passive_trip,
        })
    }

    /// Lists `thermal_zone<N>` entries as `(N, path)` pairs sorted by name.
    fn zone_dirs(&self) -> Result<Vec<(String, PathBuf)>, ThermalError> {
        let entries =
            self.fs
                .read_dir(&self.class_root)
                .map_err(|source| ThermalError::Enumeration {
                    path: self.class_root.clone(),
                    source,
                })?;

        let mut zones: Vec<(String, PathBuf)> = entries
            .into_iter()
            .filter_map(|path| {
                let number = path.file_name()?.to_str().and_then(zone_number)?;
                Some((number.to_string(), path))
            })
            .collect();
        zones.sort_by(|a, b| a.0.cmp(&b.0));

        trace!(
            "found {} thermal zones in {}",
            zones.len(),
            self.class_root.display()
        );
        Ok(zones)
    }
}

/// Collects thermal zones from `class_root` in one call.
pub fn collect_zones<F: FileSystem>(
    fs: &F,
    class_root: impl Into<PathBuf>,
) -> Result<Vec<ZoneSnapshot>, ThermalError> {
    ThermalCollector::with_class_root(fs, class_root).collect_zones()
}

fn required(zone: &Path, attribute: &'static str, source: AttributeError) -> ThermalError {
    ThermalError::RequiredAttribute {
        zone: zone.to_path_buf(),
        attribute,
        source,
    }
}

fn optional(zone: &Path, attribute: &'static str, source: AttributeError) -> ThermalError {
    ThermalError::OptionalAttribute {
        zone: zone.to_path_buf(),
        attribute,
        source,
    }
}
