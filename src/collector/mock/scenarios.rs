//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/sys/class/thermal` states
//! for testing various zone layouts.

use super::filesystem::MockFs;

/// Thermal class directory used by all scenarios.
pub const THERMAL_CLASS_ROOT: &str = "/sys/class/thermal";

impl MockFs {
    /// Creates a typical laptop thermal tree.
    ///
    /// Includes:
    /// - `thermal_zone0`: ACPI zone with `mode` and a passive trip point
    /// - `thermal_zone1`: package sensor without optional attributes
    /// - `thermal_zone2`: wifi sensor with `mode` disabled and passive trip off
    /// - `thermal_zone10`: sub-zero sensor (exercises lexicographic order)
    /// - `cooling_device0`: non-zone entry that must be ignored
    pub fn typical_laptop() -> Self {
        let mut fs = Self::new();

        let zone0 = fs.add_thermal_zone(THERMAL_CLASS_ROOT, "0", "acpitz", "step_wise", "45000");
        fs.add_file(zone0.join("mode"), "enabled\n");
        fs.add_file(zone0.join("passive"), "95000\n");

        fs.add_thermal_zone(THERMAL_CLASS_ROOT, "1", "x86_pkg_temp", "step_wise", "52000");

        let zone2 = fs.add_thermal_zone(THERMAL_CLASS_ROOT, "2", "iwlwifi_1", "user_space", "38000");
        fs.add_file(zone2.join("mode"), "disabled\n");
        fs.add_file(zone2.join("passive"), "0\n");

        fs.add_thermal_zone(THERMAL_CLASS_ROOT, "10", "ambient", "fair_share", "-5000");

        let cooling = format!("{}/cooling_device0", THERMAL_CLASS_ROOT);
        fs.add_file(format!("{}/type", cooling), "Processor\n");
        fs.add_file(format!("{}/cur_state", cooling), "0\n");

        fs
    }

    /// Creates a tree with one zone whose `temp` read fails with `ENODATA`.
    ///
    /// Some firmware-backed zones (e.g. unpowered wireless adapters) behave
    /// this way until the device comes up.
    pub fn zone_without_data() -> Self {
        let mut fs = Self::new();
        let zone1 = fs.add_thermal_zone(THERMAL_CLASS_ROOT, "1", "iwlwifi_1", "step_wise", "0");
        fs.add_os_error(zone1.join("temp"), libc::ENODATA);
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_typical_laptop_layout() {
        let fs = MockFs::typical_laptop();
        let entries = fs.read_dir(Path::new(THERMAL_CLASS_ROOT)).unwrap();
        assert_eq!(entries.len(), 5);
        assert!(fs.exists(Path::new("/sys/class/thermal/thermal_zone0/passive")));
        assert!(!fs.exists(Path::new("/sys/class/thermal/thermal_zone1/mode")));
    }

    #[test]
    fn test_zone_without_data_layout() {
        let fs = MockFs::zone_without_data();
        let err = fs
            .read_to_string(Path::new("/sys/class/thermal/thermal_zone1/temp"))
            .unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENODATA));
    }
}
