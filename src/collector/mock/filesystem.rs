//! In-memory mock filesystem for testing collectors without a real `/sys`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run on macOS and in CI environments without Linux.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// Error a mock path produces instead of its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockFailure {
    Kind(io::ErrorKind),
    Os(i32),
}

impl MockFailure {
    fn to_error(self, path: &Path) -> io::Error {
        match self {
            MockFailure::Kind(kind) => {
                io::Error::new(kind, format!("injected failure: {:?}", path))
            }
            MockFailure::Os(code) => io::Error::from_raw_os_error(code),
        }
    }
}

/// In-memory filesystem for testing.
///
/// Stores files and directories in memory, allowing tests to simulate
/// various `/sys` filesystem states without needing actual Linux access.
/// Paths can also be registered as failing, which is how permission
/// errors and `ENODATA` reads are simulated.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Set of directories (for read_dir support).
    directories: HashSet<PathBuf>,
    /// Paths whose reads fail with an injected error.
    failures: HashMap<PathBuf, MockFailure>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Makes every read of `path` fail with an error of the given kind.
    ///
    /// The path shows up in directory listings like a regular file.
    pub fn add_error(&mut self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.insert_failure(path.as_ref(), MockFailure::Kind(kind));
    }

    /// Makes every read of `path` fail with the given raw OS error code
    /// (for example `libc::ENODATA`).
    pub fn add_os_error(&mut self, path: impl AsRef<Path>, code: i32) {
        self.insert_failure(path.as_ref(), MockFailure::Os(code));
    }

    /// Adds a thermal zone directory `<class_root>/thermal_zone<index>`.
    ///
    /// # Arguments
    /// * `class_root` - Thermal class directory (usually `/sys/class/thermal`)
    /// * `index` - Zone number as it appears in the directory name
    /// * `zone_type` - Content of `type`
    /// * `policy` - Content of `policy`
    /// * `temp` - Content of `temp`
    ///
    /// Optional attributes (`mode`, `passive`) are added separately with
    /// [`MockFs::add_file`].
    pub fn add_thermal_zone(
        &mut self,
        class_root: impl AsRef<Path>,
        index: &str,
        zone_type: &str,
        policy: &str,
        temp: &str,
    ) -> PathBuf {
        let base = class_root.as_ref().join(format!("thermal_zone{}", index));
        self.add_dir(&base);
        self.add_file(base.join("type"), format!("{}\n", zone_type));
        self.add_file(base.join("policy"), format!("{}\n", policy));
        self.add_file(base.join("temp"), format!("{}\n", temp));
        base
    }

    /// Removes a file, so that reading it reports `NotFound`.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
        self.failures.remove(path.as_ref());
    }

    fn insert_failure(&mut self, path: &Path, failure: MockFailure) {
        self.add_parents(path);
        self.files.remove(path);
        self.failures.insert(path.to_path_buf(), failure);
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if let Some(failure) = self.failures.get(path) {
            return Err(failure.to_error(path));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.directories.contains(path)
            || self.failures.contains_key(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if let Some(failure) = self.failures.get(path) {
            return Err(failure.to_error(path));
        }
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let mut entries = HashSet::new();

        // Direct children only
        let candidates = self
            .files
            .keys()
            .chain(self.failures.keys())
            .chain(self.directories.iter());
        for child in candidates {
            if child != path && child.parent().is_some_and(|parent| parent == path) {
                entries.insert(child.clone());
            }
        }

        // HashSet order: callers must not rely on it
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "45000\n");

        assert!(fs.exists(Path::new("/sys/class/thermal/thermal_zone0/temp")));
        assert!(fs.exists(Path::new("/sys/class/thermal")));

        let content = fs
            .read_to_string(Path::new("/sys/class/thermal/thermal_zone0/temp"))
            .unwrap();
        assert_eq!(content, "45000\n");
    }

    #[test]
    fn test_mock_fs_read_dir() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/thermal/thermal_zone0/type", "x86_pkg_temp");
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "45000");
        fs.add_file("/sys/class/thermal/thermal_zone1/temp", "38000");
        fs.add_dir("/sys/class/thermal/cooling_device0");

        let entries = fs.read_dir(Path::new("/sys/class/thermal")).unwrap();
        assert_eq!(entries.len(), 3);

        let zone0 = fs
            .read_dir(Path::new("/sys/class/thermal/thermal_zone0"))
            .unwrap();
        assert_eq!(zone0.len(), 2);
    }

    #[test]
    fn test_mock_fs_add_thermal_zone() {
        let mut fs = MockFs::new();
        let base = fs.add_thermal_zone("/sys/class/thermal", "3", "acpitz", "step_wise", "27800");

        assert_eq!(base, PathBuf::from("/sys/class/thermal/thermal_zone3"));
        assert_eq!(
            fs.read_to_string(&base.join("policy")).unwrap(),
            "step_wise\n"
        );
        assert!(!fs.exists(&base.join("mode")));
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();
        let result = fs.read_to_string(Path::new("/nonexistent"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_mock_fs_injected_errors() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/thermal/thermal_zone0/mode", "enabled");
        fs.add_error(
            "/sys/class/thermal/thermal_zone0/mode",
            io::ErrorKind::PermissionDenied,
        );
        fs.add_os_error("/sys/class/thermal/thermal_zone0/temp", libc::ENODATA);

        let mode = fs
            .read_to_string(Path::new("/sys/class/thermal/thermal_zone0/mode"))
            .unwrap_err();
        assert_eq!(mode.kind(), io::ErrorKind::PermissionDenied);

        let temp = fs
            .read_to_string(Path::new("/sys/class/thermal/thermal_zone0/temp"))
            .unwrap_err();
        assert_eq!(temp.raw_os_error(), Some(libc::ENODATA));

        // Failing paths are still listed
        let entries = fs
            .read_dir(Path::new("/sys/class/thermal/thermal_zone0"))
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_mock_fs_unreadable_directory() {
        let mut fs = MockFs::new();
        fs.add_error("/sys/class/thermal", io::ErrorKind::PermissionDenied);
        let err = fs.read_dir(Path::new("/sys/class/thermal")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
