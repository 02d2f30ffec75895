//! Error types for thermal zone collection.

use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Why a single attribute file could not be turned into a value.
///
/// This is a closed set: raw platform error codes are mapped here once,
/// and everything downstream dispatches on the category.
#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    /// The attribute file does not exist.
    #[error("file does not exist")]
    NotFound,

    /// The current process may not read the attribute file.
    #[error("permission denied")]
    PermissionDenied,

    /// The kernel reported that the sensor has no data right now (`ENODATA`).
    #[error("no data available")]
    NoData,

    /// Any other I/O failure.
    #[error("{0}")]
    Io(#[source] io::Error),

    /// The file was read but its contents are not a valid integer.
    #[error("invalid integer {value:?}: {source}")]
    Parse {
        value: String,
        source: ParseIntError,
    },
}

impl ReadFailure {
    /// Classifies an I/O error returned by a [`FileSystem`](crate::collector::FileSystem).
    pub fn from_io(err: io::Error) -> Self {
        if err.raw_os_error() == Some(libc::ENODATA) {
            return ReadFailure::NoData;
        }
        match err.kind() {
            io::ErrorKind::NotFound => ReadFailure::NotFound,
            io::ErrorKind::PermissionDenied => ReadFailure::PermissionDenied,
            _ => ReadFailure::Io(err),
        }
    }

    /// Returns `true` for the failures an optional attribute tolerates.
    pub fn is_absent(&self) -> bool {
        matches!(self, ReadFailure::NotFound | ReadFailure::PermissionDenied)
    }
}

/// A failed read of one attribute file, with the file's path.
#[derive(Debug, thiserror::Error)]
#[error("{}: {kind}", .path.display())]
pub struct AttributeError {
    pub path: PathBuf,
    pub kind: ReadFailure,
}

impl AttributeError {
    pub fn new(path: impl Into<PathBuf>, kind: ReadFailure) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        Self::new(path, ReadFailure::from_io(err))
    }
}

/// Coarse classification of a [`ThermalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalErrorKind {
    /// The zone directory listing could not be produced.
    Enumeration,
    /// `type`, `policy` or `temp` does not exist.
    RequiredAttributeMissing,
    /// `type`, `policy` or `temp` exists but could not be read or parsed.
    RequiredAttributeUnreadable,
    /// `mode` or `passive` failed with something other than not-found or
    /// permission denied.
    OptionalAttributeOther,
    /// The zone cannot report right now. Collection skips such zones.
    NoDataAvailable,
}

/// Errors returned by the thermal collector.
#[derive(Debug, thiserror::Error)]
pub enum ThermalError {
    /// Listing the thermal class directory failed.
    #[error("failed to list thermal zones in {}: {source}", .path.display())]
    Enumeration { path: PathBuf, source: io::Error },

    /// A required attribute (`type`, `policy`, `temp`) could not be read.
    #[error("thermal zone {}: required attribute `{attribute}`: {source}", .zone.display())]
    RequiredAttribute {
        zone: PathBuf,
        attribute: &'static str,
        source: AttributeError,
    },

    /// An optional attribute (`mode`, `passive`) failed in an unexpected way.
    #[error("thermal zone {}: optional attribute `{attribute}`: {source}", .zone.display())]
    OptionalAttribute {
        zone: PathBuf,
        attribute: &'static str,
        source: AttributeError,
    },
}

impl ThermalError {
    /// Returns the attribute read failure behind this error, if any.
    pub fn read_failure(&self) -> Option<&ReadFailure> {
        match self {
            ThermalError::Enumeration { .. } => None,
            ThermalError::RequiredAttribute { source, .. }
            | ThermalError::OptionalAttribute { source, .. } => Some(&source.kind),
        }
    }

    /// Returns `true` if the zone reported "no data available".
    pub fn is_no_data(&self) -> bool {
        matches!(self.read_failure(), Some(ReadFailure::NoData))
    }

    pub fn kind(&self) -> ThermalErrorKind {
        if self.is_no_data() {
            return ThermalErrorKind::NoDataAvailable;
        }
        match self {
            ThermalError::Enumeration { .. } => ThermalErrorKind::Enumeration,
            ThermalError::RequiredAttribute { source, .. } => match source.kind {
                ReadFailure::NotFound => ThermalErrorKind::RequiredAttributeMissing,
                _ => ThermalErrorKind::RequiredAttributeUnreadable,
            },
            ThermalError::OptionalAttribute { .. } => ThermalErrorKind::OptionalAttributeOther,
        }
    }
}
