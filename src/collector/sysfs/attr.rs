//! Readers for single-value sysfs attribute files.
//!
//! Sysfs attributes hold one value per file, usually followed by a newline.
//! Every failure is classified into a [`ReadFailure`] and tagged with the
//! file's path.

use std::path::Path;
use std::str::FromStr;

use crate::collector::sysfs::error::{AttributeError, ReadFailure};
use crate::collector::traits::FileSystem;

/// Reads an attribute file and returns its contents with surrounding
/// whitespace removed.
pub fn read_string<F: FileSystem>(fs: &F, path: &Path) -> Result<String, AttributeError> {
    fs.read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| AttributeError::from_io(path, e))
}

/// Reads an attribute file as a base-10 signed integer.
pub fn read_int<F: FileSystem>(fs: &F, path: &Path) -> Result<i64, AttributeError> {
    read_parsed(fs, path)
}

/// Reads an attribute file as a base-10 unsigned integer.
///
/// Negative values are rejected as parse failures.
pub fn read_uint<F: FileSystem>(fs: &F, path: &Path) -> Result<u64, AttributeError> {
    read_parsed(fs, path)
}

fn read_parsed<F, T>(fs: &F, path: &Path) -> Result<T, AttributeError>
where
    F: FileSystem,
    T: FromStr<Err = std::num::ParseIntError>,
{
    let value = read_string(fs, path)?;
    value.parse::<T>().map_err(|source| {
        AttributeError::new(path, ReadFailure::Parse { value, source })
    })
}

/// Maps the kernel's `enabled`/`disabled` tokens to a boolean.
///
/// Anything else, including an empty string, yields `None`.
pub fn parse_optional_bool(value: &str) -> Option<bool> {
    match value {
        "enabled" => Some(true),
        "disabled" => Some(false),
        _ => None,
    }
}
