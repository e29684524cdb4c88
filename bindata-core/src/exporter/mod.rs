//! Source emitters for the resource table.
//!
//! - `cpp`: C++ header with a `std::map` table and `get`/`size` accessors
//! - `rust`: Rust module with a static slice and `get`/`size` functions
//! - `json`: manifest listing each entry's identifier, size and hash
//!
//! All emitters write into a `String` and are deterministic: the same table
//! and config always produce the same bytes.

pub mod cpp;
pub mod json;
pub mod rust;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{BindataError, Result};
use crate::table::ResourceTable;
use crate::types::{ExportConfig, Target};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Render the table for the given target.
pub fn export(table: &ResourceTable, config: &ExportConfig, target: Target) -> Result<String> {
    match target {
        Target::Cpp => cpp::export(table, config),
        Target::Rust => rust::export(table, config),
    }
}

/// Whether `name` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Append one byte as `0x` plus two lowercase hex digits.
pub fn write_hex_byte(out: &mut String, byte: u8) {
    let _ = write!(out, "0x{:02x}", byte);
}

/// Append `level` copies of `unit`.
pub fn indent(out: &mut String, level: usize, unit: &str) {
    for _ in 0..level {
        out.push_str(unit);
    }
}

/// Append `data` as hex literals, `per_line` bytes per line.
///
/// Every line is indented to `level`, bytes are separated by `, ` and each
/// line ends with a trailing comma.
pub fn byte_lines(out: &mut String, data: &[u8], per_line: usize, level: usize, unit: &str) {
    for chunk in data.chunks(per_line.max(1)) {
        indent(out, level, unit);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_hex_byte(out, *byte);
        }
        out.push_str(",\n");
    }
}

/// Outcome of writing a generated artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    /// The file was created or its contents replaced.
    Written,
    /// The file already held exactly these bytes and was not touched.
    Unchanged,
}

/// Write `contents` to `path`, creating parent directories.
///
/// Leaves the file alone when it already has identical contents so that
/// build systems watching its mtime don't rebuild for nothing.
pub fn write_if_changed(path: &Path, contents: &[u8]) -> Result<WriteStatus> {
    if let Ok(existing) = fs::read(path) {
        if existing == contents {
            return Ok(WriteStatus::Unchanged);
        }
    }

    let write_err = |source| BindataError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    Ok(WriteStatus::Written)
}
