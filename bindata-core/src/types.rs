//! Core data types shared by the scanner, loader, table and exporters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::BindataError;

/// A regular file discovered under one of the scan roots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Root-relative, `/`-separated lookup key.
    pub identifier: String,

    /// Real filesystem location, used only while generating.
    pub source: PathBuf,

    /// The scan root this file was found under.
    pub root: PathBuf,
}

/// A loaded, non-empty resource blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub identifier: String,
    pub source: PathBuf,
    pub data: Vec<u8>,
}

impl Resource {
    /// Number of bytes in the blob.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for resources produced by the loader.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What to do when two files map to the same identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The later-discovered file replaces the earlier one.
    #[default]
    LastWins,
    /// The earlier-discovered file is kept.
    FirstWins,
    /// Any collision aborts generation.
    Error,
}

impl FromStr for CollisionPolicy {
    type Err = BindataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-wins" | "last" => Ok(CollisionPolicy::LastWins),
            "first-wins" | "first" => Ok(CollisionPolicy::FirstWins),
            "error" | "fail" => Ok(CollisionPolicy::Error),
            _ => Err(BindataError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::LastWins => write!(f, "last-wins"),
            CollisionPolicy::FirstWins => write!(f, "first-wins"),
            CollisionPolicy::Error => write!(f, "error"),
        }
    }
}

/// Language of the generated artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// C++ header with a `std::map` table and `get`/`size` accessors.
    #[default]
    Cpp,
    /// Rust module with a static slice and `get`/`size` functions.
    Rust,
}

impl Target {
    /// Guess the target from an output file name: `.rs` means Rust, anything else C++.
    pub fn from_output_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rs") => Target::Rust,
            _ => Target::Cpp,
        }
    }
}

impl FromStr for Target {
    type Err = BindataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Target::Cpp),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(BindataError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Cpp => write!(f, "cpp"),
            Target::Rust => write!(f, "rust"),
        }
    }
}

/// Default number of bytes rendered per line.
pub const DEFAULT_BYTES_PER_LINE: usize = 16;

/// Default name of the table variable inside the generated scope.
pub const DEFAULT_TABLE_NAME: &str = "data";

/// Configuration for source emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Enclosing namespace (C++) or module (Rust).
    pub namespace: String,

    /// Name of the table variable.
    pub table_name: String,

    /// Bytes per line before wrapping. Zero is treated as one.
    pub bytes_per_line: usize,

    /// Emit the `size` accessor alongside `get`.
    pub size_accessor: bool,
}

impl ExportConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            namespace: "BinaryData".to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            size_accessor: true,
        }
    }
}
