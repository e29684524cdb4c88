//! bindata core - embed directory trees of binary files as generated source.
//!
//! A run is a straight pipeline:
//!
//! 1. **Scan**: walk one or more roots and derive a `/`-separated,
//!    root-relative identifier for every regular file
//! 2. **Load**: read each file fully; empty or unreadable files are dropped
//! 3. **Emit**: render the identifier → bytes table as a C++ header or a
//!    Rust module, optionally with a JSON manifest
//!
//! # Usage
//!
//! ```no_run
//! use bindata_core::{build_table, exporter, BuildOptions, ExportConfig, Target};
//!
//! let output = build_table(&BuildOptions {
//!     roots: vec!["assets".into()],
//!     ..Default::default()
//! })?;
//! let header = exporter::export(&output.table, &ExportConfig::new("Assets"), Target::Cpp)?;
//! # Ok::<(), bindata_core::BindataError>(())
//! ```

pub mod error;
pub mod exporter;
pub mod generate;
pub mod loader;
pub mod scanner;
pub mod table;
pub mod types;

pub use error::{BindataError, Result};
pub use generate::{build_table, BuildOptions, BuildOutput, BuildStats};
pub use scanner::ScanOptions;
pub use table::ResourceTable;
pub use types::{CollisionPolicy, ExportConfig, Target};

/// Get the version of bindata-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
