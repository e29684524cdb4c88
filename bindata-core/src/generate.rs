//! Walk → load → table pipeline.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::error::Result;
use crate::loader::{self, SkippedFile};
use crate::scanner::{self, ScanOptions};
use crate::table::{Collision, ResourceTable};
use crate::types::CollisionPolicy;

/// Everything needed to build a table from disk.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    pub roots: Vec<PathBuf>,
    pub scan: ScanOptions,
    pub on_collision: CollisionPolicy,
}

/// Statistics about a build, suitable for reporting.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildStats {
    pub files_found: usize,
    pub entries: usize,
    pub total_bytes: usize,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
    pub missing_roots: Vec<PathBuf>,
    pub walk_errors: usize,
    pub duration_ms: f64,
}

/// Result of a build.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub table: ResourceTable,
    pub stats: BuildStats,
}

/// Scan the roots, load every file and assemble the table.
pub fn build_table(options: &BuildOptions) -> Result<BuildOutput> {
    let start = Instant::now();

    let scan = scanner::scan_roots(&options.roots, &options.scan)?;
    info!(
        "Found {} files under {} root(s)",
        scan.len(),
        options.roots.len()
    );

    let loaded = loader::load_all(&scan.files);
    let (table, collisions) = ResourceTable::from_resources(loaded.resources, options.on_collision)?;

    let stats = BuildStats {
        files_found: scan.files.len(),
        entries: table.len(),
        total_bytes: table.total_bytes(),
        skipped: loaded.skipped,
        collisions,
        missing_roots: scan.missing_roots,
        walk_errors: scan.error_count,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    info!(
        "Table has {} entries ({} bytes)",
        stats.entries, stats.total_bytes
    );

    Ok(BuildOutput { table, stats })
}
