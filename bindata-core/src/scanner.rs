//! Directory walker built on the `ignore` crate.
//!
//! Enumerates regular files under one or more scan roots and derives each
//! file's identifier: the path relative to its root, joined with `/`.
//!
//! # Ordering
//!
//! Roots are walked in the order given. Within a root, entries are sorted by
//! file name at every directory level, so the same tree always yields the same
//! record sequence.
//!
//! # Filtering
//!
//! - Symlinks are never followed and never reported as files
//! - Exclude globs use gitignore syntax (`*.psd`, `drafts/`)
//! - `.gitignore` handling is opt-in; by default every file is embedded

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{BindataError, Result};
use crate::types::FileRecord;

/// Options controlling which files the walker reports.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Additional gitignore-style globs to exclude.
    pub exclude: Vec<String>,

    /// Honor `.gitignore` and `.ignore` files found in the tree.
    pub respect_gitignore: bool,
}

/// Result of scanning a set of roots.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanResult {
    /// Discovered files, in discovery order.
    pub files: Vec<FileRecord>,

    /// Roots that did not exist or were not directories.
    pub missing_roots: Vec<PathBuf>,

    /// Number of entries that could not be read during traversal.
    pub error_count: usize,
}

impl ScanResult {
    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Derive the identifier for `path` relative to `root`.
///
/// Returns `None` when `path` is not under `root`. `.` components in either
/// path are ignored, so `assets`, `./assets` and `assets/` are equivalent.
pub fn identifier_for(root: &Path, path: &Path) -> Option<String> {
    let root: PathBuf = normal_components(root).collect();
    let path: PathBuf = normal_components(path).collect();
    let rel = path.strip_prefix(&root).ok()?;

    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn normal_components(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components().filter(|c| !matches!(c, Component::CurDir))
}

/// Scan every root, collecting regular files in discovery order.
///
/// A root that is missing or not a directory is reported as a warning and
/// skipped; it never fails the scan. Only an invalid exclude glob is an error.
pub fn scan_roots<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for root in roots {
        let root = root.as_ref();

        if !root.is_dir() {
            warn!("No such directory {}", root.display());
            result.missing_roots.push(root.to_path_buf());
            continue;
        }

        scan_root(root, options, &mut result)?;
    }

    Ok(result)
}

fn scan_root(root: &Path, options: &ScanOptions, result: &mut ScanResult) -> Result<()> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false) // Hidden files are resources too
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    if options.respect_gitignore {
        builder
            .git_ignore(true)
            .git_exclude(true)
            .ignore(true)
            .parents(true)
            .require_git(false);
    }

    if !options.exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for pattern in &options.exclude {
            // The ! prefix turns the override glob into an ignore rule
            overrides
                .add(&format!("!{}", pattern))
                .map_err(|e| BindataError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }
        let overrides = overrides.build().map_err(|e| BindataError::InvalidPattern {
            pattern: options.exclude.join(", "),
            message: e.to_string(),
        })?;
        builder.overrides(overrides);
    }

    let before = result.files.len();

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry under {}: {}", root.display(), e);
                result.error_count += 1;
                continue;
            }
        };

        // Symlinks report their own type here since links are not followed
        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.into_path();
        match identifier_for(root, &path) {
            Some(identifier) => result.files.push(FileRecord {
                identifier,
                source: path,
                root: root.to_path_buf(),
            }),
            None => {
                debug!("Skipping {} outside of {}", path.display(), root.display());
            }
        }
    }

    debug!(
        "Scanned {}: {} files",
        root.display(),
        result.files.len() - before
    );
    Ok(())
}
