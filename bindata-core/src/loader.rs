//! Resource loader.
//!
//! Reads each discovered file fully into memory. Empty files are filtered out,
//! and so are unreadable ones; both are reported as skipped, never as errors.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::types::{FileRecord, Resource};

/// Why a discovered file did not make it into the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipReason {
    Empty,
    Unreadable,
}

/// A file dropped by the loader.
#[derive(Clone, Debug, Serialize)]
pub struct SkippedFile {
    pub identifier: String,
    pub reason: SkipReason,
}

/// Output of loading a batch of records.
#[derive(Clone, Debug, Default)]
pub struct LoadResult {
    /// Non-empty resources, in record order.
    pub resources: Vec<Resource>,

    /// Records that produced no bytes.
    pub skipped: Vec<SkippedFile>,
}

/// Read a file as raw bytes, `None` when it can't be read.
fn read_bytes(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Load every record, keeping only those with content.
pub fn load_all(records: &[FileRecord]) -> LoadResult {
    let mut result = LoadResult::default();

    for record in records {
        let reason = match read_bytes(&record.source) {
            Some(data) if !data.is_empty() => {
                result.resources.push(Resource {
                    identifier: record.identifier.clone(),
                    source: record.source.clone(),
                    data,
                });
                continue;
            }
            Some(_) => SkipReason::Empty,
            None => SkipReason::Unreadable,
        };

        debug!("Skipping {} ({:?})", record.identifier, reason);
        result.skipped.push(SkippedFile {
            identifier: record.identifier.clone(),
            reason,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn record(dir: &TempDir, name: &str) -> FileRecord {
        FileRecord {
            identifier: name.to_string(),
            source: dir.path().join(name),
            root: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn test_read_bytes_binary_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        let content = [0x00u8, 0x0d, 0x0a, 0xff, 0x1a];
        fs::write(&path, content).unwrap();

        assert_eq!(read_bytes(&path), Some(content.to_vec()));
    }

    #[test]
    fn test_read_bytes_missing() {
        assert_eq!(read_bytes(Path::new("/nonexistent/path/blob.bin")), None);
    }

    #[test]
    fn test_load_all_filters_empty_and_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.bin"), [1u8, 2, 3]).unwrap();
        fs::write(dir.path().join("empty.bin"), b"").unwrap();
        fs::write(dir.path().join("b.bin"), [4u8]).unwrap();

        let mut records = vec![
            record(&dir, "a.bin"),
            record(&dir, "empty.bin"),
            record(&dir, "b.bin"),
        ];
        records.push(FileRecord {
            identifier: "gone.bin".to_string(),
            source: PathBuf::from("/nonexistent/gone.bin"),
            root: PathBuf::from("/nonexistent"),
        });

        let result = load_all(&records);

        let ids: Vec<&str> = result
            .resources
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["a.bin", "b.bin"]);
        assert_eq!(result.resources[0].data, vec![1, 2, 3]);

        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0].identifier, "empty.bin");
        assert_eq!(result.skipped[0].reason, SkipReason::Empty);
        assert_eq!(result.skipped[1].identifier, "gone.bin");
        assert_eq!(result.skipped[1].reason, SkipReason::Unreadable);
    }
}
