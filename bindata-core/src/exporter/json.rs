//! JSON manifest exporter.
//!
//! Lists every table entry with its source, size and an xxHash3 content hash,
//! in table order.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::Result;
use crate::table::ResourceTable;

/// One manifest line.
#[derive(Clone, Debug, Serialize)]
pub struct ManifestEntry {
    pub identifier: String,
    pub source: String,
    pub size: usize,
    pub hash: String,
}

/// Compute the manifest hash for a blob.
pub fn content_hash(data: &[u8]) -> String {
    format!("xxh3:{:016x}", xxh3_64(data))
}

/// Build manifest entries for the table.
pub fn entries(table: &ResourceTable) -> Vec<ManifestEntry> {
    table
        .iter()
        .map(|resource| ManifestEntry {
            identifier: resource.identifier.clone(),
            source: resource.source.to_string_lossy().to_string(),
            size: resource.len(),
            hash: content_hash(&resource.data),
        })
        .collect()
}

/// Export the manifest as JSON.
pub fn export(table: &ResourceTable, pretty: bool) -> Result<String> {
    let entries = entries(table);
    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    Ok(json)
}
