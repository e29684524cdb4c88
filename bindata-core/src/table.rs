//! Identifier → bytes table in discovery order.
//!
//! Each identifier keeps the position where it was first discovered. When a
//! later file maps to the same identifier the [`CollisionPolicy`] decides whose
//! bytes stay; every collision is logged either way.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{BindataError, Result};
use crate::types::{CollisionPolicy, Resource};

/// A resolved identifier collision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub identifier: String,
    /// Source whose bytes ended up in the table.
    pub kept: PathBuf,
    /// Source whose bytes were dropped.
    pub dropped: PathBuf,
}

/// The generated table's contents.
#[derive(Clone, Debug, Default)]
pub struct ResourceTable {
    entries: Vec<Resource>,
    index: HashMap<String, usize>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from resources in discovery order.
    pub fn from_resources(
        resources: impl IntoIterator<Item = Resource>,
        policy: CollisionPolicy,
    ) -> Result<(Self, Vec<Collision>)> {
        let mut table = Self::new();
        let mut collisions = Vec::new();

        for resource in resources {
            if let Some(collision) = table.insert(resource, policy)? {
                collisions.push(collision);
            }
        }

        Ok((table, collisions))
    }

    /// Insert a resource, resolving a clash with an existing identifier.
    ///
    /// Returns the collision if there was one. Under [`CollisionPolicy::Error`]
    /// a clash is returned as an error and the table is left unchanged.
    pub fn insert(
        &mut self,
        resource: Resource,
        policy: CollisionPolicy,
    ) -> Result<Option<Collision>> {
        let Some(&slot) = self.index.get(&resource.identifier) else {
            self.index
                .insert(resource.identifier.clone(), self.entries.len());
            self.entries.push(resource);
            return Ok(None);
        };

        let existing = &mut self.entries[slot];
        let collision = match policy {
            CollisionPolicy::Error => {
                return Err(BindataError::Collision {
                    identifier: resource.identifier,
                    first: existing.source.clone(),
                    second: resource.source,
                });
            }
            CollisionPolicy::FirstWins => Collision {
                identifier: resource.identifier,
                kept: existing.source.clone(),
                dropped: resource.source,
            },
            CollisionPolicy::LastWins => {
                let dropped = std::mem::replace(existing, resource);
                Collision {
                    identifier: dropped.identifier,
                    kept: existing.source.clone(),
                    dropped: dropped.source,
                }
            }
        };

        warn!(
            "Duplicate identifier '{}': keeping {}, dropping {}",
            collision.identifier,
            collision.kept.display(),
            collision.dropped.display()
        );
        Ok(Some(collision))
    }

    /// Look up a resource's bytes by identifier.
    pub fn get(&self, identifier: &str) -> Option<&[u8]> {
        self.index
            .get(identifier)
            .map(|&i| self.entries[i].data.as_slice())
    }

    /// Byte count for an identifier, zero when absent.
    pub fn size(&self, identifier: &str) -> usize {
        self.get(identifier).map_or(0, <[u8]>::len)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all blob sizes.
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(Resource::len).sum()
    }
}
