//! The capability registry: the static catalog of grantable capabilities.
//!
//! The registry is populated once at startup — either from code (see
//! `catalog::builtin_catalog`) or from a TOML catalog file — and never
//! mutated afterward. Collaborators hold it by shared reference.
//!
//! Two invariants are enforced at registration time so resolution never has
//! to re-check them:
//!
//! 1. Group names are unique.
//! 2. Capability keys are globally unique across ALL groups.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use steward_contracts::{
    capability::{CapabilityGroup, CapabilityRecord},
    error::{StewardError, StewardResult},
};

/// The top-level structure deserialized from a TOML catalog file.
///
/// Example:
/// ```toml
/// [[groups]]
/// name = "wordpress"
/// kind = "wordpress"
///
/// [[groups.capabilities]]
/// key = "manage_network"
/// title = "Manage Network"
/// description = "Full control over network-wide settings."
/// ```
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    groups: Vec<CapabilityGroup>,
}

/// The static catalog of capabilities that may be granted to support agents.
///
/// Group order is insertion order — the admin UI renders one checkbox
/// section per group in the order groups were registered.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    /// Groups in registration order.
    groups: Vec<CapabilityGroup>,
    /// key → index into `groups`, for O(1) membership and display lookups.
    index: HashMap<String, usize>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `s` as a TOML catalog and build a registry from it.
    ///
    /// Returns `StewardError::Config` if the TOML is malformed, and the
    /// duplicate errors if the catalog violates the uniqueness invariants.
    pub fn from_toml_str(s: &str) -> StewardResult<Self> {
        let catalog: CatalogFile = toml::from_str(s).map_err(|e| StewardError::Config {
            reason: format!("failed to parse capability catalog TOML: {}", e),
        })?;

        let mut registry = Self::new();
        for group in catalog.groups {
            registry.register_group(group)?;
        }
        Ok(registry)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> StewardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StewardError::Config {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Register a named group of capability records.
    ///
    /// Fails with `DuplicateGroup` if the group name is already taken, and
    /// with `DuplicateCapability` if any key in the group — including a key
    /// repeated inside the incoming group itself — already exists anywhere
    /// in the catalog. Empty keys are rejected as `Validation` errors.
    ///
    /// On failure the registry is left unchanged.
    pub fn register_group(&mut self, group: CapabilityGroup) -> StewardResult<()> {
        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(StewardError::DuplicateGroup {
                group: group.name,
            });
        }

        // Validate every key before touching state, so a failed registration
        // cannot leave a half-inserted group behind.
        {
            let mut incoming: HashSet<&str> = HashSet::with_capacity(group.capabilities.len());
            for record in &group.capabilities {
                if record.key.is_empty() {
                    return Err(StewardError::Validation {
                        reason: format!(
                            "group '{}' declares a capability with an empty key",
                            group.name
                        ),
                    });
                }
                if let Some(idx) = self.index.get(&record.key) {
                    return Err(StewardError::DuplicateCapability {
                        key: record.key.clone(),
                        group: self.groups[*idx].name.clone(),
                    });
                }
                if !incoming.insert(record.key.as_str()) {
                    return Err(StewardError::DuplicateCapability {
                        key: record.key.clone(),
                        group: group.name.clone(),
                    });
                }
            }
        }

        debug!(
            group = %group.name,
            kind = ?group.kind,
            capabilities = group.capabilities.len(),
            "capability group registered"
        );

        let group_idx = self.groups.len();
        for record in &group.capabilities {
            self.index.insert(record.key.clone(), group_idx);
        }
        self.groups.push(group);

        Ok(())
    }

    /// All groups in registration order, records in declaration order.
    pub fn all_capabilities(&self) -> &[CapabilityGroup] {
        &self.groups
    }

    /// True if `key` is declared in any group. The empty key is never
    /// registered.
    pub fn is_registered(&self, key: &str) -> bool {
        !key.is_empty() && self.index.contains_key(key)
    }

    /// Look up the record for `key`, if registered.
    pub fn record(&self, key: &str) -> Option<&CapabilityRecord> {
        let group = &self.groups[*self.index.get(key)?];
        group.capabilities.iter().find(|r| r.key == key)
    }

    /// The group that declared `key`, if registered.
    pub fn group_of(&self, key: &str) -> Option<&CapabilityGroup> {
        Some(&self.groups[*self.index.get(key)?])
    }

    /// Total number of registered capability keys across all groups.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no capabilities have been registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
