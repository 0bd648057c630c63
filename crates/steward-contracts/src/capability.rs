//! Capability catalog and grant-set types.
//!
//! STEWARD uses a catalog model: every capability that may be granted to a
//! support agent is declared once, in a named group, before any resolution
//! happens. A key that is not in the catalog can never take effect — the
//! resolver drops it rather than granting it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One grantable capability as declared in the catalog.
///
/// `key` is the machine identifier checked by access gates
/// (e.g. "manage_network", "wu_read_sites"). `title` and `description`
/// exist purely for the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    /// Unique key, globally unique across all groups.
    pub key: String,
    /// Display label shown in grouped checkboxes and list columns.
    pub title: String,
    /// Longer explanation of what the capability unlocks.
    #[serde(default)]
    pub description: String,
}

impl CapabilityRecord {
    /// Construct a record from string-like values.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Whether a group holds host built-ins or platform-specific capabilities.
///
/// Platform capabilities are rendered with a visual marker so admins can
/// tell them apart from the WordPress built-ins at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    /// Core WordPress network-admin capabilities.
    Wordpress,
    /// Capabilities registered by the network-management platform.
    Platform,
}

/// A named group of capability records, declared together in the catalog.
///
/// Groups exist for presentation: the admin UI renders one checkbox section
/// per group, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGroup {
    /// Group identifier (e.g. "wordpress", "sites", "payments").
    pub name: String,
    /// Built-in or platform-specific.
    pub kind: GroupKind,
    /// Records in declaration order.
    pub capabilities: Vec<CapabilityRecord>,
}

/// A set of capability keys granted to an identity.
///
/// Used both for an agent's explicitly granted keys and for the capabilities
/// a granting admin already holds. Backed by a `BTreeSet` so iteration order
/// is stable, which keeps resolution output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    inner: BTreeSet<String>,
}

impl CapabilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a capability key to this set. Duplicate grants are idempotent.
    pub fn grant(&mut self, key: impl Into<String>) {
        self.inner.insert(key.into());
    }

    /// Return true if the set contains the given key.
    pub fn has(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    /// Iterate over all granted keys in sorted order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    /// Number of granted keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when nothing has been granted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<String> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
