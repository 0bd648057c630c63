//! The capability resolver: fail-closed effective-capability computation.
//!
//! Resolution is a pure function of (agent, registry, granting-admin caps):
//!
//!   effective(agent) = (agent.granted ∪ admin_caps) ∩ registry.keys
//!
//! There is no cache and no state — the effective set is re-derived on every
//! call. Keys absent from the registry are dropped silently: an admin cannot
//! grant a capability the host does not know about, and a stale grant left
//! behind by a removed catalog entry simply stops working.

use std::collections::BTreeMap;

use tracing::debug;

use steward_contracts::{
    agent::SupportAgent,
    capability::{CapabilitySet, GroupKind},
};
use steward_registry::CapabilityRegistry;

/// Prefix attached to display titles of platform-specific capabilities,
/// so the UI can tell them apart from WordPress built-ins.
pub const PLATFORM_MARKER: &str = "◆ ";

/// Computes and tests effective capabilities for support agents.
///
/// Holds the registry by shared reference: the catalog is built once at
/// startup and outlives every resolver.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityResolver<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> CapabilityResolver<'a> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Compute the agent's effective capability set.
    ///
    /// The union of the agent's explicit grants and the granting admin's
    /// capabilities, filtered to keys present in the registry. Deterministic
    /// and side-effect free; calling twice with unchanged inputs yields
    /// identical sets.
    pub fn effective_capabilities(
        &self,
        agent: &SupportAgent,
        granting_admin_caps: &CapabilitySet,
    ) -> CapabilitySet {
        let mut effective = CapabilitySet::new();

        for key in agent
            .granted_capabilities
            .all()
            .chain(granting_admin_caps.all())
        {
            if self.registry.is_registered(key) {
                effective.grant(key);
            } else {
                // Silent fail-closed drop, traced for operators only.
                debug!(
                    agent_id = agent.id.0,
                    capability = %key,
                    "dropping unregistered capability key during resolution"
                );
            }
        }

        effective
    }

    /// True iff `key` is in the agent's effective set.
    ///
    /// Fails closed: a missing agent or an empty key is always `false`,
    /// never an error. This is the single predicate access gates call.
    pub fn has_capability(
        &self,
        agent: Option<&SupportAgent>,
        key: &str,
        granting_admin_caps: &CapabilitySet,
    ) -> bool {
        let Some(agent) = agent else {
            return false;
        };
        if key.is_empty() {
            return false;
        }

        self.effective_capabilities(agent, granting_admin_caps)
            .has(key)
    }

    /// Map each effective capability key to its display title.
    ///
    /// Titles of platform-group capabilities carry [`PLATFORM_MARKER`] as a
    /// prefix; WordPress built-ins are shown verbatim. Read-only rendering
    /// helper — no access decision is ever made from this map.
    pub fn capability_titles_for_display(
        &self,
        agent: &SupportAgent,
        granting_admin_caps: &CapabilitySet,
    ) -> BTreeMap<String, String> {
        let effective = self.effective_capabilities(agent, granting_admin_caps);

        let mut titles = BTreeMap::new();
        for key in effective.all() {
            // Every effective key is registered by construction.
            let Some(record) = self.registry.record(key) else {
                continue;
            };
            let title = match self.registry.group_of(key).map(|g| g.kind) {
                Some(GroupKind::Platform) => format!("{}{}", PLATFORM_MARKER, record.title),
                _ => record.title.clone(),
            };
            titles.insert(key.to_string(), title);
        }

        titles
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use steward_contracts::{
        agent::{AgentId, SupportAgent, UserId},
        capability::{CapabilityGroup, CapabilityRecord, CapabilitySet, GroupKind},
    };
    use steward_registry::CapabilityRegistry;

    use super::{CapabilityResolver, PLATFORM_MARKER};

    // ── Fixtures ──────────────────────────────────────────────────────────────

    /// Registry with one WordPress group and one platform group.
    fn registry() -> CapabilityRegistry {
        let mut registry = CapabilityRegistry::new();
        registry
            .register_group(CapabilityGroup {
                name: "wordpress".to_string(),
                kind: GroupKind::Wordpress,
                capabilities: vec![
                    CapabilityRecord::new("edit_users", "Edit Users", ""),
                    CapabilityRecord::new("manage_options", "Manage Options", ""),
                ],
            })
            .unwrap();
        registry
            .register_group(CapabilityGroup {
                name: "billing".to_string(),
                kind: GroupKind::Platform,
                capabilities: vec![CapabilityRecord::new("view_billing", "View Billing", "")],
            })
            .unwrap();
        registry
    }

    fn agent_with(keys: &[&str]) -> SupportAgent {
        SupportAgent {
            id: AgentId(1),
            user_id: UserId(100),
            granted_capabilities: keys.iter().copied().collect(),
            created_at: Utc::now(),
            last_login: None,
        }
    }

    // ── effective_capabilities ────────────────────────────────────────────────

    /// An agent granted {edit_users, nonexistent_cap} over a registry
    /// without nonexistent_cap resolves to exactly {edit_users}.
    #[test]
    fn unregistered_grants_are_dropped() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users", "nonexistent_cap"]);

        let effective = resolver.effective_capabilities(&agent, &CapabilitySet::new());

        assert_eq!(effective.len(), 1);
        assert!(effective.has("edit_users"));
        assert!(!effective.has("nonexistent_cap"));
    }

    #[test]
    fn admin_caps_are_merged_and_filtered() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["view_billing"]);

        // The granting admin holds one registered and one unknown capability.
        let admin_caps: CapabilitySet = ["manage_options", "super_weird_cap"]
            .into_iter()
            .collect();

        let effective = resolver.effective_capabilities(&agent, &admin_caps);

        assert!(effective.has("view_billing"));
        assert!(effective.has("manage_options"));
        assert!(!effective.has("super_weird_cap"));
        assert_eq!(effective.len(), 2);
    }

    /// effective ⊇ granted ∩ registry keys.
    #[test]
    fn effective_contains_all_registered_grants() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users", "view_billing", "bogus"]);

        let effective = resolver.effective_capabilities(&agent, &CapabilitySet::new());

        for key in agent.granted_capabilities.all() {
            if registry.is_registered(key) {
                assert!(effective.has(key), "registered grant '{key}' must survive");
            }
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users", "view_billing"]);
        let admin_caps: CapabilitySet = ["manage_options"].into_iter().collect();

        let first = resolver.effective_capabilities(&agent, &admin_caps);
        let second = resolver.effective_capabilities(&agent, &admin_caps);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_resolve_to_empty_set() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&[]);

        let effective = resolver.effective_capabilities(&agent, &CapabilitySet::new());
        assert!(effective.is_empty());
    }

    // ── has_capability ────────────────────────────────────────────────────────

    /// Fail-closed: a missing agent never panics and never grants.
    #[test]
    fn has_capability_fails_closed_on_missing_agent() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);

        assert!(!resolver.has_capability(None, "manage_network", &CapabilitySet::new()));
    }

    #[test]
    fn has_capability_fails_closed_on_empty_key() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users"]);

        assert!(!resolver.has_capability(Some(&agent), "", &CapabilitySet::new()));
    }

    #[test]
    fn has_capability_is_false_for_unregistered_keys() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        // Even an explicit grant of an unregistered key must not take effect.
        let agent = agent_with(&["nonexistent_cap"]);

        assert!(!resolver.has_capability(Some(&agent), "nonexistent_cap", &CapabilitySet::new()));
    }

    #[test]
    fn has_capability_true_for_effective_keys() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users"]);
        let admin_caps: CapabilitySet = ["manage_options"].into_iter().collect();

        assert!(resolver.has_capability(Some(&agent), "edit_users", &admin_caps));
        // Inherited from the granting admin.
        assert!(resolver.has_capability(Some(&agent), "manage_options", &admin_caps));
        // Registered but not granted to anyone involved.
        assert!(!resolver.has_capability(Some(&agent), "view_billing", &CapabilitySet::new()));
    }

    // ── capability_titles_for_display ─────────────────────────────────────────

    /// wordpress/manage_options titled "Manage Options" maps to exactly
    /// that title, with no marker.
    #[test]
    fn builtin_titles_are_verbatim() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["manage_options"]);

        let titles = resolver.capability_titles_for_display(&agent, &CapabilitySet::new());

        assert_eq!(titles.len(), 1);
        assert_eq!(titles["manage_options"], "Manage Options");
    }

    #[test]
    fn platform_titles_carry_the_marker() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["view_billing", "edit_users"]);

        let titles = resolver.capability_titles_for_display(&agent, &CapabilitySet::new());

        assert_eq!(
            titles["view_billing"],
            format!("{}View Billing", PLATFORM_MARKER)
        );
        assert_eq!(titles["edit_users"], "Edit Users");
    }

    #[test]
    fn display_map_only_contains_effective_keys() {
        let registry = registry();
        let resolver = CapabilityResolver::new(&registry);
        let agent = agent_with(&["edit_users", "nonexistent_cap"]);

        let titles = resolver.capability_titles_for_display(&agent, &CapabilitySet::new());

        assert_eq!(titles.len(), 1);
        assert!(titles.contains_key("edit_users"));
        assert!(!titles.contains_key("nonexistent_cap"));
    }
}
