//! The built-in capability catalog.
//!
//! Mirrors the default grant surface of the host network-management
//! platform: one group of WordPress network-admin built-ins, then one
//! platform group per feature area. Hosts that need a different surface
//! load their own TOML catalog instead (`CapabilityRegistry::from_file`).

use steward_contracts::capability::{CapabilityGroup, CapabilityRecord, GroupKind};

use crate::registry::CapabilityRegistry;

fn record(key: &str, title: &str, description: &str) -> CapabilityRecord {
    CapabilityRecord::new(key, title, description)
}

/// The WordPress built-in group.
pub fn wordpress_group() -> CapabilityGroup {
    CapabilityGroup {
        name: "wordpress".to_string(),
        kind: GroupKind::Wordpress,
        capabilities: vec![
            record(
                "manage_network",
                "Manage Network",
                "Access the network admin dashboard.",
            ),
            record(
                "manage_sites",
                "Manage Sites",
                "Add, edit, and archive sites on the network.",
            ),
            record(
                "manage_network_users",
                "Manage Network Users",
                "Administer user accounts across the network.",
            ),
            record(
                "manage_network_themes",
                "Manage Network Themes",
                "Enable and disable themes network-wide.",
            ),
            record(
                "manage_network_plugins",
                "Manage Network Plugins",
                "Activate and deactivate plugins network-wide.",
            ),
            record(
                "manage_network_options",
                "Manage Network Options",
                "Change network-wide settings.",
            ),
            record(
                "manage_options",
                "Manage Options",
                "Change site-level settings.",
            ),
            record("list_users", "List Users", "Browse the user table."),
            record("create_users", "Create Users", "Provision new user accounts."),
            record("edit_users", "Edit Users", "Edit existing user accounts."),
            record("delete_users", "Delete Users", "Remove user accounts."),
        ],
    }
}

/// The platform feature groups, in the order the admin UI lists them.
pub fn platform_groups() -> Vec<CapabilityGroup> {
    vec![
        CapabilityGroup {
            name: "sites".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record("wu_read_sites", "View Sites", "See the platform site list."),
                record("wu_edit_sites", "Edit Sites", "Modify platform-managed sites."),
                record("wu_delete_sites", "Delete Sites", "Remove platform-managed sites."),
            ],
        },
        CapabilityGroup {
            name: "customers".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record("wu_read_customers", "View Customers", "See the customer list."),
                record("wu_edit_customers", "Edit Customers", "Modify customer records."),
                record("wu_delete_customers", "Delete Customers", "Remove customer records."),
            ],
        },
        CapabilityGroup {
            name: "memberships".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record(
                    "wu_read_memberships",
                    "View Memberships",
                    "See membership records and statuses.",
                ),
                record(
                    "wu_edit_memberships",
                    "Edit Memberships",
                    "Change membership plans and statuses.",
                ),
            ],
        },
        CapabilityGroup {
            name: "payments".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record("wu_read_payments", "View Payments", "See payment history."),
                record("wu_edit_payments", "Edit Payments", "Adjust or refund payments."),
            ],
        },
        CapabilityGroup {
            name: "settings".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record("wu_read_settings", "View Settings", "See platform settings."),
                record("wu_edit_settings", "Edit Settings", "Change platform settings."),
            ],
        },
        CapabilityGroup {
            name: "support-agents".to_string(),
            kind: GroupKind::Platform,
            capabilities: vec![
                record(
                    "wu_read_support_agents",
                    "View Support Agents",
                    "See the support agent list.",
                ),
                record(
                    "wu_add_support_agents",
                    "Add Support Agents",
                    "Create new support agents.",
                ),
                record(
                    "wu_edit_support_agents",
                    "Edit Support Agents",
                    "Change which capabilities an agent holds.",
                ),
                record(
                    "wu_delete_support_agents",
                    "Delete Support Agents",
                    "Remove support agent records.",
                ),
            ],
        },
    ]
}

/// Build a registry pre-populated with the default catalog.
///
/// The built-in catalog is code we control, so registration cannot hit the
/// duplicate errors; a failure here is a programming error in this module.
pub fn builtin_catalog() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();

    registry
        .register_group(wordpress_group())
        .expect("built-in wordpress group must register");

    for group in platform_groups() {
        registry
            .register_group(group)
            .expect("built-in platform group must register");
    }

    registry
}
