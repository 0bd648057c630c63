//! End-to-end demo scenarios for the STEWARD capability-control core.
//!
//! Each scenario wires real components (registry, resolver, lifecycle
//! manager) against the in-memory host implementations and prints what a
//! network admin would observe.

use steward_agents::{InMemoryDirectory, InMemoryOptionStore, StaticIdentity, SupportAgentManager};
use steward_contracts::{
    agent::CreateAgentRequest,
    capability::CapabilitySet,
    error::{StewardError, StewardResult},
};
use steward_core::CapabilityResolver;
use steward_registry::{builtin_catalog, CapabilityRegistry};

/// Scenario 1: agent provisioning and boundary validation.
///
/// Creates one agent from an existing account and one by inviting a new
/// user, then shows the validation rejections an admin would hit: duplicate
/// email, duplicate username, double promotion.
pub fn run_provisioning() -> StewardResult<()> {
    println!("=== Scenario 1: Agent Provisioning ===");
    println!();

    let directory = InMemoryDirectory::new();
    let existing = directory.add_account("johnsmith", "john@example.com");

    let manager = SupportAgentManager::new(
        Box::new(InMemoryOptionStore::new()),
        Box::new(directory),
        Box::new(StaticIdentity(Some(existing))),
    );

    let agent = manager.create(CreateAgentRequest::ExistingAccount(existing))?;
    println!("  Promoted existing account:  user #{} -> agent #{}", agent.user_id.0, agent.id.0);

    let invited = manager.create(CreateAgentRequest::NewAccount {
        username: "janedoe".to_string(),
        email: "jane@example.com".to_string(),
        password: None,
    })?;
    println!("  Invited new account:        user #{} -> agent #{}", invited.user_id.0, invited.id.0);
    println!("  (no password set — the host asks Jane to pick one on first login)");
    println!();

    // Validation rejections, all caught before any record changes.
    let rejections = [
        manager.create(CreateAgentRequest::NewAccount {
            username: "someone".to_string(),
            email: "john@example.com".to_string(),
            password: None,
        }),
        manager.create(CreateAgentRequest::NewAccount {
            username: "janedoe".to_string(),
            email: "other@example.com".to_string(),
            password: None,
        }),
        manager.create(CreateAgentRequest::ExistingAccount(existing)),
    ];

    for result in rejections {
        match result {
            Err(StewardError::Validation { reason }) => {
                println!("  REJECTED: {}", reason);
            }
            Err(e) => println!("  Unexpected error: {}", e),
            Ok(_) => println!("  Unexpectedly succeeded"),
        }
    }

    println!();
    println!("  Agents on record: {}", manager.list()?.len());
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}

/// Scenario 2: capability resolution and fail-closed access checks.
///
/// Grants a mixed capability set, then runs the `has_capability` predicate
/// the admin surfaces call — including the fail-closed cases (anonymous
/// request, empty key, unregistered key).
pub fn run_access_check() -> StewardResult<()> {
    println!("=== Scenario 2: Access Checks ===");
    println!();

    let registry = builtin_catalog();
    let resolver = CapabilityResolver::new(&registry);

    let directory = InMemoryDirectory::new();
    let user = directory.add_account("johnsmith", "john@example.com");
    let manager = SupportAgentManager::new(
        Box::new(InMemoryOptionStore::new()),
        Box::new(directory),
        Box::new(StaticIdentity(Some(user))),
    );

    let agent = manager.create(CreateAgentRequest::ExistingAccount(user))?;
    let agent = manager.update_grants(
        &registry,
        agent.id,
        &["wu_read_sites".to_string(), "wu_read_customers".to_string()],
    )?;

    // The granting admin's own capabilities are merged into the agent's
    // effective set at resolution time.
    let admin_caps: CapabilitySet = ["edit_users"].into_iter().collect();

    println!("  Agent grants:   wu_read_sites, wu_read_customers");
    println!("  Admin carries:  edit_users");
    println!();

    let checks = [
        ("wu_read_sites", "explicit grant"),
        ("edit_users", "inherited from granting admin"),
        ("wu_edit_sites", "registered but never granted"),
        ("made_up_cap", "unregistered key"),
        ("", "empty key"),
    ];

    for (key, label) in checks {
        let allowed = resolver.has_capability(Some(&agent), key, &admin_caps);
        println!(
            "  has_capability({:<16}) = {:<5} ({})",
            format!("{:?}", key),
            allowed,
            label
        );
    }

    // Anonymous request: no agent resolves, access fails closed.
    let anonymous = resolver.has_capability(None, "manage_network", &admin_caps);
    println!(
        "  has_capability(no agent, \"manage_network\") = {} (fail closed)",
        anonymous
    );

    // Attempting to grant an unregistered key is rejected at the boundary.
    match manager.update_grants(&registry, agent.id, &["made_up_cap".to_string()]) {
        Err(StewardError::Validation { reason }) => {
            println!("  Grant of unregistered key REJECTED: {}", reason);
        }
        other => println!("  Unexpected: {:?}", other.map(|a| a.id)),
    }

    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}

/// A small platform catalog loaded from TOML, the way a host deployment
/// would extend the grant surface.
const EXTRA_CATALOG: &str = r#"
[[groups]]
name = "wordpress"
kind = "wordpress"

[[groups.capabilities]]
key = "manage_options"
title = "Manage Options"
description = "Change site-level settings."

[[groups]]
name = "billing"
kind = "platform"

[[groups.capabilities]]
key = "view_billing"
title = "View Billing"
description = "See invoices and payment history."
"#;

/// Scenario 3: display titles with the platform marker.
///
/// Loads a catalog from TOML and renders the capability column the agent
/// list table shows: built-in titles verbatim, platform titles marked.
pub fn run_display() -> StewardResult<()> {
    println!("=== Scenario 3: Display Titles ===");
    println!();

    let registry = CapabilityRegistry::from_toml_str(EXTRA_CATALOG)?;
    let resolver = CapabilityResolver::new(&registry);

    let directory = InMemoryDirectory::new();
    let user = directory.add_account("johnsmith", "john@example.com");
    let manager = SupportAgentManager::new(
        Box::new(InMemoryOptionStore::new()),
        Box::new(directory),
        Box::new(StaticIdentity(Some(user))),
    );

    let agent = manager.create(CreateAgentRequest::ExistingAccount(user))?;
    let agent = manager.update_grants(
        &registry,
        agent.id,
        &["manage_options".to_string(), "view_billing".to_string()],
    )?;

    println!("  Catalog groups:");
    for group in registry.all_capabilities() {
        println!(
            "    {} ({:?}): {} capability(ies)",
            group.name,
            group.kind,
            group.capabilities.len()
        );
    }
    println!();

    let titles = resolver.capability_titles_for_display(&agent, &CapabilitySet::new());
    println!("  Capability column for agent #{}:", agent.id.0);
    for (key, title) in &titles {
        println!("    {:<16} {}", key, title);
    }

    println!();
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
