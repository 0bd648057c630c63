//! Support-agent identity and account types.
//!
//! A support agent wraps an existing host user account: the agent record
//! owns the grant set and timestamps, never the account itself. Deleting an
//! agent leaves the underlying account in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capability::CapabilitySet;

/// Identifier of a user account in the host platform's user table.
///
/// The account is owned by the host; STEWARD only references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

/// Identifier of a support-agent record.
///
/// Distinct from `UserId`: one user account maps to at most one agent, but
/// agent ids are assigned by STEWARD and survive account renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u64);

/// A restricted-privilege identity granted a subset of admin capabilities.
///
/// The resolver treats this as an immutable snapshot for the duration of one
/// resolution call; mutation happens only through the lifecycle manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportAgent {
    /// Agent record id.
    pub id: AgentId,
    /// The wrapped host account (not owned).
    pub user_id: UserId,
    /// Capability keys explicitly assigned to this agent.
    pub granted_capabilities: CapabilitySet,
    /// When the agent record was created.
    pub created_at: DateTime<Utc>,
    /// Last time the agent authenticated, if ever.
    pub last_login: Option<DateTime<Utc>>,
}

/// A read-only view of a host user account, as reported by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Input to agent creation: link an existing account or provision a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateAgentRequest {
    /// Promote an existing account to a support agent.
    ExistingAccount(UserId),
    /// Provision a fresh account and promote it in one step.
    ///
    /// When `password` is `None`, the host is expected to ask the invited
    /// user to set one on first login.
    NewAccount {
        username: String,
        email: String,
        password: Option<String>,
    },
}
