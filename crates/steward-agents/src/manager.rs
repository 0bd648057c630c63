//! The support-agent lifecycle manager.
//!
//! Owns create / edit / delete / lookup for agent records and enforces the
//! boundary validation the resolver relies on: by the time a grant reaches
//! storage it names a registered capability, and by the time a create
//! reaches the directory its username and email are known to be free.
//!
//! Persistence model: the whole agent table is serialized as one JSON value
//! under a single slugified option (`steward_support_agents`), read-modify-
//! written on every mutation. The host's option layer is the transactional
//! boundary; within one admin request there is no concurrent mutation.

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use steward_contracts::{
    agent::{AgentId, CreateAgentRequest, SupportAgent, UserId},
    capability::CapabilitySet,
    error::{StewardError, StewardResult},
};
use steward_core::traits::{slugify, AccountDirectory, IdentityProvider, OptionStore};
use steward_registry::CapabilityRegistry;

use crate::events::{AgentEvent, EventDispatcher, EventHandler};

/// Option term under which the agent table is stored (pre-slugification).
const AGENTS_OPTION: &str = "support_agents";

/// Manages the lifecycle of support-agent records.
///
/// Construct one per process with the host's trait implementations. The
/// manager never deletes or mutates user accounts — it only references them.
pub struct SupportAgentManager {
    store: Box<dyn OptionStore>,
    directory: Box<dyn AccountDirectory>,
    identity: Box<dyn IdentityProvider>,
    dispatcher: EventDispatcher,
    option_name: String,
}

impl SupportAgentManager {
    /// Create a manager over the given host implementations.
    pub fn new(
        store: Box<dyn OptionStore>,
        directory: Box<dyn AccountDirectory>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        Self {
            store,
            directory,
            identity,
            dispatcher: EventDispatcher::new(),
            option_name: slugify(AGENTS_OPTION),
        }
    }

    /// Register a lifecycle callback. Callbacks run in registration order.
    pub fn on_event(&mut self, handler: EventHandler) {
        self.dispatcher.register(handler);
    }

    // ── Table persistence ─────────────────────────────────────────────────────

    fn load_table(&self) -> StewardResult<Vec<SupportAgent>> {
        let Some(value) = self.store.get_option(&self.option_name)? else {
            return Ok(Vec::new());
        };
        serde_json::from_value(value).map_err(|e| StewardError::Storage {
            reason: format!("agent table is corrupt: {}", e),
        })
    }

    fn save_table(&self, table: &[SupportAgent]) -> StewardResult<()> {
        let value: Value = serde_json::to_value(table).map_err(|e| StewardError::Storage {
            reason: format!("failed to serialize agent table: {}", e),
        })?;
        self.store.save_option(&self.option_name, value)
    }

    fn next_id(table: &[SupportAgent]) -> AgentId {
        AgentId(table.iter().map(|a| a.id.0).max().unwrap_or(0) + 1)
    }

    // ── Creation ──────────────────────────────────────────────────────────────

    /// Create a support agent from an existing account or by provisioning a
    /// new one.
    ///
    /// Validation happens here, before the resolver or the directory is
    /// involved: an unknown or already-promoted account, a taken username,
    /// or a taken email address all fail with `StewardError::Validation`.
    /// A directory provisioning failure surfaces as `StewardError::Creation`.
    ///
    /// New agents start with an empty grant set — capabilities are assigned
    /// in a separate edit step.
    pub fn create(&self, request: CreateAgentRequest) -> StewardResult<SupportAgent> {
        let mut table = self.load_table()?;

        let user_id = match &request {
            CreateAgentRequest::ExistingAccount(user_id) => {
                if self.directory.find_by_id(*user_id).is_none() {
                    return Err(StewardError::Validation {
                        reason: format!("no user account with id {}", user_id.0),
                    });
                }
                if table.iter().any(|a| a.user_id == *user_id) {
                    return Err(StewardError::Validation {
                        reason: format!("user {} is already a support agent", user_id.0),
                    });
                }
                *user_id
            }

            CreateAgentRequest::NewAccount {
                username,
                email,
                password,
            } => {
                if username.is_empty() {
                    return Err(StewardError::Validation {
                        reason: "username must not be empty".to_string(),
                    });
                }
                if email.is_empty() {
                    return Err(StewardError::Validation {
                        reason: "email address must not be empty".to_string(),
                    });
                }
                if self.directory.username_exists(username) {
                    return Err(StewardError::Validation {
                        reason: format!("username '{}' is already taken", username),
                    });
                }
                if self.directory.email_exists(email) {
                    return Err(StewardError::Validation {
                        reason: format!("email address '{}' is already in use", email),
                    });
                }

                self.directory
                    .create_account(username, email, password.as_deref())?
            }
        };

        let agent = SupportAgent {
            id: Self::next_id(&table),
            user_id,
            granted_capabilities: CapabilitySet::new(),
            created_at: Utc::now(),
            last_login: None,
        };

        table.push(agent.clone());
        self.save_table(&table)?;

        info!(agent_id = agent.id.0, user_id = agent.user_id.0, "support agent created");
        self.dispatcher.dispatch(&AgentEvent::Created {
            agent: agent.clone(),
        });

        Ok(agent)
    }

    // ── Grant editing ─────────────────────────────────────────────────────────

    /// Replace the agent's granted capability set.
    ///
    /// Every key must be registered in `registry`; any unregistered key is
    /// rejected with `StewardError::Validation` before the record is
    /// touched. This is the boundary that keeps unregistered grants out of
    /// storage — the resolver's silent drop is a second line of defense,
    /// not the primary check.
    pub fn update_grants(
        &self,
        registry: &CapabilityRegistry,
        agent_id: AgentId,
        keys: &[String],
    ) -> StewardResult<SupportAgent> {
        for key in keys {
            if !registry.is_registered(key) {
                warn!(agent_id = agent_id.0, capability = %key, "rejected grant of unregistered capability");
                return Err(StewardError::Validation {
                    reason: format!("'{}' is not a registered capability", key),
                });
            }
        }

        let mut table = self.load_table()?;
        let agent = table
            .iter_mut()
            .find(|a| a.id == agent_id)
            .ok_or_else(|| StewardError::Validation {
                reason: format!("no support agent with id {}", agent_id.0),
            })?;

        agent.granted_capabilities = keys.iter().map(String::as_str).collect();
        let updated = agent.clone();
        self.save_table(&table)?;

        info!(
            agent_id = updated.id.0,
            granted = updated.granted_capabilities.len(),
            "support agent grants updated"
        );
        self.dispatcher.dispatch(&AgentEvent::GrantsUpdated {
            agent: updated.clone(),
        });

        Ok(updated)
    }

    // ── Deletion ──────────────────────────────────────────────────────────────

    /// Remove the agent record. The underlying user account is untouched —
    /// account retirement is host policy, not STEWARD's.
    pub fn delete(&self, agent_id: AgentId) -> StewardResult<()> {
        let mut table = self.load_table()?;
        let position = table
            .iter()
            .position(|a| a.id == agent_id)
            .ok_or_else(|| StewardError::Validation {
                reason: format!("no support agent with id {}", agent_id.0),
            })?;

        let removed = table.remove(position);
        self.save_table(&table)?;

        info!(agent_id = removed.id.0, user_id = removed.user_id.0, "support agent deleted");
        self.dispatcher.dispatch(&AgentEvent::Deleted {
            agent_id: removed.id,
            user_id: removed.user_id,
        });

        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    /// Fetch an agent by record id.
    pub fn get(&self, agent_id: AgentId) -> StewardResult<Option<SupportAgent>> {
        Ok(self.load_table()?.into_iter().find(|a| a.id == agent_id))
    }

    /// Fetch the agent wrapping a given user account, if any.
    pub fn find_by_user(&self, user_id: UserId) -> StewardResult<Option<SupportAgent>> {
        Ok(self
            .load_table()?
            .into_iter()
            .find(|a| a.user_id == user_id))
    }

    /// The agent behind the current request's authenticated identity.
    ///
    /// `Ok(None)` when the request is anonymous or the identity is not a
    /// support agent — callers fail closed on `None`.
    pub fn current(&self) -> StewardResult<Option<SupportAgent>> {
        match self.identity.resolve_current_identity() {
            Some(user_id) => self.find_by_user(user_id),
            None => Ok(None),
        }
    }

    /// All agent records in creation order.
    pub fn list(&self) -> StewardResult<Vec<SupportAgent>> {
        self.load_table()
    }

    /// Stamp the agent's `last_login` with the current time.
    pub fn record_login(&self, agent_id: AgentId) -> StewardResult<()> {
        let mut table = self.load_table()?;
        let agent = table
            .iter_mut()
            .find(|a| a.id == agent_id)
            .ok_or_else(|| StewardError::Validation {
                reason: format!("no support agent with id {}", agent_id.0),
            })?;

        agent.last_login = Some(Utc::now());
        self.save_table(&table)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
