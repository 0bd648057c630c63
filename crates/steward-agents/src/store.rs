//! In-memory implementations of the host trait seams.
//!
//! These are the reference implementations used by tests and the demo
//! runtime. A real deployment wires the host platform's own option table,
//! user directory, and request identity behind the same traits.
//!
//! All three keep their state behind a `Mutex` so they can be shared across
//! test threads; the runtime itself is single-threaded per request.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use steward_contracts::{
    agent::{AccountRecord, UserId},
    error::{StewardError, StewardResult},
};
use steward_core::traits::{AccountDirectory, IdentityProvider, OptionStore};

// ── Option store ──────────────────────────────────────────────────────────────

/// An `OptionStore` backed by a plain in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryOptionStore {
    options: Mutex<HashMap<String, Value>>,
}

impl InMemoryOptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for InMemoryOptionStore {
    fn get_option(&self, name: &str) -> StewardResult<Option<Value>> {
        let options = self.options.lock().map_err(|e| StewardError::Storage {
            reason: format!("option store lock poisoned: {}", e),
        })?;
        Ok(options.get(name).cloned())
    }

    fn save_option(&self, name: &str, value: Value) -> StewardResult<()> {
        let mut options = self.options.lock().map_err(|e| StewardError::Storage {
            reason: format!("option store lock poisoned: {}", e),
        })?;
        options.insert(name.to_string(), value);
        Ok(())
    }

    fn delete_option(&self, name: &str) -> StewardResult<()> {
        let mut options = self.options.lock().map_err(|e| StewardError::Storage {
            reason: format!("option store lock poisoned: {}", e),
        })?;
        options.remove(name);
        Ok(())
    }
}

// ── Account directory ─────────────────────────────────────────────────────────

struct DirectoryState {
    accounts: Vec<AccountRecord>,
    next_id: u64,
}

/// An `AccountDirectory` over an in-memory account table.
pub struct InMemoryDirectory {
    state: Mutex<DirectoryState>,
    /// When true, `create_account` refuses with `StewardError::Creation`.
    /// Used to exercise the provisioning-failure path.
    refuse_provisioning: bool,
}

impl InMemoryDirectory {
    /// Create an empty directory that accepts provisioning.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DirectoryState {
                accounts: Vec::new(),
                next_id: 1,
            }),
            refuse_provisioning: false,
        }
    }

    /// Create a directory whose `create_account` always fails.
    pub fn refusing() -> Self {
        Self {
            refuse_provisioning: true,
            ..Self::new()
        }
    }

    /// Seed an account and return its id.
    pub fn add_account(&self, username: &str, email: &str) -> UserId {
        let mut state = self.state.lock().expect("directory lock poisoned");
        let id = UserId(state.next_id);
        state.next_id += 1;
        state.accounts.push(AccountRecord {
            id,
            username: username.to_string(),
            email: email.to_string(),
        });
        id
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountDirectory for InMemoryDirectory {
    fn find_by_id(&self, user_id: UserId) -> Option<AccountRecord> {
        let state = self.state.lock().expect("directory lock poisoned");
        state.accounts.iter().find(|a| a.id == user_id).cloned()
    }

    fn username_exists(&self, username: &str) -> bool {
        let state = self.state.lock().expect("directory lock poisoned");
        state.accounts.iter().any(|a| a.username == username)
    }

    fn email_exists(&self, email: &str) -> bool {
        let state = self.state.lock().expect("directory lock poisoned");
        state.accounts.iter().any(|a| a.email == email)
    }

    fn create_account(
        &self,
        username: &str,
        email: &str,
        _password: Option<&str>,
    ) -> StewardResult<UserId> {
        if self.refuse_provisioning {
            return Err(StewardError::Creation {
                reason: "directory refused to provision the account".to_string(),
            });
        }
        Ok(self.add_account(username, email))
    }
}

// ── Identity provider ─────────────────────────────────────────────────────────

/// An `IdentityProvider` that always reports the same identity.
///
/// `StaticIdentity(None)` models an anonymous request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIdentity(pub Option<UserId>);

impl IdentityProvider for StaticIdentity {
    fn resolve_current_identity(&self) -> Option<UserId> {
        self.0
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
