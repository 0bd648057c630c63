//! Trait seams between STEWARD and the host platform.
//!
//! These three traits define the complete host boundary:
//!
//! - `OptionStore`      — persistent key-value storage for agent records
//! - `IdentityProvider` — who is making the current admin request
//! - `AccountDirectory` — the host's user table (lookup and provisioning)
//!
//! STEWARD never reaches past these seams. The host wires in its real
//! implementations; the in-memory implementations in `steward-agents` exist
//! for tests and the demo runtime.

use serde_json::Value;

use steward_contracts::{
    agent::{AccountRecord, UserId},
    error::StewardResult,
};

/// Prefix applied to every option name STEWARD stores.
///
/// Keeps the plugin's records in one recognizable namespace inside the
/// host's shared option table.
pub const OPTION_PREFIX: &str = "steward";

/// Return the namespaced option name for `term`.
///
/// Example: `slugify("support_agents")` → `"steward_support_agents"`.
pub fn slugify(term: &str) -> String {
    format!("{}_{}", OPTION_PREFIX, term)
}

/// The host's persistent key-value option store.
///
/// Values are arbitrary JSON; STEWARD serializes its own records into them.
/// Implementations are expected to be transactional per call — a `save`
/// either fully lands or fails with `StewardError::Storage`.
pub trait OptionStore {
    /// Read an option. `Ok(None)` means the option has never been saved.
    fn get_option(&self, name: &str) -> StewardResult<Option<Value>>;

    /// Create or overwrite an option.
    fn save_option(&self, name: &str, value: Value) -> StewardResult<()>;

    /// Remove an option. Removing a missing option is not an error.
    fn delete_option(&self, name: &str) -> StewardResult<()>;
}

/// Resolves the identity behind the current admin request.
pub trait IdentityProvider {
    /// The authenticated user for this request, or `None` when the request
    /// is anonymous. Access checks fail closed on `None`.
    fn resolve_current_identity(&self) -> Option<UserId>;
}

/// The host's user account table.
///
/// STEWARD references accounts but never owns them: deleting an agent must
/// not cascade here, and account mutation beyond provisioning is out of
/// scope.
pub trait AccountDirectory {
    /// Look up an account by id.
    fn find_by_id(&self, user_id: UserId) -> Option<AccountRecord>;

    /// True if an account with this username exists.
    fn username_exists(&self, username: &str) -> bool;

    /// True if an account with this email address exists.
    fn email_exists(&self, email: &str) -> bool;

    /// Provision a new account and return its id.
    ///
    /// `password: None` means the host should invite the user to choose a
    /// password on first login. Fails with `StewardError::Creation` when
    /// the host cannot provision the account.
    fn create_account(
        &self,
        username: &str,
        email: &str,
        password: Option<&str>,
    ) -> StewardResult<UserId>;
}
