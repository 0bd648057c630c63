//! Error types for the STEWARD capability-control core.
//!
//! Every fallible operation returns `StewardResult<T>`. Access checks are
//! deliberately NOT fallible: `has_capability` resolves every malformed
//! input to `false` instead of raising, so the deny path can never be
//! bypassed by an error being swallowed upstream.

use thiserror::Error;

/// The unified error type for the STEWARD crates.
#[derive(Debug, Error)]
pub enum StewardError {
    /// A capability group name was registered twice. Fatal at startup.
    #[error("capability group '{group}' is already registered")]
    DuplicateGroup { group: String },

    /// A capability key appeared in more than one group. Keys are globally
    /// unique across the whole catalog; this is enforced at registration.
    #[error("capability key '{key}' is already registered in group '{group}'")]
    DuplicateCapability { key: String, group: String },

    /// Bad input on agent create/edit. Surfaced to the admin UI as-is.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The underlying account could not be provisioned.
    #[error("account creation failed: {reason}")]
    Creation { reason: String },

    /// The host option store failed to read or write a record.
    #[error("option store failure: {reason}")]
    Storage { reason: String },

    /// A capability catalog file is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the STEWARD crates.
pub type StewardResult<T> = Result<T, StewardError>;
