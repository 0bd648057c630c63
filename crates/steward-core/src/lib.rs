//! # steward-core
//!
//! Host-platform trait seams and the fail-closed capability resolver.
//!
//! This crate provides:
//! - The three host traits (`OptionStore`, `IdentityProvider`,
//!   `AccountDirectory`) that form the boundary to the platform
//! - The `CapabilityResolver` — the single predicate admin surfaces call
//!   before permitting any action or UI element
//!
//! ## Usage
//!
//! ```rust,ignore
//! use steward_core::{CapabilityResolver, traits::OptionStore};
//! use steward_registry::builtin_catalog;
//!
//! let registry = builtin_catalog();
//! let resolver = CapabilityResolver::new(&registry);
//! ```

pub mod resolver;
pub mod traits;

pub use resolver::{CapabilityResolver, PLATFORM_MARKER};
pub use traits::{slugify, AccountDirectory, IdentityProvider, OptionStore, OPTION_PREFIX};

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_applies_the_plugin_prefix() {
        assert_eq!(slugify("support_agents"), "steward_support_agents");
        assert_eq!(slugify("settings"), "steward_settings");
    }
}
