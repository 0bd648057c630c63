//! # steward-registry
//!
//! The static capability catalog for the STEWARD capability-control core.
//!
//! ## Overview
//!
//! This crate provides [`CapabilityRegistry`]: the catalog of every
//! capability that may be granted to a support agent, organized in named
//! groups. The registry is built once at startup — from the built-in
//! catalog or a TOML file — and shared by reference afterward.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use steward_registry::builtin_catalog;
//!
//! let registry = builtin_catalog();
//! assert!(registry.is_registered("manage_network"));
//! ```
//!
//! ## Invariants
//!
//! Group names are unique, and capability keys are globally unique across
//! all groups. Both are enforced when a group is registered, so resolution
//! never needs to disambiguate a key.

pub mod catalog;
pub mod registry;

pub use catalog::{builtin_catalog, platform_groups, wordpress_group};
pub use registry::CapabilityRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────
