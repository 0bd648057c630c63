//! # steward-contracts
//!
//! Shared types and error contracts for the STEWARD capability-control core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod agent;
pub mod capability;
pub mod error;
