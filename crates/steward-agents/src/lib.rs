//! # steward-agents
//!
//! Support-agent lifecycle management for the STEWARD capability-control
//! core.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`SupportAgentManager`] — create, edit, delete, and look up agent
//!   records through the host trait seams
//! - [`EventDispatcher`] / [`AgentEvent`] — ordered lifecycle callbacks
//! - In-memory host implementations ([`InMemoryOptionStore`],
//!   [`InMemoryDirectory`], [`StaticIdentity`]) for tests and the demo
//!
//! ## Usage
//!
//! ```rust,ignore
//! use steward_agents::{InMemoryDirectory, InMemoryOptionStore, StaticIdentity, SupportAgentManager};
//! use steward_contracts::agent::CreateAgentRequest;
//!
//! let manager = SupportAgentManager::new(
//!     Box::new(InMemoryOptionStore::new()),
//!     Box::new(InMemoryDirectory::new()),
//!     Box::new(StaticIdentity(None)),
//! );
//! let agent = manager.create(CreateAgentRequest::NewAccount {
//!     username: "janedoe".into(),
//!     email: "jane@example.com".into(),
//!     password: None,
//! })?;
//! ```

pub mod events;
pub mod manager;
pub mod store;

pub use events::{AgentEvent, EventDispatcher, EventHandler};
pub use manager::SupportAgentManager;
pub use store::{InMemoryDirectory, InMemoryOptionStore, StaticIdentity};
