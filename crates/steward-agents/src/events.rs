//! Lifecycle events and the ordered callback dispatcher.
//!
//! The host platform hangs extra behavior off agent lifecycle changes
//! (notification emails, cache busting, widget cleanup). Rather than a
//! global event bus, STEWARD keeps an explicit list of registered callbacks
//! and invokes them in registration order. Dispatch is synchronous and
//! infallible — callbacks observe, they cannot veto.

use tracing::debug;

use steward_contracts::agent::{AgentId, SupportAgent, UserId};

/// A lifecycle change on a support-agent record.
#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// A new agent record was created.
    Created { agent: SupportAgent },
    /// An agent's granted capability set was replaced.
    GrantsUpdated { agent: SupportAgent },
    /// An agent record was removed. The underlying account survives.
    Deleted { agent_id: AgentId, user_id: UserId },
}

/// Callback signature for lifecycle observers.
pub type EventHandler = Box<dyn Fn(&AgentEvent) + Send + Sync>;

/// An explicit, ordered list of lifecycle callbacks.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<EventHandler>,
}

impl EventDispatcher {
    /// Create a dispatcher with no registered callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback. Callbacks run in the order they were registered.
    pub fn register(&mut self, handler: EventHandler) {
        self.handlers.push(handler);
    }

    /// Invoke every registered callback with `event`, in registration order.
    pub fn dispatch(&self, event: &AgentEvent) {
        debug!(handlers = self.handlers.len(), event = ?event, "dispatching agent event");
        for handler in &self.handlers {
            handler(event);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use steward_contracts::agent::{AgentId, UserId};

    use super::{AgentEvent, EventDispatcher};

    #[test]
    fn callbacks_run_in_registration_order() {
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(vec![]));
        let mut dispatcher = EventDispatcher::new();

        let first = Arc::clone(&order);
        dispatcher.register(Box::new(move |_| first.lock().unwrap().push("first")));

        let second = Arc::clone(&order);
        dispatcher.register(Box::new(move |_| second.lock().unwrap().push("second")));

        let third = Arc::clone(&order);
        dispatcher.register(Box::new(move |_| third.lock().unwrap().push("third")));

        dispatcher.dispatch(&AgentEvent::Deleted {
            agent_id: AgentId(1),
            user_id: UserId(10),
        });

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn dispatch_with_no_handlers_is_a_no_op() {
        let dispatcher = EventDispatcher::new();
        assert!(dispatcher.is_empty());

        // Must not panic.
        dispatcher.dispatch(&AgentEvent::Deleted {
            agent_id: AgentId(1),
            user_id: UserId(10),
        });
    }

    #[test]
    fn handlers_receive_the_event_payload() {
        let seen: Arc<Mutex<Option<u64>>> = Arc::new(Mutex::new(None));
        let mut dispatcher = EventDispatcher::new();

        let sink = Arc::clone(&seen);
        dispatcher.register(Box::new(move |event| {
            if let AgentEvent::Deleted { agent_id, .. } = event {
                *sink.lock().unwrap() = Some(agent_id.0);
            }
        }));

        dispatcher.dispatch(&AgentEvent::Deleted {
            agent_id: AgentId(42),
            user_id: UserId(7),
        });

        assert_eq!(*seen.lock().unwrap(), Some(42));
    }
}
