//! Event types and handler registration.
//!
//! The host delivers each world/player event as a discrete callback. A plugin
//! implements [`EventHandler`] for the events it cares about and registers the
//! handler through [`Context::register_event`](crate::context::Context::register_event).
//! Blocking handlers run first (by priority) and may mutate or cancel the
//! event; non-blocking handlers observe the final state.

pub mod block;
pub mod player;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::context::Context;

pub trait Event: Send + Sync + 'static {
    /// Stable event name, used for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether a blocking handler cancelled this event. Events that cannot
    /// be cancelled report `false`.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Events a blocking handler may veto.
pub trait Cancellable {
    fn cancelled(&self) -> bool;
    fn set_cancelled(&mut self, cancelled: bool);
}

/// Delivery order for handlers of the same event. `Highest` runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventPriority {
    Highest,
    High,
    Normal,
    Low,
    Lowest,
}

pub trait EventHandler<E: Event>: Send + Sync {
    /// Observe an event after blocking handlers ran.
    fn handle<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        _event: &'a E,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async {})
    }

    /// Mutate or cancel an event before it takes effect. Only called for
    /// registrations made with `blocking = true`.
    fn handle_blocking<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        _event: &'a mut E,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async {})
    }
}
