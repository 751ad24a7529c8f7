//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging event handlers into a
//! [`Dispatcher`](crate::Dispatcher). Subscribers are called synchronously, in
//! registration order, on the publisher's stack.
//!
//! ## Contract
//! - `on_event` runs to completion before the next subscriber is called.
//! - Returning `Err` stops the fan-out; later subscribers do not see the event
//!   and the error reaches the publisher as [`NotifyError`](crate::NotifyError).
//! - A panic unwinds through the dispatcher unchanged.
//! - Subscribers may publish further events from inside `on_event`.
//!
//! ## Example
//! ```rust
//! use lifecycle_events::{Event, EventKind, Subscribe, SubscriberError};
//!
//! struct ReadOnly;
//!
//! impl Subscribe<u64> for ReadOnly {
//!     fn on_event(&self, ev: &Event<u64>) -> Result<(), SubscriberError> {
//!         if ev.provides(EventKind::Moved) {
//!             return Err(SubscriberError::vetoed("container is read-only"));
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "read-only" }
//! }
//! ```

use crate::error::SubscriberError;
use crate::events::Event;

/// Contract for event subscribers.
pub trait Subscribe<O> {
    /// Handle a single event for this subscriber.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    fn on_event(&self, event: &Event<O>) -> Result<(), SubscriberError>;

    /// Human-readable name (for logs and errors).
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose; override it when possible.
    /// Built-in subscribers use lowercase kebab-case names (`recorder`, `log-writer`).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
