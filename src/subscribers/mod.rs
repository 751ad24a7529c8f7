//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for handling lifecycle events published through a [`Dispatcher`](crate::Dispatcher).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   created()/modified()/... ── publish(Event) ──► Dispatcher ──► SubscriberSet
//!                                                                     │
//!                                        in registration order, same stack
//!                                                                     │
//!                                                 ┌─────────┬─────────┼─────────┐
//!                                                 ▼         ▼         ▼         ▼
//!                                              Recorder  LogWriter  SubscriberFn ...
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and react to events (logging, indexing)
//! - **Stateful subscribers** - keep what they saw ([`Recorder`])
//! - **Vetoing subscribers** - refuse a change by returning an error

#[cfg(feature = "logging")]
mod log;
mod recorder;
mod set;
mod subscribe;
mod subscriber_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use recorder::Recorder;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
pub use subscriber_fn::SubscriberFn;
