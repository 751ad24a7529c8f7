//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(&Event<O>) -> Result<(), SubscriberError>`
//! under an explicit name. Shared state, if any, lives in the closure's captures
//! (e.g. an `Arc<Mutex<...>>`).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecycle_events::{Event, Subscribe, SubscriberFn};
//!
//! let s: Arc<dyn Subscribe<u32>> = SubscriberFn::arc("noop", |_ev: &Event<u32>| Ok(()));
//! assert_eq!(s.name(), "noop");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::SubscriberError;
use crate::events::Event;

use super::Subscribe;

/// Function-backed subscriber implementation.
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need a shared handle.
    pub fn new<O>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&Event<O>) -> Result<(), SubscriberError>,
    {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as `Arc<Self>`.
    pub fn arc<O>(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self>
    where
        F: Fn(&Event<O>) -> Result<(), SubscriberError>,
    {
        Arc::new(Self::new(name, f))
    }
}

impl<O, F> Subscribe<O> for SubscriberFn<F>
where
    F: Fn(&Event<O>) -> Result<(), SubscriberError>, // Fn, not FnMut
{
    fn on_event(&self, event: &Event<O>) -> Result<(), SubscriberError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for SubscriberFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
