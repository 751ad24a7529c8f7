//! # Stateful subscriber that records every event it sees.
//!
//! [`Recorder`] appends a clone of each delivered event to an in-memory list.
//! It is the usual listener in tests: register it, run the code under test,
//! then inspect what was published.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecycle_events::{Dispatcher, DispatcherConfig, EventKind, Recorder};
//!
//! let recorder = Arc::new(Recorder::<u32>::new());
//! let mut dispatcher: Dispatcher<u32> = Dispatcher::new(DispatcherConfig::default());
//! dispatcher.subscribe(recorder.clone());
//!
//! dispatcher.created(7).unwrap();
//! assert_eq!(recorder.len(), 1);
//! assert_eq!(recorder.last().map(|e| e.kind()), Some(EventKind::Created));
//! ```

use parking_lot::Mutex;

use crate::error::SubscriberError;
use crate::events::Event;

use super::Subscribe;

/// Records delivered events in arrival order.
#[derive(Debug)]
pub struct Recorder<O> {
    events: Mutex<Vec<Event<O>>>,
}

impl<O> Recorder<O> {
    /// Creates a new, empty recorder.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Event<O>> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl<O: Clone> Recorder<O> {
    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<Event<O>> {
        self.events.lock().clone()
    }

    /// Most recently recorded event.
    pub fn last(&self) -> Option<Event<O>> {
        self.events.lock().last().cloned()
    }
}

impl<O> Default for Recorder<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Clone> Subscribe<O> for Recorder<O> {
    fn on_event(&self, event: &Event<O>) -> Result<(), SubscriberError> {
        self.events.lock().push(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recorder"
    }
}
