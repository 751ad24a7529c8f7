//! # SubscriberSet: ordered synchronous fan-out
//!
//! [`SubscriberSet`] delivers each [`Event`](crate::Event) to every subscriber,
//! one after another, in registration order.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns only after every subscriber ran (or one failed).
//! - Global ordering: subscriber N sees the event before subscriber N+1.
//! - The first `Err` stops delivery and is returned to the caller.
//!
//! ## What it does **not** do
//! - No isolation: a failing or panicking subscriber affects the publisher.
//! - No retries, no queues, no threads.
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        │
//!        ├──► S1.on_event() ── Ok ──┐
//!        │                          ▼
//!        ├──► S2.on_event() ── Err ─► NotifyError::Subscriber { index: 1, .. }
//!        │                           (S3..SN not called)
//!        └──► SN.on_event()
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::NotifyError;
use crate::events::Event;

use super::Subscribe;

/// Ordered list of subscribers for events about `O`.
pub struct SubscriberSet<O> {
    subscribers: Vec<Arc<dyn Subscribe<O>>>,
}

impl<O> SubscriberSet<O> {
    /// Creates a set that calls `subs` in the given order.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe<O>>>) -> Self {
        Self { subscribers: subs }
    }

    /// Appends a subscriber; it is called after all existing ones.
    pub fn push(&mut self, sub: Arc<dyn Subscribe<O>>) {
        self.subscribers.push(sub);
    }

    /// Removes every subscriber.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Installs `subs` and returns the previous list, e.g. to restore it later.
    pub fn replace(&mut self, subs: Vec<Arc<dyn Subscribe<O>>>) -> Vec<Arc<dyn Subscribe<O>>> {
        std::mem::replace(&mut self.subscribers, subs)
    }

    /// Delivers `event` to every subscriber in order, stopping at the first failure.
    pub fn emit(&self, event: &Event<O>) -> Result<(), NotifyError> {
        for (index, sub) in self.subscribers.iter().enumerate() {
            sub.on_event(event)
                .map_err(|source| NotifyError::Subscriber {
                    subscriber: sub.name().to_owned(),
                    index,
                    kind: event.kind(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Subscriber names in call order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subscribers.iter().map(|s| s.name())
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}

impl<O> Default for SubscriberSet<O> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<O> Clone for SubscriberSet<O> {
    fn clone(&self) -> Self {
        Self::new(self.subscribers.clone())
    }
}

impl<O> fmt::Debug for SubscriberSet<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::error::SubscriberError;
    use crate::events::{EventKind, ObjectCreatedEvent};
    use crate::subscribers::SubscriberFn;

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn tagging(tag: &'static str, log: &Log) -> Arc<dyn Subscribe<u32>> {
        let log = Arc::clone(log);
        SubscriberFn::arc(tag, move |_ev: &Event<u32>| {
            log.lock().push(tag);
            Ok(())
        })
    }

    fn failing(tag: &'static str) -> Arc<dyn Subscribe<u32>> {
        SubscriberFn::arc(tag, |_ev: &Event<u32>| Err(SubscriberError::fail("boom")))
    }

    fn created(n: u32) -> Event<u32> {
        ObjectCreatedEvent::new(n).into()
    }

    #[test]
    fn test_emit_calls_in_registration_order() {
        let log = Log::default();
        let set = SubscriberSet::new(vec![
            tagging("a", &log),
            tagging("b", &log),
            tagging("c", &log),
        ]);

        set.emit(&created(1)).unwrap();
        assert_eq!(*log.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_first_failure_stops_fan_out() {
        let log = Log::default();
        let set = SubscriberSet::new(vec![
            tagging("a", &log),
            failing("bad"),
            tagging("c", &log),
        ]);

        let err = set.emit(&created(1)).unwrap_err();
        assert_eq!(*log.lock(), vec!["a"]);
        match err {
            NotifyError::Subscriber { subscriber, index, kind, source } => {
                assert_eq!(subscriber, "bad");
                assert_eq!(index, 1);
                assert_eq!(kind, EventKind::Created);
                assert_eq!(source, SubscriberError::fail("boom"));
            }
        }
    }

    #[test]
    fn test_empty_set_is_ok() {
        let set = SubscriberSet::<u32>::default();
        assert!(set.is_empty());
        assert!(set.emit(&created(1)).is_ok());
    }

    #[test]
    fn test_replace_returns_previous_list() {
        let log = Log::default();
        let mut set = SubscriberSet::new(vec![tagging("old", &log)]);

        let saved = set.replace(vec![tagging("new", &log)]);
        set.emit(&created(1)).unwrap();
        set.replace(saved);
        set.emit(&created(2)).unwrap();

        assert_eq!(*log.lock(), vec!["new", "old"]);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["old"]);
    }

    #[test]
    fn test_push_appends_and_clear_empties() {
        let log = Log::default();
        let mut set = SubscriberSet::default();
        set.push(tagging("a", &log));
        set.push(tagging("b", &log));
        assert_eq!(set.len(), 2);
        assert_eq!(format!("{set:?}"), r#"["a", "b"]"#);

        set.clear();
        set.emit(&created(1)).unwrap();
        assert!(log.lock().is_empty());
    }
}
