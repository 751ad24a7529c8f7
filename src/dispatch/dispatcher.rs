//! # Dispatcher: builds lifecycle events and publishes them to subscribers.
//!
//! The [`Dispatcher`] owns a [`SubscriberSet`] and a [`DispatcherConfig`].
//! It replaces a process-wide subscriber list: whoever needs to announce a
//! lifecycle change holds (or borrows) a dispatcher and calls one of its helpers.
//!
//! ## Flow
//! ```text
//! created(obj) ──► ObjectCreatedEvent::new(obj) ──► publish(&Event)
//!                                                      │
//!                                                      ├─ debug!(kind, subscribers)
//!                                                      ▼
//!                                          SubscriberSet::emit(&Event)
//!                                             ├─ Ok        ─► Ok(())
//!                                             └─ Err(e)    ─► warn!(..) ─► Err(e)
//! ```
//!
//! ## Rules
//! - Each helper publishes exactly one event.
//! - Publishing is synchronous; it returns after the last subscriber ran.
//! - The first failing subscriber ends the publish and its error is returned.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecycle_events::{Attributes, Dispatcher, DispatcherConfig, Interface, Recorder};
//!
//! let recorder = Arc::new(Recorder::<&str>::new());
//! let dispatcher = Dispatcher::<&str>::builder(DispatcherConfig::default())
//!     .with_subscriber(recorder.clone())
//!     .build();
//!
//! let doc = Interface::new("document").with_fields(["title", "body"]);
//! dispatcher.modified("report", [Attributes::new(doc, ["title"])]).unwrap();
//!
//! let ev = recorder.last().unwrap();
//! assert_eq!(ev.as_modified().unwrap().descriptions().len(), 1);
//! ```

use std::sync::Arc;

use crate::descriptors::Description;
use crate::error::NotifyError;
use crate::events::{
    Contained, Event, Location, ObjectAddedEvent, ObjectCopiedEvent, ObjectCreatedEvent,
    ObjectModifiedEvent, ObjectMovedEvent, ObjectRemovedEvent,
};
use crate::subscribers::{Subscribe, SubscriberSet};

use super::builder::DispatcherBuilder;
use super::config::DispatcherConfig;

/// Publishes lifecycle events about `O` to an ordered set of subscribers.
pub struct Dispatcher<O> {
    cfg: DispatcherConfig,
    subscribers: SubscriberSet<O>,
}

impl<O> Dispatcher<O> {
    /// Creates a dispatcher with no subscribers.
    pub fn new(cfg: DispatcherConfig) -> Self {
        Self::with_subscribers(cfg, SubscriberSet::default())
    }

    pub(crate) fn with_subscribers(cfg: DispatcherConfig, subscribers: SubscriberSet<O>) -> Self {
        Self { cfg, subscribers }
    }

    /// Creates a builder for a dispatcher with initial subscribers.
    pub fn builder(cfg: DispatcherConfig) -> DispatcherBuilder<O> {
        DispatcherBuilder::new(cfg)
    }

    #[inline]
    pub fn config(&self) -> &DispatcherConfig {
        &self.cfg
    }

    /// Registers a subscriber after all existing ones.
    pub fn subscribe(&mut self, sub: Arc<dyn Subscribe<O>>) {
        tracing::debug!(
            dispatcher = %self.cfg.name,
            subscriber = sub.name(),
            "subscriber registered"
        );
        self.subscribers.push(sub);
    }

    #[inline]
    pub fn subscribers(&self) -> &SubscriberSet<O> {
        &self.subscribers
    }

    /// Installs `subs` and returns the previous subscribers.
    pub fn replace_subscribers(
        &mut self,
        subs: Vec<Arc<dyn Subscribe<O>>>,
    ) -> Vec<Arc<dyn Subscribe<O>>> {
        self.subscribers.replace(subs)
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Delivers `event` to every subscriber in registration order.
    pub fn publish(&self, event: &Event<O>) -> Result<(), NotifyError> {
        if self.cfg.trace_events {
            tracing::debug!(
                dispatcher = %self.cfg.name,
                kind = %event.kind(),
                subscribers = self.subscribers.len(),
                "publishing lifecycle event"
            );
        }

        self.subscribers.emit(event).inspect_err(|err| {
            tracing::warn!(
                dispatcher = %self.cfg.name,
                label = err.as_label(),
                error = %err,
                "lifecycle event rejected"
            );
        })
    }

    /// Wraps a record into an [`Event`] and publishes it.
    pub fn notify(&self, event: impl Into<Event<O>>) -> Result<(), NotifyError> {
        self.publish(&event.into())
    }

    /// Announces that `object` has been created.
    pub fn created(&self, object: O) -> Result<(), NotifyError> {
        self.notify(ObjectCreatedEvent::new(object))
    }

    /// Announces that `object` has been modified, described by `descriptions` (in order).
    pub fn modified<I>(&self, object: O, descriptions: I) -> Result<(), NotifyError>
    where
        I: IntoIterator,
        I::Item: Into<Description>,
    {
        self.notify(ObjectModifiedEvent::new(object, descriptions))
    }

    /// Announces that `object` has been copied from `original`.
    pub fn copied(&self, object: O, original: O) -> Result<(), NotifyError> {
        self.notify(ObjectCopiedEvent::new(object, original))
    }

    /// Announces that `object` moved from `(old_parent, old_name)` to `(new_parent, new_name)`.
    pub fn moved(
        &self,
        object: O,
        old_parent: Option<O>,
        old_name: Option<Arc<str>>,
        new_parent: Option<O>,
        new_name: Option<Arc<str>>,
    ) -> Result<(), NotifyError> {
        self.notify(ObjectMovedEvent::new(
            object, old_parent, old_name, new_parent, new_name,
        ))
    }

    /// Announces that `object` has been added at exactly `new`.
    pub fn added_at(&self, object: O, new: Location<O>) -> Result<(), NotifyError> {
        self.notify(ObjectAddedEvent::at(object, new))
    }

    /// Announces that `object` has been removed from exactly `old`.
    pub fn removed_at(&self, object: O, old: Location<O>) -> Result<(), NotifyError> {
        self.notify(ObjectRemovedEvent::at(object, old))
    }
}

impl<O: Contained> Dispatcher<O> {
    /// Announces that `object` has been added; missing parts default to its own location.
    pub fn added(
        &self,
        object: O,
        new_parent: Option<O>,
        new_name: Option<Arc<str>>,
    ) -> Result<(), NotifyError> {
        self.notify(ObjectAddedEvent::new(object, new_parent, new_name))
    }

    /// Announces that `object` has been removed; missing parts default to its own location.
    pub fn removed(
        &self,
        object: O,
        old_parent: Option<O>,
        old_name: Option<Arc<str>>,
    ) -> Result<(), NotifyError> {
        self.notify(ObjectRemovedEvent::new(object, old_parent, old_name))
    }
}

impl<O> Default for Dispatcher<O> {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

impl<O> std::fmt::Debug for Dispatcher<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("cfg", &self.cfg)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::descriptors::{Attributes, Interface, Sequence};
    use crate::error::SubscriberError;
    use crate::events::{EventKind, ObjectEvent};
    use crate::subscribers::{Recorder, SubscriberFn};

    fn recording() -> (Dispatcher<u32>, Arc<Recorder<u32>>) {
        let recorder: Arc<Recorder<u32>> = Arc::new(Recorder::new());
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(DispatcherConfig::named("test"));
        dispatcher.subscribe(recorder.clone());
        (dispatcher, recorder)
    }

    #[test]
    fn test_created_publishes_one_event() {
        let (dispatcher, recorder) = recording();
        dispatcher.created(42).unwrap();

        assert_eq!(recorder.len(), 1);
        let ev = recorder.last().unwrap();
        assert_eq!(ev.kind(), EventKind::Created);
        assert_eq!(*ev.object(), 42);
    }

    #[test]
    fn test_modified_keeps_descriptions_in_order() {
        let (dispatcher, recorder) = recording();
        let sample = Interface::new("sample").with_fields(["field"]);
        let attrs = Attributes::new(sample.clone(), ["field"]);
        let seq = Sequence::new(sample, ["b", "a"]);

        let descriptions = [
            Description::from(attrs.clone()),
            Description::from(seq.clone()),
        ];
        dispatcher.modified(1, descriptions).unwrap();

        let ev = recorder.last().unwrap();
        let modified = ev.as_modified().unwrap();
        assert_eq!(*modified.object(), 1);
        assert_eq!(
            modified.descriptions(),
            &[Description::from(attrs), Description::from(seq)]
        );
    }

    #[test]
    fn test_modified_without_descriptions() {
        let (dispatcher, recorder) = recording();
        dispatcher.modified(1, Vec::<Attributes>::new()).unwrap();

        let ev = recorder.last().unwrap();
        assert!(ev.as_modified().unwrap().descriptions().is_empty());
    }

    #[test]
    fn test_copied_publishes_object_and_original() {
        let (dispatcher, recorder) = recording();
        dispatcher.copied(2, 1).unwrap();

        assert_eq!(recorder.len(), 1);
        let ev = recorder.last().unwrap();
        let copied = ev.as_copied().unwrap();
        assert_eq!(*copied.object(), 2);
        assert_eq!(*copied.original(), 1);
        assert!(ev.provides(EventKind::Modified));
    }

    #[test]
    fn test_moved_publishes_locations() {
        let (dispatcher, recorder) = recording();
        dispatcher
            .moved(1, Some(10), Some("a".into()), Some(20), Some("b".into()))
            .unwrap();

        let ev = recorder.last().unwrap();
        let moved = ev.as_moved().unwrap();
        assert_eq!(moved.old_parent(), Some(&10));
        assert_eq!(moved.new_name(), Some("b"));
    }

    #[test]
    fn test_added_and_removed_at_explicit_location() {
        let (dispatcher, recorder) = recording();
        dispatcher
            .added_at(1, Location::new(Some(2), Some("n".into())))
            .unwrap();
        dispatcher
            .removed_at(1, Location::new(Some(2), Some("n".into())))
            .unwrap();

        let events = recorder.events();
        assert_eq!(events[0].kind(), EventKind::Added);
        assert_eq!(events[0].as_moved().unwrap().new_parent(), Some(&2));
        assert!(events[0].as_moved().unwrap().old_location().is_nowhere());
        assert_eq!(events[1].kind(), EventKind::Removed);
        assert_eq!(events[1].as_moved().unwrap().old_name(), Some("n"));
        assert!(events[1].as_moved().unwrap().new_location().is_nowhere());
    }

    #[test]
    fn test_failure_propagates_and_stops_later_subscribers() {
        let recorder = Arc::new(Recorder::<u32>::new());
        let dispatcher = Dispatcher::<u32>::builder(DispatcherConfig::default())
            .with_subscriber(SubscriberFn::arc("gate", |_ev: &Event<u32>| {
                Err(SubscriberError::vetoed("frozen"))
            }))
            .with_subscriber(recorder.clone())
            .build();

        let err = dispatcher.created(1).unwrap_err();
        assert!(err.is_veto());
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_subscriber_may_publish_while_handling() {
        let recorder = Arc::new(Recorder::<u32>::new());
        let inner = Rc::new(RefCell::new(Dispatcher::<u32>::new(
            DispatcherConfig::named("inner"),
        )));
        inner.borrow_mut().subscribe(recorder.clone());

        let relay = Rc::clone(&inner);
        let sub = RelayCopies { inner: relay };
        let mut outer: Dispatcher<u32> = Dispatcher::new(DispatcherConfig::named("outer"));
        outer.subscribe(Arc::new(sub));
        outer.subscribe(recorder.clone());

        outer.copied(2, 1).unwrap();

        let kinds: Vec<_> = recorder.events().iter().map(Event::kind).collect();
        assert_eq!(kinds, vec![EventKind::Created, EventKind::Copied]);
    }

    struct RelayCopies {
        inner: Rc<RefCell<Dispatcher<u32>>>,
    }

    impl Subscribe<u32> for RelayCopies {
        fn on_event(&self, event: &Event<u32>) -> Result<(), SubscriberError> {
            if let Some(copied) = event.as_copied() {
                self.inner
                    .borrow()
                    .created(*copied.object())
                    .map_err(|e| SubscriberError::fail(e.as_message()))?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_replace_subscribers_restores_previous() {
        let (mut dispatcher, recorder) = recording();
        let other = Arc::new(Recorder::<u32>::new());

        let saved = dispatcher.replace_subscribers(vec![other.clone() as Arc<dyn Subscribe<u32>>]);
        dispatcher.created(1).unwrap();
        dispatcher.replace_subscribers(saved);
        dispatcher.created(2).unwrap();

        assert_eq!(other.len(), 1);
        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.last().map(|e| *e.object()), Some(2));
    }

    #[test]
    fn test_clear_subscribers() {
        let (mut dispatcher, recorder) = recording();
        dispatcher.clear_subscribers();
        dispatcher.created(1).unwrap();
        assert!(recorder.is_empty());
        assert!(dispatcher.subscribers().is_empty());
    }
}
