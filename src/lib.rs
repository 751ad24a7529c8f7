//! # lifecycle-events
//!
//! **lifecycle-events** announces what happens to objects: they are created,
//! modified, copied, moved, added to a container or removed from one.
//!
//! Each announcement is a small immutable event record, published through a
//! [`Dispatcher`] that calls its subscribers synchronously, in registration
//! order. Modification events can carry change descriptors ([`Attributes`],
//! [`Sequence`]) naming which fields of which [`Interface`] changed.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   created(obj)   modified(obj, descs)   copied(obj, orig)   moved/added/removed(...)
//!        │                 │                     │                     │
//!        ▼                 ▼                     ▼                     ▼
//! ┌───────────────────────────────────────────────────────────────────────────┐
//! │  Dispatcher<O>                                                            │
//! │  - builds one Event<O> per call                                           │
//! │  - SubscriberSet<O> (ordered list of Arc<dyn Subscribe<O>>)               │
//! └─────────────────────────────────────┬─────────────────────────────────────┘
//!                                       ▼
//!                 S1.on_event() ──► S2.on_event() ──► ... ──► SN.on_event()
//!                      (same stack; first Err stops and is returned)
//! ```
//!
//! ### Event kinds
//! ```text
//! Created
//! Modified ──► Copied            (descriptions, original)
//! Moved    ──► Added / Removed   (old/new parent and name)
//! ```
//! Added and removed events fill a missing parent or name from the subject's
//! own [`Contained`] location.
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                          |
//! |-------------------|-------------------------------------------------------------|---------------------------------------------|
//! | **Events**        | Immutable records, one per lifecycle kind.                  | [`Event`], [`EventKind`], [`ObjectEvent`]   |
//! | **Descriptors**   | Which fields of which schema changed.                       | [`Attributes`], [`Sequence`], [`Interface`] |
//! | **Containment**   | Parent/name addressing with subject fallback.               | [`Contained`], [`Location`]                 |
//! | **Subscriber API**| Hook into lifecycle events; veto by returning an error.     | [`Subscribe`], [`SubscriberFn`]             |
//! | **Dispatching**   | Ordered synchronous fan-out and event helpers.              | [`Dispatcher`], [`SubscriberSet`]           |
//! | **Errors**        | Typed errors for subscribers and publishing.                | [`SubscriberError`], [`NotifyError`]        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` subscriber _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecycle_events::{
//!     Dispatcher, DispatcherConfig, Event, EventKind, Recorder, Subscribe, SubscriberError,
//!     SubscriberFn,
//! };
//!
//! let recorder = Arc::new(Recorder::<u64>::new());
//! let guard: Arc<dyn Subscribe<u64>> = SubscriberFn::arc("guard", |ev: &Event<u64>| {
//!     if ev.provides(EventKind::Moved) && *ev.object() == 0 {
//!         return Err(SubscriberError::vetoed("root cannot move"));
//!     }
//!     Ok(())
//! });
//!
//! let dispatcher = Dispatcher::builder(DispatcherConfig::named("catalog"))
//!     .with_subscriber(guard)
//!     .with_subscriber(recorder.clone())
//!     .build();
//!
//! dispatcher.created(1)?;
//! dispatcher.copied(2, 1)?;
//! assert!(dispatcher.moved(0, None, None, Some(1), Some("root".into())).is_err());
//!
//! assert_eq!(recorder.len(), 2);
//! # Ok::<(), lifecycle_events::NotifyError>(())
//! ```
mod descriptors;
mod dispatch;
mod error;
mod events;
mod notify;
mod subscribers;

// ---- Public re-exports ----

pub use descriptors::{Attributes, Description, Interface, Sequence};
pub use dispatch::{Dispatcher, DispatcherBuilder, DispatcherConfig};
pub use error::{NotifyError, SubscriberError};
pub use events::{
    Contained, Event, EventKind, Location, ObjectAddedEvent, ObjectCopiedEvent,
    ObjectCreatedEvent, ObjectEvent, ObjectModifiedEvent, ObjectMovedEvent, ObjectRemovedEvent,
};
pub use notify::{added, added_at, copied, created, modified, moved, removed, removed_at};
pub use subscribers::{Recorder, Subscribe, SubscriberFn, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
