//! Free-function helpers that announce lifecycle changes through a dispatcher.
//!
//! Each helper builds exactly one event and publishes it via
//! [`Dispatcher::publish`]; they are shorthands for the dispatcher methods of
//! the same name, handy where the dispatcher is passed around by reference.
//!
//! ```rust
//! use std::sync::Arc;
//! use lifecycle_events::{copied, created, Dispatcher, EventKind, Recorder};
//!
//! let recorder = Arc::new(Recorder::<u8>::new());
//! let mut dispatcher = Dispatcher::<u8>::default();
//! dispatcher.subscribe(recorder.clone());
//!
//! created(&dispatcher, 1).unwrap();
//! copied(&dispatcher, 2, 1).unwrap();
//!
//! let kinds: Vec<_> = recorder.events().iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, [EventKind::Created, EventKind::Copied]);
//! ```

use std::sync::Arc;

use crate::descriptors::Description;
use crate::dispatch::Dispatcher;
use crate::error::NotifyError;
use crate::events::{Contained, Location};

/// Publishes an `ObjectCreatedEvent` for `object`.
pub fn created<O>(dispatcher: &Dispatcher<O>, object: O) -> Result<(), NotifyError> {
    dispatcher.created(object)
}

/// Publishes an `ObjectModifiedEvent` for `object` carrying `descriptions` in order.
pub fn modified<O, I>(
    dispatcher: &Dispatcher<O>,
    object: O,
    descriptions: I,
) -> Result<(), NotifyError>
where
    I: IntoIterator,
    I::Item: Into<Description>,
{
    dispatcher.modified(object, descriptions)
}

/// Publishes an `ObjectCopiedEvent` for `object` copied from `original`.
pub fn copied<O>(dispatcher: &Dispatcher<O>, object: O, original: O) -> Result<(), NotifyError> {
    dispatcher.copied(object, original)
}

/// Publishes an `ObjectMovedEvent`.
pub fn moved<O>(
    dispatcher: &Dispatcher<O>,
    object: O,
    old_parent: Option<O>,
    old_name: Option<Arc<str>>,
    new_parent: Option<O>,
    new_name: Option<Arc<str>>,
) -> Result<(), NotifyError> {
    dispatcher.moved(object, old_parent, old_name, new_parent, new_name)
}

/// Publishes an `ObjectAddedEvent`; missing parts default to the object's own location.
pub fn added<O: Contained>(
    dispatcher: &Dispatcher<O>,
    object: O,
    new_parent: Option<O>,
    new_name: Option<Arc<str>>,
) -> Result<(), NotifyError> {
    dispatcher.added(object, new_parent, new_name)
}

/// Publishes an `ObjectRemovedEvent`; missing parts default to the object's own location.
pub fn removed<O: Contained>(
    dispatcher: &Dispatcher<O>,
    object: O,
    old_parent: Option<O>,
    old_name: Option<Arc<str>>,
) -> Result<(), NotifyError> {
    dispatcher.removed(object, old_parent, old_name)
}

/// Publishes an `ObjectAddedEvent` at exactly `new`; works for any subject type.
pub fn added_at<O>(
    dispatcher: &Dispatcher<O>,
    object: O,
    new: Location<O>,
) -> Result<(), NotifyError> {
    dispatcher.added_at(object, new)
}

/// Publishes an `ObjectRemovedEvent` from exactly `old`; works for any subject type.
pub fn removed_at<O>(
    dispatcher: &Dispatcher<O>,
    object: O,
    old: Location<O>,
) -> Result<(), NotifyError> {
    dispatcher.removed_at(object, old)
}
