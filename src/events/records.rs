//! # Event records.
//!
//! One immutable record per [`EventKind`]. Records own their subject (and any
//! parent/original objects) by value; pass a cheap handle such as `Arc<T>` or
//! an id as `O` when subjects are large.
//!
//! Specialised records wrap their base record and dereference to it:
//! ```text
//! ObjectCopiedEvent  ──deref──► ObjectModifiedEvent
//! ObjectAddedEvent   ──deref──► ObjectMovedEvent
//! ObjectRemovedEvent ──deref──► ObjectMovedEvent
//! ```

use std::ops::Deref;
use std::sync::Arc;

use crate::descriptors::Description;

use super::event::{EventKind, ObjectEvent};
use super::location::{Contained, Location};

/// An object has been created.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectCreatedEvent<O> {
    object: O,
}

impl<O> ObjectCreatedEvent<O> {
    pub fn new(object: O) -> Self {
        Self { object }
    }
}

impl<O> ObjectEvent<O> for ObjectCreatedEvent<O> {
    const KIND: EventKind = EventKind::Created;

    fn object(&self) -> &O {
        &self.object
    }
}

/// An object has been modified.
///
/// Descriptors are opaque to the event; they are kept in the given order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectModifiedEvent<O> {
    object: O,
    descriptions: Vec<Description>,
}

impl<O> ObjectModifiedEvent<O> {
    pub fn new<I>(object: O, descriptions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Description>,
    {
        Self {
            object,
            descriptions: descriptions.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn descriptions(&self) -> &[Description] {
        &self.descriptions
    }
}

impl<O> ObjectEvent<O> for ObjectModifiedEvent<O> {
    const KIND: EventKind = EventKind::Modified;

    fn object(&self) -> &O {
        &self.object
    }
}

/// An object has been copied from `original`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectCopiedEvent<O> {
    modified: ObjectModifiedEvent<O>,
    original: O,
}

impl<O> ObjectCopiedEvent<O> {
    pub fn new(object: O, original: O) -> Self {
        Self {
            modified: ObjectModifiedEvent {
                object,
                descriptions: Vec::new(),
            },
            original,
        }
    }

    #[inline]
    pub fn original(&self) -> &O {
        &self.original
    }

    #[inline]
    pub fn as_modified(&self) -> &ObjectModifiedEvent<O> {
        &self.modified
    }
}

impl<O> ObjectEvent<O> for ObjectCopiedEvent<O> {
    const KIND: EventKind = EventKind::Copied;

    fn object(&self) -> &O {
        &self.modified.object
    }
}

impl<O> Deref for ObjectCopiedEvent<O> {
    type Target = ObjectModifiedEvent<O>;

    fn deref(&self) -> &Self::Target {
        &self.modified
    }
}

/// An object has moved from one `(parent, name)` location to another.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMovedEvent<O> {
    object: O,
    old: Location<O>,
    new: Location<O>,
}

impl<O> ObjectMovedEvent<O> {
    pub fn new(
        object: O,
        old_parent: Option<O>,
        old_name: Option<Arc<str>>,
        new_parent: Option<O>,
        new_name: Option<Arc<str>>,
    ) -> Self {
        Self::between(
            object,
            Location::new(old_parent, old_name),
            Location::new(new_parent, new_name),
        )
    }

    /// Same as [`ObjectMovedEvent::new`] with both ends given as [`Location`]s.
    pub fn between(object: O, old: Location<O>, new: Location<O>) -> Self {
        Self { object, old, new }
    }

    #[inline]
    pub fn old_parent(&self) -> Option<&O> {
        self.old.parent.as_ref()
    }

    #[inline]
    pub fn old_name(&self) -> Option<&str> {
        self.old.name.as_deref()
    }

    #[inline]
    pub fn new_parent(&self) -> Option<&O> {
        self.new.parent.as_ref()
    }

    #[inline]
    pub fn new_name(&self) -> Option<&str> {
        self.new.name.as_deref()
    }

    #[inline]
    pub fn old_location(&self) -> &Location<O> {
        &self.old
    }

    #[inline]
    pub fn new_location(&self) -> &Location<O> {
        &self.new
    }
}

impl<O> ObjectEvent<O> for ObjectMovedEvent<O> {
    const KIND: EventKind = EventKind::Moved;

    fn object(&self) -> &O {
        &self.object
    }
}

/// An object has been added to a container.
///
/// The old location is always empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectAddedEvent<O>(ObjectMovedEvent<O>);

impl<O: Contained> ObjectAddedEvent<O> {
    /// Missing `new_parent`/`new_name` are taken from the object's own containment.
    pub fn new(object: O, new_parent: Option<O>, new_name: Option<Arc<str>>) -> Self {
        let new = Location::new(new_parent, new_name).resolve(&object);
        Self::at(object, new)
    }
}

impl<O> ObjectAddedEvent<O> {
    /// Added at exactly `new`; nothing is read from the object.
    pub fn at(object: O, new: Location<O>) -> Self {
        Self(ObjectMovedEvent::between(object, Location::nowhere(), new))
    }

    #[inline]
    pub fn as_moved(&self) -> &ObjectMovedEvent<O> {
        &self.0
    }
}

/// An object has been removed from a container.
///
/// The new location is always empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRemovedEvent<O>(ObjectMovedEvent<O>);

impl<O: Contained> ObjectRemovedEvent<O> {
    /// Missing `old_parent`/`old_name` are taken from the object's own containment.
    pub fn new(object: O, old_parent: Option<O>, old_name: Option<Arc<str>>) -> Self {
        let old = Location::new(old_parent, old_name).resolve(&object);
        Self::at(object, old)
    }
}

impl<O> ObjectRemovedEvent<O> {
    /// Removed from exactly `old`; nothing is read from the object.
    pub fn at(object: O, old: Location<O>) -> Self {
        Self(ObjectMovedEvent::between(object, old, Location::nowhere()))
    }

    #[inline]
    pub fn as_moved(&self) -> &ObjectMovedEvent<O> {
        &self.0
    }
}

macro_rules! impl_moved_specialisation {
    ($($record:ident => $kind:ident),* $(,)?) => {
        $(
            impl<O> ObjectEvent<O> for $record<O> {
                const KIND: EventKind = EventKind::$kind;

                fn object(&self) -> &O {
                    &self.0.object
                }
            }

            impl<O> Deref for $record<O> {
                type Target = ObjectMovedEvent<O>;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl<O> From<$record<O>> for ObjectMovedEvent<O> {
                fn from(e: $record<O>) -> Self {
                    e.0
                }
            }
        )*
    };
}

impl_moved_specialisation! {
    ObjectAddedEvent => Added,
    ObjectRemovedEvent => Removed,
}
