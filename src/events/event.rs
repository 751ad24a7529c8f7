//! # Lifecycle events and their classification.
//!
//! The [`EventKind`] enum classifies what happened to an object:
//! - **Creation**: `Created`
//! - **Modification**: `Modified`, and `Copied` (a modification that also names the original)
//! - **Containment**: `Moved`, and its special cases `Added` and `Removed`
//!
//! The [`Event`] enum carries one record per kind. Kinds form a small hierarchy
//! (see [`EventKind::base`]); [`Event::provides`] follows it, so a subscriber
//! interested in moves also recognises additions and removals.
//!
//! ## Example
//! ```rust
//! use lifecycle_events::{Event, EventKind, ObjectCopiedEvent};
//!
//! let ev: Event<&str> = ObjectCopiedEvent::new("copy", "original").into();
//!
//! assert_eq!(ev.kind(), EventKind::Copied);
//! assert_eq!(*ev.object(), "copy");
//! assert!(ev.provides(EventKind::Modified));
//! assert!(!ev.provides(EventKind::Moved));
//! ```

use std::fmt;

use crate::descriptors::Interface;

use super::records::{
    ObjectAddedEvent, ObjectCopiedEvent, ObjectCreatedEvent, ObjectModifiedEvent,
    ObjectMovedEvent, ObjectRemovedEvent,
};

const MOVED_FIELDS: &[&str] = &["object", "old_parent", "old_name", "new_parent", "new_name"];

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An object has been created.
    ///
    /// Sets:
    /// - `object`: the new object
    Created,

    /// An object has been modified.
    ///
    /// Sets:
    /// - `object`: the modified object
    /// - `descriptions`: change descriptors (may be empty)
    Modified,

    /// An object has been copied. Extends `Modified`.
    ///
    /// Sets:
    /// - `object`: the copy
    /// - `descriptions`: empty
    /// - `original`: the object the copy was made from
    Copied,

    /// An object has moved within a containment hierarchy.
    ///
    /// Sets:
    /// - `object`: the moved object
    /// - `old_parent`, `old_name`: previous location (if any)
    /// - `new_parent`, `new_name`: new location (if any)
    Moved,

    /// An object has been added to a container. Extends `Moved`.
    ///
    /// `old_parent`/`old_name` are always `None`.
    Added,

    /// An object has been removed from a container. Extends `Moved`.
    ///
    /// `new_parent`/`new_name` are always `None`.
    Removed,
}

impl EventKind {
    /// All kinds, base kinds first.
    pub const ALL: [EventKind; 6] = [
        EventKind::Created,
        EventKind::Modified,
        EventKind::Copied,
        EventKind::Moved,
        EventKind::Added,
        EventKind::Removed,
    ];

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            EventKind::Created => "object_created",
            EventKind::Modified => "object_modified",
            EventKind::Copied => "object_copied",
            EventKind::Moved => "object_moved",
            EventKind::Added => "object_added",
            EventKind::Removed => "object_removed",
        }
    }

    /// The kind this one specialises, if any.
    ///
    /// Every kind is an object event; only the extra level is reported here.
    pub fn base(self) -> Option<EventKind> {
        match self {
            EventKind::Copied => Some(EventKind::Modified),
            EventKind::Added | EventKind::Removed => Some(EventKind::Moved),
            EventKind::Created | EventKind::Modified | EventKind::Moved => None,
        }
    }

    /// True if an event of this kind is also an event of `other`.
    pub fn provides(self, other: EventKind) -> bool {
        let mut cur = Some(self);
        while let Some(kind) = cur {
            if kind == other {
                return true;
            }
            cur = kind.base();
        }
        false
    }

    /// Field names every event of this kind exposes.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EventKind::Created => &["object"],
            EventKind::Modified => &["object", "descriptions"],
            EventKind::Copied => &["object", "descriptions", "original"],
            EventKind::Moved | EventKind::Added | EventKind::Removed => MOVED_FIELDS,
        }
    }

    /// This kind as a named schema, e.g. for [`Attributes`](crate::Attributes).
    pub fn interface(self) -> Interface {
        Interface::new(self.as_label()).with_fields(self.fields().iter().copied())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Contract shared by every event record.
pub trait ObjectEvent<O> {
    /// Kind of this record.
    const KIND: EventKind;

    /// The subject of the event.
    fn object(&self) -> &O;
}

/// A lifecycle event about a subject of type `O`.
#[derive(Clone, Debug, PartialEq)]
pub enum Event<O> {
    Created(ObjectCreatedEvent<O>),
    Modified(ObjectModifiedEvent<O>),
    Copied(ObjectCopiedEvent<O>),
    Moved(ObjectMovedEvent<O>),
    Added(ObjectAddedEvent<O>),
    Removed(ObjectRemovedEvent<O>),
}

impl<O> Event<O> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Created(_) => EventKind::Created,
            Event::Modified(_) => EventKind::Modified,
            Event::Copied(_) => EventKind::Copied,
            Event::Moved(_) => EventKind::Moved,
            Event::Added(_) => EventKind::Added,
            Event::Removed(_) => EventKind::Removed,
        }
    }

    /// The subject of the event.
    pub fn object(&self) -> &O {
        match self {
            Event::Created(e) => e.object(),
            Event::Modified(e) => e.object(),
            Event::Copied(e) => e.object(),
            Event::Moved(e) => e.object(),
            Event::Added(e) => e.object(),
            Event::Removed(e) => e.object(),
        }
    }

    /// True if this event is (a specialisation of) `kind`.
    #[inline]
    pub fn provides(&self, kind: EventKind) -> bool {
        self.kind().provides(kind)
    }

    /// Modification view: set for `Modified` and `Copied`.
    pub fn as_modified(&self) -> Option<&ObjectModifiedEvent<O>> {
        match self {
            Event::Modified(e) => Some(e),
            Event::Copied(e) => Some(e.as_modified()),
            _ => None,
        }
    }

    pub fn as_copied(&self) -> Option<&ObjectCopiedEvent<O>> {
        match self {
            Event::Copied(e) => Some(e),
            _ => None,
        }
    }

    /// Containment view: set for `Moved`, `Added` and `Removed`.
    pub fn as_moved(&self) -> Option<&ObjectMovedEvent<O>> {
        match self {
            Event::Moved(e) => Some(e),
            Event::Added(e) => Some(e.as_moved()),
            Event::Removed(e) => Some(e.as_moved()),
            _ => None,
        }
    }
}

macro_rules! impl_from_record {
    ($($record:ident => $variant:ident),* $(,)?) => {
        $(
            impl<O> From<$record<O>> for Event<O> {
                fn from(e: $record<O>) -> Self {
                    Event::$variant(e)
                }
            }
        )*
    };
}

impl_from_record! {
    ObjectCreatedEvent => Created,
    ObjectModifiedEvent => Modified,
    ObjectCopiedEvent => Copied,
    ObjectMovedEvent => Moved,
    ObjectAddedEvent => Added,
    ObjectRemovedEvent => Removed,
}
