//! Lifecycle events: classification, records and containment.
//!
//! This module groups the event **data model**: what can happen to an object,
//! the record carried for each kind, and the parent/name addressing used by
//! containment events.
//!
//! ## Contents
//! - [`EventKind`], [`Event`], [`ObjectEvent`] classification and the event enum
//! - `ObjectCreatedEvent` .. `ObjectRemovedEvent` one immutable record per kind
//! - [`Contained`], [`Location`] parent/name addressing and the fallback rule
//!
//! ## Hierarchy
//! ```text
//! object event
//!   ├── Created
//!   ├── Modified ──► Copied
//!   └── Moved ─────► Added
//!              └───► Removed
//! ```

mod event;
mod location;
mod records;

pub use event::{Event, EventKind, ObjectEvent};
pub use location::{Contained, Location};
pub use records::{
    ObjectAddedEvent, ObjectCopiedEvent, ObjectCreatedEvent, ObjectModifiedEvent,
    ObjectMovedEvent, ObjectRemovedEvent,
};
