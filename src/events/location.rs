//! # Containment locations.
//!
//! Objects that live in a parent/name hierarchy implement [`Contained`].
//! A [`Location`] is one `(parent, name)` address; either part may be missing.
//!
//! ## Fallback rule
//! Added and removed events may be built without an explicit parent or name.
//! [`Location::resolve`] fills each missing part from the subject's own
//! current containment, independently:
//! ```text
//! explicit parent ─ Some ─► kept
//!                 └ None ─► subject.parent()
//! explicit name   ─ Some ─► kept
//!                 └ None ─► subject.name()
//! ```

use std::sync::Arc;

/// An object addressed by its parent and its name within that parent.
pub trait Contained: Sized {
    /// The object's current container, if it has one.
    fn parent(&self) -> Option<Self>;

    /// The object's name within its container, if it has one.
    fn name(&self) -> Option<Arc<str>>;
}

/// A `(parent, name)` address in a containment hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location<O> {
    pub parent: Option<O>,
    pub name: Option<Arc<str>>,
}

impl<O> Location<O> {
    pub fn new(parent: Option<O>, name: Option<Arc<str>>) -> Self {
        Self { parent, name }
    }

    /// No parent, no name.
    pub fn nowhere() -> Self {
        Self {
            parent: None,
            name: None,
        }
    }

    #[inline]
    pub fn is_nowhere(&self) -> bool {
        self.parent.is_none() && self.name.is_none()
    }
}

impl<O: Contained> Location<O> {
    /// Current location of `subject`.
    pub fn of(subject: &O) -> Self {
        Self {
            parent: subject.parent(),
            name: subject.name(),
        }
    }

    /// Keeps the parts that are set and takes missing ones from `subject`.
    pub fn resolve(self, subject: &O) -> Self {
        Self {
            parent: self.parent.or_else(|| subject.parent()),
            name: self.name.or_else(|| subject.name()),
        }
    }
}

impl<O> Default for Location<O> {
    fn default() -> Self {
        Self::nowhere()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Node {
        id: u32,
        parent: Option<Box<Node>>,
        name: Option<&'static str>,
    }

    impl Contained for Node {
        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }

        fn name(&self) -> Option<Arc<str>> {
            self.name.map(Arc::from)
        }
    }

    fn root() -> Node {
        Node {
            id: 0,
            parent: None,
            name: None,
        }
    }

    fn child() -> Node {
        Node {
            id: 1,
            parent: Some(Box::new(root())),
            name: Some("child"),
        }
    }

    #[test]
    fn test_resolve_fills_missing_parts_from_subject() {
        let loc = Location::nowhere().resolve(&child());
        assert_eq!(loc.parent.map(|p| p.id), Some(0));
        assert_eq!(loc.name.as_deref(), Some("child"));
    }

    #[test]
    fn test_resolve_keeps_explicit_parts() {
        let other = Node {
            id: 7,
            parent: None,
            name: None,
        };
        let loc = Location::new(Some(other), None).resolve(&child());
        assert_eq!(loc.parent.map(|p| p.id), Some(7));
        assert_eq!(loc.name.as_deref(), Some("child"));

        let loc = Location::new(None, Some("renamed".into())).resolve(&child());
        assert_eq!(loc.parent.map(|p| p.id), Some(0));
        assert_eq!(loc.name.as_deref(), Some("renamed"));
    }

    #[test]
    fn test_uncontained_subject_stays_nowhere() {
        assert!(Location::nowhere().resolve(&root()).is_nowhere());
        assert!(Location::of(&root()).is_nowhere());
    }
}
