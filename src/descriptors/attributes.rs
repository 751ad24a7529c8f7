//! # Attribute and sequence descriptors.
//!
//! [`Attributes`] names the attributes of an interface that changed.
//! [`Sequence`] is the sequence-shaped variant: it keeps the interface and
//! carries its own ordered `keys`, separate from the attribute list.
//!
//! ## Example
//! ```rust
//! use lifecycle_events::{Attributes, Description, EventKind, Sequence};
//!
//! let moved = Attributes::new(EventKind::Moved.interface(), ["new_name", "new_parent"]);
//! assert_eq!(moved.attributes().collect::<Vec<_>>(), vec!["new_name", "new_parent"]);
//!
//! let order = Sequence::new(EventKind::Moved.interface(), ["a", "b"]);
//! assert_eq!(order.keys().collect::<Vec<_>>(), vec!["a", "b"]);
//! assert_eq!(order.attributes().count(), 0);
//!
//! let d: Description = order.into();
//! assert_eq!(d.interface().name(), "object_moved");
//! ```

use std::sync::Arc;

use super::Interface;

fn collect_names<I, S>(names: I) -> Vec<Arc<str>>
where
    I: IntoIterator<Item = S>,
    S: Into<Arc<str>>,
{
    names.into_iter().map(Into::into).collect()
}

/// Attributes of `interface` that were changed.
///
/// Names are stored exactly as given: order is kept, duplicates are not removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attributes {
    interface: Interface,
    attributes: Vec<Arc<str>>,
}

impl Attributes {
    pub fn new<I, S>(interface: Interface, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            interface,
            attributes: collect_names(attributes),
        }
    }

    #[inline]
    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Changed attribute names, in the order given at construction.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.as_ref())
    }
}

/// Ordered key sequence of `interface` that changed.
///
/// The inherited attribute list is always empty; `keys` is the payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence {
    base: Attributes,
    keys: Vec<Arc<str>>,
}

impl Sequence {
    pub fn new<I, S>(interface: Interface, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            base: Attributes {
                interface,
                attributes: Vec::new(),
            },
            keys: collect_names(keys),
        }
    }

    #[inline]
    pub fn interface(&self) -> &Interface {
        self.base.interface()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_ref())
    }

    /// Always empty for a sequence descriptor.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.base.attributes()
    }
}

/// One change descriptor, as aggregated by a modification event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Description {
    Attributes(Attributes),
    Sequence(Sequence),
}

impl Description {
    /// Interface the described change belongs to.
    pub fn interface(&self) -> &Interface {
        match self {
            Description::Attributes(a) => a.interface(),
            Description::Sequence(s) => s.interface(),
        }
    }

    #[inline]
    pub fn as_attributes(&self) -> Option<&Attributes> {
        match self {
            Description::Attributes(a) => Some(a),
            Description::Sequence(_) => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Description::Sequence(s) => Some(s),
            Description::Attributes(_) => None,
        }
    }
}

impl From<Attributes> for Description {
    fn from(a: Attributes) -> Self {
        Description::Attributes(a)
    }
}

impl From<Sequence> for Description {
    fn from(s: Sequence) -> Self {
        Description::Sequence(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    fn sample() -> Interface {
        Interface::new("sample").with_fields(["field1", "field2", "field3"])
    }

    #[test]
    fn test_sequence_keeps_interface_and_keys() {
        let desc = Sequence::new(sample(), ["field1", "field2"]);
        assert_eq!(desc.interface(), &sample());
        assert_eq!(desc.keys().collect::<Vec<_>>(), vec!["field1", "field2"]);
    }

    #[test]
    fn test_sequence_attributes_stay_empty() {
        let desc = Sequence::new(sample(), ["field1"]);
        assert_eq!(desc.attributes().count(), 0);
    }

    #[test]
    fn test_attributes_keep_interface_and_names() {
        let desc = Attributes::new(EventKind::Moved.interface(), ["new_name", "new_parent"]);
        assert_eq!(desc.interface(), &EventKind::Moved.interface());
        assert_eq!(
            desc.attributes().collect::<Vec<_>>(),
            vec!["new_name", "new_parent"]
        );
    }

    #[test]
    fn test_attributes_keep_duplicates() {
        let desc = Attributes::new(sample(), ["field1", "field1"]);
        assert_eq!(
            desc.attributes().collect::<Vec<_>>(),
            vec!["field1", "field1"]
        );
    }

    #[test]
    fn test_description_dispatches_to_variant() {
        let attrs: Description = Attributes::new(sample(), ["field1"]).into();
        let seq: Description = Sequence::new(sample(), ["field2"]).into();

        assert!(attrs.as_attributes().is_some());
        assert!(attrs.as_sequence().is_none());
        assert!(seq.as_sequence().is_some());
        assert_eq!(attrs.interface(), seq.interface());
    }
}
