//! # Named schemas.
//!
//! An [`Interface`] identifies the schema a set of changed attributes belongs
//! to. It carries a name and the list of fields the schema declares. Nothing
//! in this crate checks objects against it; it is metadata for subscribers.
//!
//! ## Example
//! ```rust
//! use lifecycle_events::Interface;
//!
//! let sample = Interface::new("sample").with_fields(["field1", "field2"]);
//! assert_eq!(sample.name(), "sample");
//! assert!(sample.declares("field2"));
//! assert!(!sample.declares("field3"));
//! ```

use std::borrow::Cow;
use std::fmt;

/// Named schema with its declared field names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interface {
    name: Cow<'static, str>,
    fields: Vec<Cow<'static, str>>,
}

impl Interface {
    /// Creates an interface that declares no fields.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Replaces the declared fields (order is kept as given).
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.as_ref())
    }

    /// True if `field` is one of the declared fields.
    pub fn declares(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
