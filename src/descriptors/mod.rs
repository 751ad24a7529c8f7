//! Change descriptors attached to modification events.
//!
//! A descriptor says *which* named fields of an object changed, scoped to the
//! [`Interface`] (schema) those fields belong to.
//!
//! ## Contents
//! - [`Interface`] named schema with its declared fields
//! - [`Attributes`] a set of changed attribute names
//! - [`Sequence`] an ordered key sequence (e.g. a reordering change)
//! - [`Description`] either of the above, as stored by
//!   [`ObjectModifiedEvent`](crate::ObjectModifiedEvent)

mod attributes;
mod interface;

pub use attributes::{Attributes, Description, Sequence};
pub use interface::Interface;
