//! # LogWriter — simple event logger
//!
//! A minimal subscriber that writes incoming [`Event`]s to `tracing` at `INFO`.
//! Use it for tests or demos; it never fails.
//!
//! ## Example output
//! ```text
//! INFO lifecycle_events: created object=Doc(1)
//! INFO lifecycle_events: modified object=Doc(1) descriptions=1
//! INFO lifecycle_events: copied object=Doc(2) original=Doc(1)
//! INFO lifecycle_events: moved object=Doc(1) old_parent=Some(Folder(1)) old_name=Some("a") new_parent=Some(Folder(2)) new_name=Some("b")
//! ```

use std::fmt::Debug;

use crate::error::SubscriberError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<O: Debug> Subscribe<O> for LogWriter {
    fn on_event(&self, e: &Event<O>) -> Result<(), SubscriberError> {
        match e {
            Event::Created(_) => {
                tracing::info!(object = ?e.object(), "created");
            }
            Event::Modified(ev) => {
                tracing::info!(
                    object = ?e.object(),
                    descriptions = ev.descriptions().len(),
                    "modified"
                );
            }
            Event::Copied(ev) => {
                tracing::info!(object = ?e.object(), original = ?ev.original(), "copied");
            }
            Event::Moved(_) | Event::Added(_) | Event::Removed(_) => {
                if let Some(ev) = e.as_moved() {
                    tracing::info!(
                        kind = e.kind().as_label(),
                        object = ?e.object(),
                        old_parent = ?ev.old_parent(),
                        old_name = ?ev.old_name(),
                        new_parent = ?ev.new_parent(),
                        new_name = ?ev.new_name(),
                        "moved"
                    );
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log-writer"
    }
}
