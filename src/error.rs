//! Error types used by the dispatcher and by subscribers.
//!
//! This module defines two enums:
//!
//! - [`SubscriberError`] — what a subscriber returns when it cannot accept an event.
//! - [`NotifyError`] — what a dispatch call returns when a subscriber failed.
//!
//! Both provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Failures are never swallowed: the first failing subscriber stops the fan-out
//! and its error travels back to whoever published the event.

use thiserror::Error;

use crate::events::EventKind;

/// # Errors produced by a subscriber.
///
/// Returned from [`Subscribe::on_event`](crate::Subscribe::on_event).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriberError {
    /// The subscriber refuses the change the event describes.
    #[error("vetoed: {reason}")]
    Vetoed {
        /// Why the change was refused.
        reason: String,
    },

    /// The subscriber failed while handling the event.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl SubscriberError {
    /// Shorthand for [`SubscriberError::Vetoed`].
    pub fn vetoed(reason: impl Into<String>) -> Self {
        SubscriberError::Vetoed {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`SubscriberError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        SubscriberError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use lifecycle_events::SubscriberError;
    ///
    /// let err = SubscriberError::vetoed("read-only container");
    /// assert_eq!(err.as_label(), "subscriber_vetoed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Vetoed { .. } => "subscriber_vetoed",
            SubscriberError::Fail { .. } => "subscriber_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberError::Vetoed { reason } => format!("vetoed: {reason}"),
            SubscriberError::Fail { error } => format!("error: {error}"),
        }
    }
}

/// # Errors produced while publishing an event.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// A subscriber returned an error; subscribers after it were not called.
    #[error("subscriber '{subscriber}' (#{index}) failed on {kind} event: {source}")]
    Subscriber {
        /// Name reported by the failing subscriber.
        subscriber: String,
        /// Registration position of the failing subscriber (0-based).
        index: usize,
        /// Kind of the event being delivered.
        kind: EventKind,
        /// The error the subscriber returned.
        #[source]
        source: SubscriberError,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use lifecycle_events::{EventKind, NotifyError, SubscriberError};
    ///
    /// let err = NotifyError::Subscriber {
    ///     subscriber: "audit".into(),
    ///     index: 0,
    ///     kind: EventKind::Created,
    ///     source: SubscriberError::fail("disk full"),
    /// };
    /// assert_eq!(err.as_label(), "notify_subscriber_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Subscriber { .. } => "notify_subscriber_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::Subscriber {
                subscriber,
                index,
                kind,
                source,
            } => format!(
                "subscriber={subscriber} index={index} kind={kind} {}",
                source.as_message()
            ),
        }
    }

    /// The error reported by the subscriber itself.
    pub fn subscriber_error(&self) -> &SubscriberError {
        match self {
            NotifyError::Subscriber { source, .. } => source,
        }
    }

    /// True if the subscriber vetoed the change.
    pub fn is_veto(&self) -> bool {
        matches!(self.subscriber_error(), SubscriberError::Vetoed { .. })
    }
}
