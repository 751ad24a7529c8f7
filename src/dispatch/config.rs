//! # Dispatcher configuration.
//!
//! Provides [`DispatcherConfig`], the settings a [`Dispatcher`](crate::Dispatcher)
//! is created with. Subscribers are not part of the config; they are passed to
//! the dispatcher or its builder.

use std::borrow::Cow;

/// Configuration for a dispatcher.
///
/// ## Field semantics
/// - `name`: label attached to every diagnostic record the dispatcher emits
/// - `trace_events`: emit a `DEBUG` record for each published event
///
/// ## Notes
/// All fields are public for flexibility; start from `Default` and override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Label used in logs to tell dispatchers apart.
    pub name: Cow<'static, str>,

    /// Log every publish at `DEBUG` (kind and subscriber count).
    ///
    /// Subscriber failures are logged at `WARN` regardless of this flag.
    pub trace_events: bool,
}

impl DispatcherConfig {
    /// Default configuration with a custom name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for DispatcherConfig {
    /// Default configuration:
    ///
    /// - `name = "lifecycle"`
    /// - `trace_events = true` (cheap when no `tracing` subscriber is installed)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("lifecycle"),
            trace_events: true,
        }
    }
}
