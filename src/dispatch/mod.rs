//! Dispatching: configuration, construction and publishing.
//!
//! The public API from this module is [`Dispatcher`] (with its builder and
//! [`DispatcherConfig`]). It owns the ordered subscriber list and turns each
//! lifecycle helper call into exactly one published event.
//!
//! Internal modules:
//! - [`config`]: dispatcher settings;
//! - [`dispatcher`]: event helpers and synchronous publishing;
//! - [`builder`]: assembles a dispatcher with initial subscribers.

mod builder;
mod config;
mod dispatcher;

pub use builder::DispatcherBuilder;
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
