use std::sync::Arc;

use crate::subscribers::{Subscribe, SubscriberSet};

use super::{config::DispatcherConfig, dispatcher::Dispatcher};

/// Builder for constructing a [`Dispatcher`] with initial subscribers.
pub struct DispatcherBuilder<O> {
    cfg: DispatcherConfig,
    subscribers: Vec<Arc<dyn Subscribe<O>>>,
}

impl<O> DispatcherBuilder<O> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: DispatcherConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets the subscribers, replacing any added so far.
    ///
    /// Subscribers are called in the order of this vector.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe<O>>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Appends one subscriber after those already added.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe<O>>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Builds and returns the dispatcher.
    pub fn build(self) -> Dispatcher<O> {
        tracing::debug!(
            dispatcher = %self.cfg.name,
            subscribers = self.subscribers.len(),
            "dispatcher built"
        );
        Dispatcher::with_subscribers(self.cfg, SubscriberSet::new(self.subscribers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::Recorder;

    #[test]
    fn test_build_keeps_subscriber_order() {
        let first = Arc::new(Recorder::<u32>::new());
        let second = Arc::new(Recorder::<u32>::new());

        let dispatcher = DispatcherBuilder::<u32>::new(DispatcherConfig::named("ordered"))
            .with_subscribers(vec![first.clone() as Arc<dyn Subscribe<u32>>])
            .with_subscriber(second.clone())
            .build();

        assert_eq!(dispatcher.config().name, "ordered");
        assert_eq!(dispatcher.subscribers().len(), 2);
        dispatcher.created(3).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
