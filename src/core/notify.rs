//! Publish/subscribe hub embedded in every observable entity.
//!
//! Observers receive a shared reference to the source entity and the event.
//! They run synchronously, in registration order, on the caller's stack, and
//! only get read access: mutating the game from inside a handler is not
//! possible through this interface.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S, E> = Box<dyn Fn(&S, &E) + Send>;

/// List of observers for events of type `E` emitted by a source of type `S`.
pub struct Notifier<S, E> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<S, E>)>,
}

impl<S, E> Notifier<S, E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Register `observer`; it will be called after all earlier subscribers.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&S, &E) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.observers.iter().position(|(sid, _)| *sid == id) {
            Some(idx) => {
                drop(self.observers.remove(idx));
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every current subscriber.
    pub fn publish(&self, source: &S, event: &E) {
        for (_, observer) in self.observers.iter() {
            observer(source, event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S, E> Default for Notifier<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> fmt::Debug for Notifier<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notifier {{ observers: {} }}", self.observers.len())
    }
}
