//! Process-wide observable store
//!
//! Replaces ad hoc global mutable state (auth state, theme) with a single
//! value that any number of independent subscribers can watch. Dropping a
//! [`Subscription`] unsubscribes it.

use std::sync::Arc;
use tokio::sync::watch;

/// Shared observable value
///
/// Cloning an `Observable` yields another handle to the same value.
#[derive(Debug)]
pub struct Observable<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replace the value, notifying subscribers only when it actually changed
    pub fn set(&self, value: T) {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    /// Modify in place; subscribers are notified if the result differs
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.sender.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        });
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live subscription; unsubscribes on drop
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Current value, marking it as seen
    pub fn current(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next change
    ///
    /// Returns `None` once every `Observable` handle has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
