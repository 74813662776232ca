//! Observer pattern for division notifications.
//!
//! A [`DivisionSubject`] keeps an ordered list of observers keyed by an
//! opaque [`SubscriptionId`]. Closures can be registered directly through
//! the blanket [`DivisionObserver`] impl.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::event::DivisionEvent;

/// Observer trait for receiving division notifications.
pub trait DivisionObserver: Send + Sync {
    /// Called once after each successful division.
    fn on_divided(&self, event: &DivisionEvent);
}

impl<F> DivisionObserver for F
where
    F: Fn(&DivisionEvent) + Send + Sync,
{
    fn on_divided(&self, event: &DivisionEvent) {
        self(event);
    }
}

/// Handle returned on registration, used to unregister later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Subject that manages an ordered collection of observers.
pub struct DivisionSubject {
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn DivisionObserver>)>>,
    next_id: AtomicU64,
}

impl DivisionSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register an observer at the end of the list.
    pub fn register(&self, observer: Arc<dyn DivisionObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        trace!(%id, "observer registered");
        id
    }

    /// Unregister the observer with the given id.
    ///
    /// Returns `false` if no such observer is registered.
    pub fn unregister(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let Some(pos) = observers.iter().position(|(oid, _)| *oid == id) else {
            return false;
        };
        observers.remove(pos);
        trace!(%id, "observer unregistered");
        true
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers in registration order.
    ///
    /// The list is snapshotted first and the lock released, so an observer
    /// may register or unregister without deadlocking. Changes made during
    /// a notification take effect from the next one.
    pub fn notify(&self, event: &DivisionEvent) {
        let snapshot: Vec<Arc<dyn DivisionObserver>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in &snapshot {
            observer.on_divided(event);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for DivisionSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DivisionSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivisionSubject")
            .field("observers", &self.count())
            .finish_non_exhaustive()
    }
}
