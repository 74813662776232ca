//! Concrete observer implementations.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::Sender;
use tracing::debug;

use crate::event::DivisionEvent;
use crate::observer::DivisionObserver;

/// Observer that forwards events through a channel (non-blocking).
///
/// Events are dropped when the channel is full or disconnected.
pub struct ChannelObserver {
    sender: Sender<DivisionEvent>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<DivisionEvent>) -> Self {
        Self { sender }
    }
}

impl DivisionObserver for ChannelObserver {
    fn on_divided(&self, event: &DivisionEvent) {
        let _ = self.sender.try_send(*event);
    }
}

/// Observer that logs every division at debug level.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DivisionObserver for LoggingObserver {
    fn on_divided(&self, event: &DivisionEvent) {
        debug!(
            dividend = event.dividend,
            divisor = event.divisor,
            quotient = event.quotient,
            "Division complete"
        );
    }
}

/// Observer that counts how many notifications it has received.
#[derive(Debug, Default)]
pub struct CountingObserver {
    count: AtomicUsize,
}

impl CountingObserver {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl DivisionObserver for CountingObserver {
    fn on_divided(&self, _event: &DivisionEvent) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Null object pattern: ignores every notification.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DivisionObserver for NoOpObserver {
    fn on_divided(&self, _event: &DivisionEvent) {
        // Intentionally empty
    }
}
