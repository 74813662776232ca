//! Integer calculator with post-division notifications.
//!
//! `Calculator::divide` converts both operands to `f32`, divides, and then
//! notifies every registered [`DivisionObserver`] before returning. A zero
//! divisor short-circuits with [`CalcError::DivisionByZero`] and notifies
//! nobody.

use std::sync::Arc;

use tracing::debug;

use crate::event::DivisionEvent;
use crate::observer::{DivisionObserver, DivisionSubject, SubscriptionId};

/// Error type for calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A checked addition left the operand type's range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Integer calculator.
///
/// Observers run synchronously on the thread calling [`divide`](Self::divide).
/// A panicking observer unwinds through `divide` and the observers after it
/// are skipped.
#[derive(Debug, Default)]
pub struct Calculator {
    subject: DivisionSubject,
}

impl Calculator {
    /// Create a calculator with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add two integers, wrapping on overflow.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    /// Add two integers, failing instead of wrapping.
    pub fn checked_add(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        a.checked_add(b)
            .ok_or_else(|| CalcError::Overflow(format!("{a} + {b}")))
    }

    /// Divide `dividend` by `divisor` in single precision.
    ///
    /// On success every registered observer is notified, in registration
    /// order, before the quotient is returned.
    pub fn divide(&self, dividend: i32, divisor: i32) -> Result<f32, CalcError> {
        if divisor == 0 {
            return Err(CalcError::DivisionByZero);
        }

        let quotient = dividend as f32 / divisor as f32;
        debug!(dividend, divisor, quotient, "divided");

        self.subject
            .notify(&DivisionEvent::new(dividend, divisor, quotient));
        Ok(quotient)
    }

    /// Register an observer for successful divisions.
    pub fn subscribe(&self, observer: Arc<dyn DivisionObserver>) -> SubscriptionId {
        self.subject.register(observer)
    }

    /// Register a closure for successful divisions.
    pub fn subscribe_fn<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&DivisionEvent) + Send + Sync + 'static,
    {
        self.subject.register(Arc::new(f))
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if `id` is not (or no longer) registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subject.unregister(id)
    }

    /// Remove every registered observer.
    pub fn clear_subscribers(&self) {
        self.subject.clear();
    }

    /// Number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::CountingObserver;
    use parking_lot::Mutex;
    use std::panic::AssertUnwindSafe;

    #[test]
    fn add_two_positive_numbers() {
        assert_eq!(Calculator::new().add(2, 2), 4);
    }

    #[test]
    fn add_positive_to_negative() {
        assert_eq!(Calculator::new().add(2, -4), -2);
    }

    #[test]
    fn add_negative_to_positive() {
        assert_eq!(Calculator::new().add(-10, 2), -8);
    }

    #[test]
    fn add_two_negative_numbers() {
        assert_eq!(Calculator::new().add(-7, -2), -9);
    }

    #[test]
    fn add_wraps_on_overflow() {
        assert_eq!(Calculator::new().add(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn checked_add_reports_overflow() {
        let calc = Calculator::new();
        assert_eq!(calc.checked_add(40, 2), Ok(42));
        assert!(matches!(
            calc.checked_add(i32::MAX, 1),
            Err(CalcError::Overflow(_))
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn divide_returns_proper_value() {
        let cases: [(i32, i32, f32); 6] = [
            (4, 2, 2.0),
            (-4, 2, -2.0),
            (4, -2, -2.0),
            (0, 3, 0.0),
            (5, 2, 2.5),
            (1, 3, 0.333_333_34),
        ];
        let calc = Calculator::new();
        for (dividend, divisor, expected) in cases {
            assert_eq!(
                calc.divide(dividend, divisor).unwrap(),
                expected,
                "{dividend} / {divisor}"
            );
        }
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(
            Calculator::new().divide(2, 0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn divide_notifies_subscriber() {
        let calc = Calculator::new();
        let called = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&called);
        calc.subscribe_fn(move |_| *flag.lock() = true);

        calc.divide(1, 2).unwrap();

        assert!(*called.lock());
    }

    #[test]
    fn divide_by_zero_notifies_nobody() {
        let calc = Calculator::new();
        let counter = Arc::new(CountingObserver::new());
        calc.subscribe(counter.clone());

        for dividend in [-5, 0, 2, i32::MAX] {
            assert!(calc.divide(dividend, 0).is_err());
        }
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn each_division_notifies_each_subscriber_once() {
        let calc = Calculator::new();
        let a = Arc::new(CountingObserver::new());
        let b = Arc::new(CountingObserver::new());
        calc.subscribe(a.clone());
        calc.subscribe(b.clone());

        calc.divide(6, 3).unwrap();
        calc.divide(7, 2).unwrap();

        assert_eq!(a.count(), 2);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn observers_see_the_returned_quotient() {
        let calc = Calculator::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        calc.subscribe_fn(move |e| sink.lock().push(*e));

        let q = calc.divide(-9, 4).unwrap();

        assert_eq!(*seen.lock(), vec![DivisionEvent::new(-9, 4, q)]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let calc = Calculator::new();
        let counter = Arc::new(CountingObserver::new());
        let id = calc.subscribe(counter.clone());

        calc.divide(1, 1).unwrap();
        assert!(calc.unsubscribe(id));
        calc.divide(1, 1).unwrap();

        assert_eq!(counter.count(), 1);
        assert_eq!(calc.subscriber_count(), 0);
    }

    #[test]
    fn clear_subscribers_removes_all() {
        let calc = Calculator::new();
        calc.subscribe_fn(|_| {});
        calc.subscribe_fn(|_| {});
        assert_eq!(calc.subscriber_count(), 2);
        calc.clear_subscribers();
        assert_eq!(calc.subscriber_count(), 0);
    }

    #[test]
    #[should_panic(expected = "observer failed")]
    fn observer_panic_propagates_out_of_divide() {
        let calc = Calculator::new();
        calc.subscribe_fn(|_| panic!("observer failed"));
        let _ = calc.divide(1, 2);
    }

    #[test]
    fn observer_panic_skips_later_observers() {
        let calc = Calculator::new();
        let later = Arc::new(CountingObserver::new());
        calc.subscribe_fn(|_| panic!("observer failed"));
        calc.subscribe(later.clone());

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| calc.divide(1, 2)));

        assert!(result.is_err());
        assert_eq!(later.count(), 0);
    }

    #[test]
    fn calc_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::Overflow("1 + 2".into()).to_string(),
            "arithmetic overflow: 1 + 2"
        );
    }
}
