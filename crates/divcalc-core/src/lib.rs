//! # divcalc-core
//!
//! Core library for DivCalc: an integer calculator whose divisions notify
//! registered observers, and a generic adder for any `Add` type.

pub mod calculator;
pub mod constants;
pub mod event;
pub mod generic;
pub mod observer;
pub mod observers;

// Re-exports
pub use calculator::{CalcError, Calculator};
pub use constants::exit_codes;
pub use event::DivisionEvent;
pub use generic::GenericCalculator;
pub use observer::{DivisionObserver, DivisionSubject, SubscriptionId};

/// Divide once with a throwaway calculator.
///
/// Convenience for callers that do not need notifications.
///
/// # Example
/// ```
/// assert_eq!(divcalc_core::divide(5, 2), Ok(2.5));
/// assert!(divcalc_core::divide(1, 0).is_err());
/// ```
pub fn divide(dividend: i32, divisor: i32) -> Result<f32, CalcError> {
    Calculator::new().divide(dividend, divisor)
}
