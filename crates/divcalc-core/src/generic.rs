//! Type-parametric addition.
//!
//! `GenericCalculator<T>` accepts any `T` with an `Add` impl; types without
//! one are rejected at compile time. The checked and summing variants lean
//! on `num-traits` for the extra capabilities they need.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};

use crate::calculator::CalcError;

/// Stateless adder for any type supporting `+`.
pub struct GenericCalculator<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> GenericCalculator<T> {
    /// Create a new generic calculator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Add<Output = T>> GenericCalculator<T> {
    /// Return `a + b`.
    pub fn add(&self, a: T, b: T) -> T {
        a + b
    }

    /// Sum every value, starting from zero.
    pub fn sum<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
        T: Zero,
    {
        values.into_iter().fold(T::zero(), |acc, v| self.add(acc, v))
    }
}

impl<T: CheckedAdd + fmt::Display> GenericCalculator<T> {
    /// Return `a + b`, or [`CalcError::Overflow`] if it does not fit in `T`.
    pub fn checked_add(&self, a: &T, b: &T) -> Result<T, CalcError> {
        a.checked_add(b)
            .ok_or_else(|| CalcError::Overflow(format!("{a} + {b}")))
    }
}

impl<T> Default for GenericCalculator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GenericCalculator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GenericCalculator<T> {}

impl<T> fmt::Debug for GenericCalculator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericCalculator")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
