//! Event payload delivered to observers after a successful division.

use serde::Serialize;

/// Snapshot of a completed division, handed to every registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionEvent {
    /// The number that was divided.
    pub dividend: i32,
    /// The non-zero number it was divided by.
    pub divisor: i32,
    /// Single-precision result returned to the caller.
    pub quotient: f32,
}

impl DivisionEvent {
    /// Create a new division event.
    #[must_use]
    pub fn new(dividend: i32, divisor: i32, quotient: f32) -> Self {
        Self {
            dividend,
            divisor,
            quotient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_fields() {
        let event = DivisionEvent::new(5, 2, 2.5);
        assert_eq!(event.dividend, 5);
        assert_eq!(event.divisor, 2);
        assert!((event.quotient - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn event_serializes_to_json() {
        let event = DivisionEvent::new(-4, 2, -2.0);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["dividend"], -4);
        assert_eq!(json["divisor"], 2);
        assert_eq!(json["quotient"], -2.0);
    }
}
