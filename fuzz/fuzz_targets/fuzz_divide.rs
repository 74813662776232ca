#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use divcalc_core::observers::CountingObserver;
use divcalc_core::{CalcError, Calculator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // First 4 bytes are the dividend, next 4 the divisor
    let dividend = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let divisor = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    let calc = Calculator::new();
    let counter = Arc::new(CountingObserver::new());
    calc.subscribe(counter.clone());

    match calc.divide(dividend, divisor) {
        Ok(quotient) => {
            assert_ne!(divisor, 0);
            assert!(quotient.is_finite());
            assert_eq!(counter.count(), 1);
        }
        Err(err) => {
            assert_eq!(err, CalcError::DivisionByZero);
            assert_eq!(divisor, 0);
            assert_eq!(counter.count(), 0);
        }
    }
});
