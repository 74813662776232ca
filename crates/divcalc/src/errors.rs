//! Error handling and exit codes.

use divcalc_core::calculator::CalcError;
use divcalc_core::constants::exit_codes;

/// Map a calculator error to the process exit code.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::DivisionByZero => exit_codes::ERROR_DIVISION_BY_ZERO,
        CalcError::Overflow(_) => exit_codes::ERROR_OVERFLOW,
    }
}
