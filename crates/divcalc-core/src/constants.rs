//! Shared constants.

/// Process exit codes used by the `divcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid command line (matches clap's own usage exit code).
    pub const ERROR_USAGE: i32 = 2;
    /// Division attempted with a zero divisor.
    pub const ERROR_DIVISION_BY_ZERO: i32 = 3;
    /// Checked addition overflowed.
    pub const ERROR_OVERFLOW: i32 = 4;
}
