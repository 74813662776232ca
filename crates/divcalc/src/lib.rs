//! DivCalc library: application logic for the `divcalc` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod presenter;
