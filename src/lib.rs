//! Workspace-level integration test harness for DivCalc.
//!
//! The tests live under `tests/`; this crate only exists so they have a home.
