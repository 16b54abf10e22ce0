//! Library integration tests for nonstop-lib.

mod common;
mod control_tests;
mod environment_tests;
