//! nonstop-lib: configuration control for the nonstop package service
//!
//! This crate turns ordered change/remove operation lists into updates of the
//! live service configuration:
//! - `package`: the package descriptor, version splitting and patching
//! - `filter`: the matching filter derived from the descriptor
//! - `env`: environment variable updates and their diff report
//! - `control`: the `Controller` façade that ties these to the state machine

pub mod config;
pub mod consts;
pub mod control;
pub mod env;
pub mod filter;
pub mod ops;
pub mod package;
pub mod platform;
pub mod util;

pub use config::{Config, ConfigError};
pub use control::{ControlError, Controller, NoopStateMachine, StateMachine};
pub use env::{EnvDiff, Environment, MemoryEnv, ProcessEnv};
pub use filter::Filter;
pub use ops::{EnvOperation, Op, OperationError, PackageOperation};
pub use package::{PackageDescriptor, PatchError};
