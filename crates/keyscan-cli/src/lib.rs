//! keyscan-cli library
//!
//! This module exposes the command runners and argument types of keyscan-cli
//! so they can be exercised from tests.

#[doc(hidden)]
pub mod commands;

pub mod cli;
pub mod logging;

pub use cli::{Cli, Commands};
