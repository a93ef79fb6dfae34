//! CLI commands

pub mod digest;
pub mod walk;
