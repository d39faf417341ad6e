//! Subcommand implementations.

pub mod config;
pub mod launch;
pub mod next;
pub mod show;
