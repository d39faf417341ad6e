//! CLI, meeting store, URI openers, launch actions
//!
//! This crate provides the `zoomlaunch` command-line interface.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod opener;
pub mod store;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
pub use opener::{SystemOpener, UriOpener};
pub use store::MeetingStore;
