//! This crate contains the initialization logic for logging that is shared
//! between the binaries of the workspace.
pub mod config;
pub mod tracing;

pub use config::Config;
