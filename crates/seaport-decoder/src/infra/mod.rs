pub mod cast;
pub mod cli;
pub mod config;
