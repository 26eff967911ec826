//! CLI subcommand implementations.

pub mod request;
pub mod requests;
pub mod services;
