//! CLI commands

pub mod filter;
