//! CLI command implementations.

pub mod config;
pub mod dump;
pub mod games;
pub mod serve;
