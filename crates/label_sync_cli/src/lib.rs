//! label-sync CLI library exports for testing.
//!
//! This module exposes the commands, configuration and prompt backends used
//! by the `label-sync` binary.

pub mod commands;
pub mod config;
pub mod errors;
pub mod prompt;
