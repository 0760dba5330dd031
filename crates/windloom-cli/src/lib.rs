//! Library half of the `windloom` binary: argument definitions, config
//! resolution and the subcommand implementations.

pub mod cli;
pub mod commands;
pub mod config;
