//! DeviceHub process surface: bootstrap, command handlers and the CLI.

pub mod bootstrap;
pub mod cli;
pub mod commands;
