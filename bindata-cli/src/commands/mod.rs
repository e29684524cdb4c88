//! Command implementations for the bindata CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod completions;
pub mod generate;
