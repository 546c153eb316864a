//! Command-line layer: constants, argument parsing, help text.

pub mod constants;
pub mod args;
pub mod help;
