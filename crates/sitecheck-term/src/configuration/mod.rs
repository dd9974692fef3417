//! Configuration management for the terminal form.
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! command line arguments and environment variables, in that order.

mod config;

pub use config::*;
