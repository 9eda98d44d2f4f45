//! Driver, configuration and build support for the `cythoner` binary.

pub mod args;
pub mod build;
pub mod config;
pub mod driver;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
