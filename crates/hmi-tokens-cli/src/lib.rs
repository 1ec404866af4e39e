//! Library components for the `hmi-tokens` inspection CLI.

pub mod logging;
pub mod render;
