//! Subcommand handlers.  One module per subcommand, each exposing `execute`.

pub mod completions;
pub mod config;
pub mod demo;
pub mod notations;
pub mod render;
