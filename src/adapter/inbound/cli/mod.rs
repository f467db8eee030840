//! CLI module graph.

pub mod command;
pub mod config;
pub mod lookup;
pub mod output;
pub mod serve;
