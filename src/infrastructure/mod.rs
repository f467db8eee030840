//! Infrastructure: configuration and component wiring.

pub mod config;
pub mod factory;
