//! CLI subcommand implementations.

pub mod digest;
pub mod events;
pub mod health;
pub mod stock;
