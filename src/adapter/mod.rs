//! Implementations of ports (hexagonal adapters).

pub mod store;

#[cfg(feature = "telegram")]
pub mod telegram;
