//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod messenger;
pub mod store;
