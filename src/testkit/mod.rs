//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`messenger`] - [`RecordingMessenger`](messenger::RecordingMessenger),
//!   a [`Messenger`](crate::port::Messenger) that records everything sent.
//! - [`domain`] - Builders for chats, senders, messages and button presses.

pub mod domain;
pub mod messenger;
