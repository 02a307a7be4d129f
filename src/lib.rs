//! Depobot - Telegram bot for daily deposit reports.
//!
//! Group members post structured deposit reports; the bot keeps one line per
//! report under the current report day and prints a grouped digest on
//! request. It also counts how often phone numbers were checked, computes
//! commissions, forwards feedback to the owner and lets the admin broadcast.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Report extraction, report-day keys, number detection,
//!   commission math and the persisted [`BotData`](domain::BotData)
//! - [`port`] - [`Messenger`](port::Messenger) and [`Store`](port::Store) traits
//! - [`application`] - The [`DepositBot`](application::DepositBot) service:
//!   commands, conversations, callbacks and reply texts
//! - [`adapter`] - teloxide messenger and dispatcher (requires `telegram`
//!   feature), JSON file and in-memory stores
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`cli`] - Command-line entry points
//!
//! # Features
//!
//! - `telegram` - Telegram Bot API support via teloxide (default)
//! - `testkit` - Recording messenger and update builders for integration tests

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
