//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       DepositBot        │
//!                 │   (application layer)   │
//!                 └───────────┬─────────────┘
//!                ┌────────────┴────────────┐
//!                ▼                         ▼
//!         ┌─────────────┐           ┌─────────────┐
//!         │  Messenger  │           │    Store    │
//!         │  (teloxide) │           │ (JSON file) │
//!         └─────────────┘           └─────────────┘
//! ```

pub mod outbound;

pub use outbound::messenger::{InlineButton, Markup, Messenger, OutgoingMessage, TextFormat};
pub use outbound::store::Store;
