//! Framework-agnostic domain logic.

mod chat;
mod commission;
mod day;
mod ledger;

pub mod number;
pub mod report;

pub use chat::{Chat, ChatKind, IncomingCallback, IncomingMessage, MessageRef, Sender};
pub use commission::{format_commission, parse_amount, CommissionKind, InvalidAmount};
pub use day::{parse_cutoff, parse_utc_offset, ReportClock, DAY_KEY_FORMAT};
pub use ledger::{BotData, LedgerStats};
pub use report::{Digest, ReportEntry};
