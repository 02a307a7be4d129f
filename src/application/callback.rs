//! Inline keyboard callback data.
//!
//! Telegram limits callback data to 64 bytes; every variant here encodes to
//! a short ASCII string.

use crate::domain::CommissionKind;

const COMMISSION_PREFIX: &str = "comm_";
const COMMISSION_CANCEL: &str = "cancel_commission";
const BROADCAST_TARGET_PREFIX: &str = "bcast_id_";
const BROADCAST_CONFIRM: &str = "bcast_confirm";
const BROADCAST_CANCEL: &str = "bcast_cancel";
const CLEAR_GROUP_PREFIX: &str = "admin_clear_";
const ADMIN_CANCEL: &str = "admin_cancel";

/// Action attached to an inline button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    CommissionKind(CommissionKind),
    CommissionCancel,
    BroadcastTarget(i64),
    BroadcastConfirm,
    BroadcastCancel,
    ClearGroup(i64),
    AdminCancel,
}

impl CallbackAction {
    #[must_use]
    pub fn encode(self) -> String {
        match self {
            Self::CommissionKind(kind) => format!("{COMMISSION_PREFIX}{}", kind.code()),
            Self::CommissionCancel => COMMISSION_CANCEL.to_string(),
            Self::BroadcastTarget(chat_id) => format!("{BROADCAST_TARGET_PREFIX}{chat_id}"),
            Self::BroadcastConfirm => BROADCAST_CONFIRM.to_string(),
            Self::BroadcastCancel => BROADCAST_CANCEL.to_string(),
            Self::ClearGroup(chat_id) => format!("{CLEAR_GROUP_PREFIX}{chat_id}"),
            Self::AdminCancel => ADMIN_CANCEL.to_string(),
        }
    }

    /// Parse callback data; `None` for data this bot never produced.
    #[must_use]
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            COMMISSION_CANCEL => return Some(Self::CommissionCancel),
            BROADCAST_CONFIRM => return Some(Self::BroadcastConfirm),
            BROADCAST_CANCEL => return Some(Self::BroadcastCancel),
            ADMIN_CANCEL => return Some(Self::AdminCancel),
            _ => {}
        }

        if let Some(code) = data.strip_prefix(COMMISSION_PREFIX) {
            return CommissionKind::from_code(code).map(Self::CommissionKind);
        }
        if let Some(id) = data.strip_prefix(BROADCAST_TARGET_PREFIX) {
            return id.parse().ok().map(Self::BroadcastTarget);
        }
        if let Some(id) = data.strip_prefix(CLEAR_GROUP_PREFIX) {
            return id.parse().ok().map(Self::ClearGroup);
        }
        None
    }
}
