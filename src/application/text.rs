//! User-facing texts and keyboards.

use crate::domain::{format_commission, CommissionKind, LedgerStats};
use crate::port::{InlineButton, Markup};

use super::callback::CallbackAction;

/// Blank deposit report users copy, fill in and send back.
pub const REPORT_TEMPLATE: &str = "Gmail        - \n  \n\
    Tele name    - \n    \n\
    Username     - \n    \n\
    Date         - \n    \n\
    Age          - \n    \n\
    Current work - \n    \n\
    Phone number       - \n\n\
    Khaifa - ";

pub const ADMIN_ONLY: &str = "Admin only.";
pub const NOT_AUTHORIZED: &str = "You are not authorized to use this command.";
pub const ACTION_CANCELLED: &str = "❌ Action cancelled.";
pub const CHECK_USAGE: &str = "Usage: /chk <number>.";
pub const DIGEST_TOO_LONG: &str = "Warning: Data too long. Displaying partial data.";

pub const COMMISSION_PROMPT: &str = "*💰 Select Commission Type:*";
pub const COMMISSION_INVALID_AMOUNT: &str = "❌ Invalid amount. Enter a valid number.";
pub const COMMISSION_KIND_MISSING: &str =
    "❌ Commission type not found. Please try again with /help.";
pub const COMMISSION_CANCELLED: &str = "❌ Commission calculation cancelled.";

pub const FEEDBACK_PROMPT: &str = "You can now write to the owner. \
    Send your message here and it will be delivered.\n\n(Use /cancel to stop.)";
pub const FEEDBACK_SENT: &str = "Your feedback has been sent to the owner.";

pub const BROADCAST_NO_CHATS: &str = "No tracked users or groups found.";
pub const BROADCAST_PROMPT: &str =
    "*📢 Broadcast Service*\n\nPlease choose the user or group to send a message to:";
pub const BROADCAST_CANCELLED: &str = "❌ Broadcast cancelled.";

pub const NO_TRACKED_GROUPS: &str = "The bot is not currently in any tracked groups.";
pub const TRACKED_GROUPS_HEADER: &str = "*👥 Tracked Groups List:*";
pub const UNKNOWN_GROUP: &str = "Unknown Group (ID may be outdated)";

pub const MENU_HIDDEN: &str = "Menu keyboard hidden. Use /start to bring it back.";

#[must_use]
pub fn main_menu() -> String {
    "*🤖 Main Menu*\n\n\
    Use the buttons below:\n\n\
    📢 *When today's deposit report is done, remember to press /cleardata.* \
    Otherwise the data gets mixed up.\n\n\
    *For the deposit report form press /form, copy it and fill it in as shown.*"
        .to_string()
}

#[must_use]
pub fn main_menu_keyboard() -> Markup {
    let rows: [&[&str]; 5] = [
        &["/showdata", "/cleardata"],
        &["/comm", "/feedback"],
        &["/chk", "/form"],
        &["/stats", "/settings"],
        &["/hidemenu"],
    ];
    Markup::Keyboard(
        rows.iter()
            .map(|row| row.iter().map(|label| (*label).to_string()).collect())
            .collect(),
    )
}

#[must_use]
pub fn help() -> &'static str {
    "Bot commands and functions:\n\n\
    *Data Entry:*\n\
    1. Send a message containing \"Khaifa -\" and \"Date -\" to collect data automatically.\n\
    2. Send a photo caption or text with just a number and it is checked like /chk.\n\n\
    *User Commands (Menu Buttons):*\n\
    • /form - Display the report submission template\n\
    • /comm - Commission calculator\n\
    • /chk <number> - Check and track number usage\n\
    • /showdata - Show today's collected data\n\
    • /cleardata - Clear today's collected data\n\
    • /feedback - Send feedback to admin\n\
    • /hidemenu - Hide the menu buttons\n\
    • /settings - Admin functions (Admin only)\n"
}

#[must_use]
pub fn report_form() -> String {
    format!(
        "*📝 Deposit Report Form Template*\n\nCopy, fill in and send back:\n\n{REPORT_TEMPLATE}"
    )
}

/// Reply to a number check.
///
/// `with_search_hint` is set when the number was detected in a plain
/// message rather than sent with `/chk`.
#[must_use]
pub fn number_check(number: &str, count: u64, with_search_hint: bool) -> String {
    let mut text = if count > 1 {
        format!("⚠️ {number} ⚠️\n\nThis number has been checked {count} times.")
    } else {
        format!("✅ {number} ✅\n\nFirst check of this number. It is now on record.")
    };
    if with_search_hint {
        text.push_str(
            "\n\n‼️ Type the number into the 🔍 search bar to find who checked it before.",
        );
    }
    text
}

#[must_use]
pub fn no_data_today(day: &str) -> String {
    format!("No data collected yet for today ({day}) in this chat.")
}

#[must_use]
pub fn showdata_hint() -> &'static str {
    "💡 Clear the data with */cleardata* or pick it from the *Menu Button*.\n\n\
    *After /showdata, check that the figures are correct.*"
}

#[must_use]
pub fn data_cleared(day: &str) -> String {
    format!("✅ Data deleted for today ({day}).")
}

#[must_use]
pub fn nothing_to_clear(day: &str) -> String {
    format!("🤷‍♂️ No data found for today ({day}).")
}

#[must_use]
pub fn commission_keyboard() -> Markup {
    let mut rows: Vec<Vec<InlineButton>> = CommissionKind::ALL
        .into_iter()
        .map(|kind| {
            let label = match kind {
                CommissionKind::Killer => "🔪 Killer",
                CommissionKind::Deposit => "💰 Deposit (M2)",
                CommissionKind::M1 => "🥇 M1",
            };
            vec![InlineButton::new(
                label,
                CallbackAction::CommissionKind(kind).encode(),
            )]
        })
        .collect();
    rows.push(vec![InlineButton::new(
        "❌ Cancel",
        CallbackAction::CommissionCancel.encode(),
    )]);
    Markup::Inline(rows)
}

#[must_use]
pub fn commission_amount_prompt(kind: CommissionKind) -> String {
    format!(
        "You selected *{}*.\nPlease send the amount of money to calculate the commission:",
        kind.code().to_uppercase()
    )
}

#[must_use]
pub fn commission_result(
    kind: CommissionKind,
    input: &str,
    amount: rust_decimal::Decimal,
) -> String {
    format!(
        "*💰 Commission Result for {}:*\n\n\
        Input Amount: `{}`\n\
        Calculated Commission: *`{}`*\n\n\
        Calculation: `{} / 1600 * (Rate) * 4.7`",
        kind.display_name(),
        input,
        format_commission(kind.commission(amount)),
        amount.normalize()
    )
}

#[must_use]
pub fn feedback_for_admin(
    full_name: &str,
    username: Option<&str>,
    user_id: i64,
    feedback: &str,
) -> String {
    format!(
        "[NEW FEEDBACK]\nFrom: {full_name} (@{} - ID: {user_id})\n\nFeedback:\n{feedback}",
        username.unwrap_or("none")
    )
}

#[must_use]
pub fn broadcast_user_label(name: Option<&str>, user_id: i64) -> String {
    match name {
        Some(name) => format!("👤 User: {name} (ID: {user_id})"),
        None => format!("👤 Untracked User (ID: {user_id})"),
    }
}

#[must_use]
pub fn broadcast_group_label(name: Option<&str>, group_id: i64) -> String {
    match name {
        Some(name) => format!("👥 Group: {name} (ID: {group_id})"),
        None => format!("👥 Untracked Group (ID: {group_id})"),
    }
}

#[must_use]
pub fn broadcast_target_selected(name: &str) -> String {
    format!(
        "✅ Selected {name} as the recipient.\n\n\
        Please type the message you want to send.\n(Use /cancel to stop.)"
    )
}

#[must_use]
pub fn broadcast_confirmation(name: &str, message: &str) -> String {
    format!("👉 Send the following message to {name}?\n\nMessage:\n---\n{message}\n---\n")
}

#[must_use]
pub fn broadcast_confirm_keyboard() -> Markup {
    Markup::Inline(vec![
        vec![InlineButton::new(
            "✅ Confirm Send",
            CallbackAction::BroadcastConfirm.encode(),
        )],
        vec![InlineButton::new(
            "❌ Cancel Broadcast",
            CallbackAction::BroadcastCancel.encode(),
        )],
    ])
}

#[must_use]
pub fn admin_message(message: &str) -> String {
    format!("[ADMIN MESSAGE]\n{message}")
}

#[must_use]
pub fn broadcast_message(message: &str) -> String {
    format!("[BROADCAST]\n{message}")
}

#[must_use]
pub fn broadcast_sent(name: &str) -> String {
    format!("✅ Message sent to {name}.")
}

#[must_use]
pub fn broadcast_failed(name: &str, error: &str) -> String {
    format!("❌ Failed to send the message to {name}. (Error: {error})")
}

#[must_use]
pub fn broadcast_all_sent(successful: usize) -> String {
    format!("Broadcast sent successfully to {successful} chats.")
}

#[must_use]
pub fn tracked_group(name: &str, group_id: i64) -> String {
    format!("{name} ({group_id})")
}

#[must_use]
pub fn tracked_group_keyboard(group_id: i64) -> Markup {
    Markup::Inline(vec![vec![
        InlineButton::new(
            "🗑️ Clear All Data",
            CallbackAction::ClearGroup(group_id).encode(),
        ),
        InlineButton::new("❌ Cancel", CallbackAction::AdminCancel.encode()),
    ]])
}

#[must_use]
pub fn group_data_cleared(name: &str, group_id: i64) -> String {
    format!(
        "✅ Group Data Cleared!\n{name} ({group_id})'s daily tracking data has been completely removed."
    )
}

#[must_use]
pub fn no_group_data(group_id: i64) -> String {
    format!("No daily tracking data found for group ID {group_id}. Action cancelled.")
}

#[must_use]
pub fn admin_settings() -> &'static str {
    "⚙️ *Admin Settings*\n\n\
    Actions:\n\
    • /stats (Admin only)\n\
    • /broadcast (Admin only - Selectively broadcast)\n\
    • /broadcast <msg> (Admin only - Message every tracked chat)\n\
    • /listgroups (Admin only - Selectively clear group data)"
}

#[must_use]
pub fn stats(stats: LedgerStats) -> String {
    format!(
        "📊 Bot Statistics:\n\
        Total Users (Private Chats): {}\n\
        Total Groups: {}\n\
        Total Unique Numbers Checked (/chk): {}",
        stats.users, stats.groups, stats.checked_numbers
    )
}

#[must_use]
pub fn error_report(error: &str, context: &str, chat_id: Option<i64>) -> String {
    format!(
        "🚨 BOT ERROR ENCOUNTERED 🚨\n\nError: {error}\nContext: {context}\nUser/Chat: {}",
        chat_id.map_or_else(|| "N/A".to_string(), |id| id.to_string())
    )
}
