mod support;

use std::sync::Arc;

use depobot::application::bot::{BotSettings, DepositBot};
use depobot::application::Conversation;
use depobot::domain::{BotData, ChatKind, ReportClock};
use depobot::error::StoreError;
use depobot::port::{Markup, Store, TextFormat};
use depobot::testkit::domain::{group_chat, press, private_chat, text};
use depobot::testkit::messenger::RecordingMessenger;
use support::{Harness, ADMIN, GROUP, USER};

fn tracked() -> BotData {
    let mut data = BotData::default();
    data.register_chat(USER, ChatKind::Private);
    data.register_chat(GROUP, ChatKind::Supergroup);
    data
}

#[tokio::test]
async fn broadcast_with_text_reaches_every_tracked_chat() {
    let messenger = RecordingMessenger::new().failing_chat(USER + 1);
    let mut data = tracked();
    data.register_chat(USER + 1, ChatKind::Private);
    let h = Harness::with(messenger, data);

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/broadcast Office closed\ntomorrow"))
        .await
        .unwrap();

    let expected = "[BROADCAST]\nOffice closed\ntomorrow".to_string();
    assert_eq!(h.messenger.texts_to(USER), vec![expected.clone()]);
    assert_eq!(h.messenger.texts_to(GROUP), vec![expected]);
    assert_eq!(
        h.messenger.last_to(ADMIN).unwrap().text,
        "Broadcast sent successfully to 2 chats."
    );
}

#[tokio::test]
async fn broadcast_is_refused_for_members() {
    let h = Harness::with(RecordingMessenger::new(), tracked());

    h.bot
        .handle_message(text(private_chat(USER), USER, "/broadcast hi"))
        .await
        .unwrap();
    h.bot
        .handle_message(text(private_chat(USER), USER, "/broadcast"))
        .await
        .unwrap();

    assert_eq!(
        h.messenger.texts_to(USER),
        vec![
            "You are not authorized to use this command.".to_string(),
            "Admin only.".to_string()
        ]
    );
    assert_eq!(h.bot.conversation(USER, USER), None);
}

#[tokio::test]
async fn selective_broadcast_flow() {
    let messenger = RecordingMessenger::new()
        .with_chat_name(USER, "Alice")
        .with_chat_name(GROUP, "Deposit Team");
    let h = Harness::with(messenger, tracked());
    let admin_chat = private_chat(ADMIN);

    h.bot
        .handle_message(text(admin_chat, ADMIN, "/broadcast"))
        .await
        .unwrap();
    let picker = h.messenger.last_to(ADMIN).unwrap();
    assert_eq!(picker.format, TextFormat::Markdown);
    let Markup::Inline(rows) = picker.markup else {
        panic!("expected inline keyboard");
    };
    let labels: Vec<&str> = rows.iter().map(|row| row[0].label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "👤 User: Alice (ID: 42)",
            "👥 Group: Deposit Team (ID: -100200)",
            "❌ Cancel Broadcast",
        ]
    );

    h.bot
        .handle_callback(press(admin_chat, ADMIN, 7, &rows[0][0].data))
        .await
        .unwrap();
    assert!(h
        .messenger
        .last_edit()
        .unwrap()
        .text
        .starts_with("✅ Selected Alice as the recipient."));

    h.bot
        .handle_message(text(admin_chat, ADMIN, "Your report is late"))
        .await
        .unwrap();
    let confirmation = h.messenger.last_to(ADMIN).unwrap();
    assert!(confirmation.text.contains("---\nYour report is late\n---"));
    assert!(matches!(
        h.bot.conversation(ADMIN, ADMIN),
        Some(Conversation::BroadcastConfirm { target: USER, .. })
    ));

    h.bot
        .handle_callback(press(admin_chat, ADMIN, 8, "bcast_confirm"))
        .await
        .unwrap();
    assert_eq!(
        h.messenger.texts_to(USER),
        vec!["[ADMIN MESSAGE]\nYour report is late".to_string()]
    );
    assert_eq!(
        h.messenger.last_edit().unwrap().text,
        "✅ Message sent to Alice."
    );
    assert_eq!(h.bot.conversation(ADMIN, ADMIN), None);
}

#[tokio::test]
async fn broadcast_picker_marks_unreachable_chats() {
    let messenger = RecordingMessenger::new().failing_chat(USER);
    let h = Harness::with(messenger, tracked());

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/broadcast"))
        .await
        .unwrap();

    let Markup::Inline(rows) = h.messenger.last_to(ADMIN).unwrap().markup else {
        panic!("expected inline keyboard");
    };
    assert_eq!(rows[0][0].label, "👤 Untracked User (ID: 42)");
    assert_eq!(rows[1][0].label, "👥 Group: Group -100200 (ID: -100200)");
}

#[tokio::test]
async fn failed_delivery_is_shown_to_admin() {
    let messenger = RecordingMessenger::new().failing_chat(USER);
    let h = Harness::with(messenger, tracked());
    let admin_chat = private_chat(ADMIN);

    h.bot
        .handle_message(text(admin_chat, ADMIN, "/broadcast"))
        .await
        .unwrap();
    h.bot
        .handle_callback(press(admin_chat, ADMIN, 7, &format!("bcast_id_{USER}")))
        .await
        .unwrap();
    h.bot
        .handle_message(text(admin_chat, ADMIN, "hello"))
        .await
        .unwrap();
    h.bot
        .handle_callback(press(admin_chat, ADMIN, 8, "bcast_confirm"))
        .await
        .unwrap();

    let outcome = h.messenger.last_edit().unwrap().text;
    assert!(outcome.starts_with("❌ Failed to send the message to Chat ID: 42."));
    assert_eq!(h.bot.conversation(ADMIN, ADMIN), None);
}

#[tokio::test]
async fn broadcast_cancel_button_ends_flow() {
    let h = Harness::with(RecordingMessenger::new(), tracked());
    let admin_chat = private_chat(ADMIN);

    h.bot
        .handle_message(text(admin_chat, ADMIN, "/broadcast"))
        .await
        .unwrap();
    h.bot
        .handle_callback(press(admin_chat, ADMIN, 7, "bcast_cancel"))
        .await
        .unwrap();

    assert_eq!(h.messenger.last_edit().unwrap().text, "❌ Broadcast cancelled.");
    assert_eq!(h.bot.conversation(ADMIN, ADMIN), None);
}

#[tokio::test]
async fn broadcast_without_tracked_chats() {
    let h = Harness::new();

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/broadcast"))
        .await
        .unwrap();

    assert_eq!(
        h.messenger.last_to(ADMIN).unwrap().text,
        "No tracked users or groups found."
    );
    assert_eq!(h.bot.conversation(ADMIN, ADMIN), None);
}

#[tokio::test]
async fn listgroups_offers_clear_buttons() {
    let messenger = RecordingMessenger::new().with_chat_name(GROUP, "Deposit Team");
    let mut data = tracked();
    data.register_chat(GROUP - 1, ChatKind::Group);
    let h = Harness::with(messenger, data);

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/listgroups"))
        .await
        .unwrap();

    let sent = h.messenger.texts_to(ADMIN);
    assert_eq!(
        sent,
        vec![
            "*👥 Tracked Groups List:*".to_string(),
            "Unknown Group (ID may be outdated) (-100201)".to_string(),
            "Deposit Team (-100200)".to_string(),
        ]
    );
    let Markup::Inline(rows) = h.messenger.last_to(ADMIN).unwrap().markup else {
        panic!("expected inline keyboard");
    };
    assert_eq!(rows[0][0].data, "admin_clear_-100200");
    assert_eq!(rows[0][1].data, "admin_cancel");
}

#[tokio::test]
async fn clearing_a_group_removes_all_its_days() {
    let messenger = RecordingMessenger::new().with_chat_name(GROUP, "Deposit Team");
    let mut data = tracked();
    data.append_entry(GROUP, "2024-05-16", "a".into());
    data.append_entry(GROUP, "2024-05-17", "b".into());
    let h = Harness::with(messenger, data);
    let admin_chat = private_chat(ADMIN);

    h.bot
        .handle_callback(press(admin_chat, ADMIN, 5, "admin_clear_-100200"))
        .await
        .unwrap();

    assert!(h
        .messenger
        .last_edit()
        .unwrap()
        .text
        .starts_with("✅ Group Data Cleared!\nDeposit Team (-100200)"));
    assert!(!h.bot.snapshot().group_data.contains_key(&GROUP));
    assert!(h.bot.snapshot().groups.contains(&GROUP));
    assert!(!h.store.saved().group_data.contains_key(&GROUP));
    let saves = h.store.save_count();

    h.bot
        .handle_callback(press(admin_chat, ADMIN, 5, "admin_clear_-100200"))
        .await
        .unwrap();
    assert!(h
        .messenger
        .last_edit()
        .unwrap()
        .text
        .starts_with("No daily tracking data found for group ID -100200"));
    assert_eq!(h.store.save_count(), saves);
}

#[tokio::test]
async fn members_cannot_clear_groups() {
    let mut data = tracked();
    data.append_entry(GROUP, "2024-05-17", "b".into());
    let h = Harness::with(RecordingMessenger::new(), data);

    h.bot
        .handle_callback(press(group_chat(GROUP), USER, 5, "admin_clear_-100200"))
        .await
        .unwrap();
    h.bot
        .handle_callback(press(group_chat(GROUP), USER, 5, "admin_cancel"))
        .await
        .unwrap();

    let edits: Vec<String> = h
        .messenger
        .edited()
        .into_iter()
        .map(|edit| edit.message.text)
        .collect();
    assert_eq!(edits, vec!["Admin only.", "Admin only."]);
    assert!(h.bot.snapshot().group_data.contains_key(&GROUP));
}

#[tokio::test]
async fn admin_cancel_button() {
    let h = Harness::with(RecordingMessenger::new(), tracked());

    h.bot
        .handle_callback(press(private_chat(ADMIN), ADMIN, 5, "admin_cancel"))
        .await
        .unwrap();

    assert_eq!(h.messenger.last_edit().unwrap().text, "❌ Action cancelled.");
}

#[tokio::test]
async fn stats_and_settings_are_admin_only() {
    let mut data = tracked();
    data.check_number("0911111111");
    let h = Harness::with(RecordingMessenger::new(), data);

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/stats"))
        .await
        .unwrap();
    let stats = h.messenger.last_to(ADMIN).unwrap().text;
    assert!(stats.contains("Total Users (Private Chats): 1"));
    assert!(stats.contains("Total Groups: 1"));
    assert!(stats.contains("Total Unique Numbers Checked (/chk): 1"));

    h.bot
        .handle_message(text(private_chat(ADMIN), ADMIN, "/settings"))
        .await
        .unwrap();
    assert!(h
        .messenger
        .last_to(ADMIN)
        .unwrap()
        .text
        .starts_with("⚙️ *Admin Settings*"));

    h.bot
        .handle_message(text(private_chat(USER), USER, "/stats"))
        .await
        .unwrap();
    h.bot
        .handle_message(text(private_chat(USER), USER, "/settings"))
        .await
        .unwrap();
    h.bot
        .handle_message(text(private_chat(USER), USER, "/listgroups"))
        .await
        .unwrap();
    assert_eq!(
        h.messenger.texts_to(USER),
        vec![
            "You are not authorized to use this command.".to_string(),
            "Admin only.".to_string(),
            "Admin only.".to_string(),
        ]
    );
}

struct BrokenStore;

impl Store for BrokenStore {
    fn load(&self) -> Result<BotData, StoreError> {
        Ok(BotData::default())
    }

    fn save(&self, _data: &BotData) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }
}

#[tokio::test]
async fn handler_failures_are_reported_to_admin() {
    let messenger = Arc::new(RecordingMessenger::new());
    let settings = BotSettings {
        admin_id: ADMIN,
        clock: ReportClock::default(),
    };
    let bot = DepositBot::new(settings, messenger.clone(), Arc::new(BrokenStore)).unwrap();

    bot.process_message(text(group_chat(GROUP), USER, "0912345678"))
        .await;

    let report = messenger.last_to(ADMIN).unwrap();
    assert_eq!(report.format, TextFormat::Plain);
    assert!(report.text.starts_with("🚨 BOT ERROR ENCOUNTERED 🚨"));
    assert!(report.text.contains("disk full"));
    assert!(report.text.contains(&format!("User/Chat: {GROUP}")));
}
