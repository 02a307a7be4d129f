#![allow(dead_code)]

use std::sync::Arc;

use depobot::adapter::store::MemoryStore;
use depobot::application::bot::{BotSettings, DepositBot};
use depobot::domain::{BotData, ReportClock};
use depobot::testkit::messenger::RecordingMessenger;

pub const ADMIN: i64 = 999;
pub const GROUP: i64 = -100_200;
pub const USER: i64 = 42;

/// Bot wired to a recording messenger and an in-memory store.
pub struct Harness {
    pub bot: DepositBot,
    pub messenger: Arc<RecordingMessenger>,
    pub store: Arc<MemoryStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(RecordingMessenger::new(), BotData::default())
    }

    pub fn with(messenger: RecordingMessenger, data: BotData) -> Self {
        let messenger = Arc::new(messenger);
        let store = Arc::new(MemoryStore::with_data(data));
        let settings = BotSettings {
            admin_id: ADMIN,
            clock: ReportClock::default(),
        };
        let bot = DepositBot::new(settings, messenger.clone(), store.clone()).expect("load data");
        Self {
            bot,
            messenger,
            store,
        }
    }

    pub fn today(&self) -> String {
        self.bot.settings().clock.current_key()
    }
}

/// A filled deposit report form.
pub fn report(khaifa: &str, contact: &str) -> String {
    format!(
        "Gmail        - {contact}\n\
         Tele name    - Someone\n\
         Date         - 17.5.2024\n\
         Phone number - 09 111 222 333\n\n\
         Khaifa - {khaifa}"
    )
}
