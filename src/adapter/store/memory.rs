//! In-memory store.

use parking_lot::Mutex;

use crate::domain::BotData;
use crate::error::StoreError;
use crate::port::Store;

/// Store that keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<BotData>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    #[must_use]
    pub fn with_data(data: BotData) -> Self {
        Self {
            saved: Mutex::new(data),
            saves: Mutex::new(0),
        }
    }

    /// Last saved snapshot.
    #[must_use]
    pub fn saved(&self) -> BotData {
        self.saved.lock().clone()
    }

    /// Number of `save` calls so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<BotData, StoreError> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, data: &BotData) -> Result<(), StoreError> {
        *self.saved.lock() = data.clone();
        *self.saves.lock() += 1;
        Ok(())
    }
}
