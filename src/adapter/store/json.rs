//! JSON file store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::BotData;
use crate::error::StoreError;
use crate::port::Store;

/// Keeps the bot data snapshot in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<BotData, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No data file yet, starting empty");
            return Ok(BotData::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BotData::default());
        }
        let data: BotData = serde_json::from_str(&content)?;
        info!(
            path = %self.path.display(),
            users = data.users.len(),
            groups = data.groups.len(),
            "Loaded bot data"
        );
        Ok(data)
    }

    /// Write the snapshot atomically via a temp file and rename.
    fn save(&self, data: &BotData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), "Saved bot data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatKind;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bot_data.json"));
        assert_eq!(store.load().unwrap(), BotData::default());
    }

    #[test]
    fn saved_data_loads_back() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("bot_data.json"));

        let mut data = BotData::default();
        data.register_chat(42, ChatKind::Private);
        data.register_chat(-100, ChatKind::Supergroup);
        data.check_number("0912345678");
        data.append_entry(-100, "2024-05-17", "17.5.2024    Alpha    a@b.c".into());
        store.save(&data).unwrap();

        assert_eq!(store.load().unwrap(), data);
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bot_data.json"));

        let mut data = BotData::default();
        data.register_chat(1, ChatKind::Private);
        store.save(&data).unwrap();
        data.register_chat(2, ChatKind::Private);
        store.save(&data).unwrap();

        assert_eq!(store.load().unwrap().users.len(), 2);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot_data.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Serde(_))));
    }
}
