//! Store port for the bot data snapshot.

use crate::domain::BotData;
use crate::error::StoreError;

/// Loads and saves the whole bot data snapshot.
///
/// Implementations must be thread-safe; `save` is called after every
/// mutation, so it should be cheap for small snapshots.
pub trait Store: Send + Sync {
    /// Load the last saved snapshot, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<BotData, StoreError>;

    /// Replace the saved snapshot.
    fn save(&self, data: &BotData) -> Result<(), StoreError>;
}
