use parking_lot::RwLock;
use tracing::debug;
use tubedeck_model::{AppSettings, SettingsPatch};

use crate::error::StoreError;

/// Owner of the persisted settings record
///
/// Readers get snapshots; all mutation goes through [`update`](Self::update),
/// which the implementation must serialize.
pub trait SettingsStore: Send + Sync {
    fn snapshot(&self) -> Result<AppSettings, StoreError>;

    /// Apply `patch` and return the resulting record
    fn update(&self, patch: SettingsPatch) -> Result<AppSettings, StoreError>;
}

/// Lock-guarded record held in memory
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<AppSettings>,
}

impl InMemorySettingsStore {
    pub fn new(initial: AppSettings) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn snapshot(&self) -> Result<AppSettings, StoreError> {
        Ok(self.settings.read().clone())
    }

    fn update(&self, patch: SettingsPatch) -> Result<AppSettings, StoreError> {
        let mut settings = self.settings.write();
        settings.apply(&patch);
        debug!(?patch, "applied settings patch in memory");
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_update_returns_new_record() {
        let store = InMemorySettingsStore::default();
        let updated = store
            .update(SettingsPatch::new().with_tracking_enabled(true))
            .unwrap();
        assert!(updated.tracking_enabled);
        assert!(store.snapshot().unwrap().tracking_enabled);
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let store = Arc::new(InMemorySettingsStore::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let patch = if i % 2 == 0 {
                        SettingsPatch::new().with_hls_enabled(true)
                    } else {
                        SettingsPatch::new().with_tracking_enabled(true)
                    };
                    store.update(patch).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let settings = store.snapshot().unwrap();
        assert!(settings.hls_enabled);
        assert!(settings.tracking_enabled);
    }
}
