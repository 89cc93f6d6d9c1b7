//! JSON file backed settings store
//!
//! The whole record is rewritten on every update through a temp file in the
//! same directory, then renamed over the target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use tubedeck_model::{AppSettings, SettingsPatch};

use super::SettingsStore;
use crate::error::StoreError;

#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<AppSettings, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file yet");
                return Ok(AppSettings::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(AppSettings::default());
        }

        let value: serde_json::Value = serde_json::from_str(&contents)?;
        Ok(AppSettings::from_json_value(value)?)
    }

    fn write(&self, settings: &AppSettings) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        let body = serde_json::to_vec_pretty(settings)?;
        tmp.write_all(&body).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn snapshot(&self) -> Result<AppSettings, StoreError> {
        self.read()
    }

    fn update(&self, patch: SettingsPatch) -> Result<AppSettings, StoreError> {
        let _guard = self.write_lock.lock();
        if patch.is_empty() {
            return self.read();
        }
        let settings = self.read()?.patched(&patch);
        self.write(&settings)?;
        info!(path = %self.path.display(), ?patch, "persisted settings");
        Ok(settings)
    }
}
