// src/infrastructure/settings_file.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::application::SettingsRepository;
use crate::domain::{DomainError, Settings};
use crate::infrastructure::json_file::{read_json, write_json};

/// Settings record persisted as a JSON object.
#[derive(Debug, Clone)]
pub struct JsonSettingsFile {
    path: PathBuf,
}

impl JsonSettingsFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write default settings when the file does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        info!(path = %self.path.display(), "Creating default settings file");
        write_json(&self.path, &Settings::default())
    }
}

impl SettingsRepository for JsonSettingsFile {
    fn load_settings(&self) -> Settings {
        match read_json::<Settings>(&self.path) {
            Ok(settings) => {
                debug!(?settings, "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = ?e, "Could not load settings, using defaults");
                Settings::default()
            }
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        write_json(&self.path, settings).map_err(|e| {
            error!(path = %self.path.display(), error = ?e, "Error saving settings");
            DomainError::Storage(format!("{e:#}"))
        })
    }
}
