// src/infrastructure/json_file.rs
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::application::QuoteRepository;
use crate::domain::{DomainError, Quote};

/// Read and parse a JSON document.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Serialize `value` as 4-space indented JSON and replace `path` with it.
///
/// The document is written to a temporary file in the target directory and
/// renamed over the target, so readers never see a half-written file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    let mut temp = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(&buffer)
        .context("Failed to write JSON to temporary file")?;
    temp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Strict load of a quote file.
pub fn try_load_quotes(path: impl AsRef<Path>) -> Result<Vec<Quote>> {
    read_json(path)
}

/// Load a quote file, falling back to an empty collection on any failure.
pub fn load_quotes(path: impl AsRef<Path>) -> Vec<Quote> {
    let path = path.as_ref();
    match try_load_quotes(path) {
        Ok(quotes) => {
            info!(path = %path.display(), count = quotes.len(), "Loaded quotes");
            quotes
        }
        Err(e) => {
            warn!(path = %path.display(), error = ?e, "Could not load quotes, starting empty");
            Vec::new()
        }
    }
}

pub fn save_quotes(path: impl AsRef<Path>, quotes: &[Quote]) -> Result<()> {
    write_json(&path, quotes)?;
    debug!(path = %path.as_ref().display(), count = quotes.len(), "Wrote quote file");
    Ok(())
}

/// Quote collection persisted as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonQuoteFile {
    path: PathBuf,
}

impl JsonQuoteFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection when the file does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        info!(path = %self.path.display(), "Creating empty quote file");
        save_quotes(&self.path, &[])
    }
}

impl QuoteRepository for JsonQuoteFile {
    fn try_load_quotes(&self) -> Result<Vec<Quote>, DomainError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No quote file yet");
            return Ok(Vec::new());
        }
        let quotes = try_load_quotes(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = ?e, "Could not load quotes");
            DomainError::Storage(format!("{e:#}"))
        })?;
        info!(path = %self.path.display(), count = quotes.len(), "Loaded quotes");
        Ok(quotes)
    }

    fn load_quotes(&self) -> Vec<Quote> {
        load_quotes(&self.path)
    }

    fn save_quotes(&self, quotes: &[Quote]) -> Result<(), DomainError> {
        save_quotes(&self.path, quotes).map_err(|e| {
            error!(path = %self.path.display(), error = ?e, "Error saving quotes");
            DomainError::Storage(format!("{e:#}"))
        })
    }
}
