use anyhow::{Context, Result};
use quotebook::application::QuoteBook;
use quotebook::infrastructure::{JsonQuoteFile, JsonSettingsFile};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary quote library
#[allow(dead_code)]
pub struct TestLibrary {
    _temp_dir: TempDir,
    pub dir: PathBuf,
    pub data_path: PathBuf,
    pub settings_path: PathBuf,
}

#[allow(dead_code)]
impl TestLibrary {
    /// Create a new library by copying the fixture quote file
    pub fn new() -> Result<Self> {
        let library = Self::empty()?;
        std::fs::copy(fixture_path("quotes.json"), &library.data_path)
            .context("Failed to copy quote fixture")?;
        Ok(library)
    }

    /// Create a library whose files do not exist yet
    pub fn empty() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().to_path_buf();
        Ok(Self {
            data_path: dir.join("quotes.json"),
            settings_path: dir.join("settings.json"),
            dir,
            _temp_dir: temp_dir,
        })
    }

    /// Open a quote book over this library's files
    pub fn open(&self) -> Result<QuoteBook<JsonQuoteFile, JsonSettingsFile>> {
        let quotes = JsonQuoteFile::new(&self.data_path);
        quotes.ensure_exists()?;
        let settings = JsonSettingsFile::new(&self.settings_path);
        settings.ensure_exists()?;
        Ok(QuoteBook::open(quotes, settings))
    }
}

/// Path to a file under tests/fixtures
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Ids the store assigns to the fixture quotes, in file order
#[allow(dead_code)]
pub mod fixture_quotes {
    use quotebook::domain::QuoteId;

    pub const JOBS: QuoteId = QuoteId(1);
    pub const WILDE: QuoteId = QuoteId(2);
    pub const EINSTEIN: QuoteId = QuoteId(3);
    pub const LENNON: QuoteId = QuoteId(4);

    pub const NONEXISTENT: QuoteId = QuoteId(999);
}
