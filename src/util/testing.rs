// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{QuoteRepository, SettingsRepository};
use crate::domain::{DomainError, Quote, Settings};

/// Shared in-memory quote repository for testing the use cases.
///
/// Serves a configured collection on load and records every saved collection
/// so tests can assert on what would have been written.
///
/// # Examples
///
/// ```
/// use quotebook::application::QuoteRepository;
/// use quotebook::domain::Quote;
/// use quotebook::util::testing::MockQuoteRepository;
///
/// let mock = MockQuoteRepository::builder()
///     .with_quote(Quote::new("Be yourself.", "Oscar Wilde", "Life"))
///     .build();
///
/// assert_eq!(mock.load_quotes().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockQuoteRepository {
    quotes: Vec<Quote>,
    load_failure: Option<String>,
    save_failure: Option<String>,
    saved: RefCell<Vec<Vec<Quote>>>,
}

impl MockQuoteRepository {
    pub fn builder() -> MockQuoteRepositoryBuilder {
        MockQuoteRepositoryBuilder::new()
    }

    /// Every collection passed to `save_quotes`, oldest first.
    pub fn saved(&self) -> Vec<Vec<Quote>> {
        self.saved.borrow().clone()
    }
}

impl QuoteRepository for MockQuoteRepository {
    fn try_load_quotes(&self) -> Result<Vec<Quote>, DomainError> {
        match &self.load_failure {
            Some(message) => Err(DomainError::Storage(message.clone())),
            None => Ok(self.quotes.clone()),
        }
    }

    fn save_quotes(&self, quotes: &[Quote]) -> Result<(), DomainError> {
        if let Some(message) = &self.save_failure {
            return Err(DomainError::Storage(message.clone()));
        }
        self.saved.borrow_mut().push(quotes.to_vec());
        Ok(())
    }
}

/// Builder for MockQuoteRepository
pub struct MockQuoteRepositoryBuilder {
    quotes: Vec<Quote>,
    load_failure: Option<String>,
    save_failure: Option<String>,
}

impl MockQuoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            quotes: vec![],
            load_failure: None,
            save_failure: None,
        }
    }

    /// Add a quote served by load_quotes
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.push(quote);
        self
    }

    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = Quote>) -> Self {
        self.quotes.extend(quotes);
        self
    }

    /// Configure try_load_quotes to fail as if the file were unreadable
    pub fn with_load_failure(mut self, message: &str) -> Self {
        self.load_failure = Some(message.to_string());
        self
    }

    /// Configure save_quotes to fail with a storage error
    pub fn with_save_failure(mut self, message: &str) -> Self {
        self.save_failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockQuoteRepository {
        MockQuoteRepository {
            quotes: self.quotes,
            load_failure: self.load_failure,
            save_failure: self.save_failure,
            saved: RefCell::new(vec![]),
        }
    }
}

impl Default for MockQuoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory settings repository recording every save.
#[derive(Debug, Default)]
pub struct MockSettingsRepository {
    settings: Settings,
    saved: RefCell<Vec<Settings>>,
}

impl MockSettingsRepository {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            saved: RefCell::new(vec![]),
        }
    }

    pub fn saved(&self) -> Vec<Settings> {
        self.saved.borrow().clone()
    }
}

impl SettingsRepository for MockSettingsRepository {
    fn load_settings(&self) -> Settings {
        self.settings.clone()
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        self.saved.borrow_mut().push(settings.clone());
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
