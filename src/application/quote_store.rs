// src/application/quote_store.rs
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use crate::constants::{MAX_RATING, MIN_RATING, UNRATED};
use crate::domain::{normalize_rating, DomainError, Quote, QuoteFields, QuoteId, Record, Stats};

/// One raw row read from an import source, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    pub text: String,
    pub author: String,
    pub category: String,
    pub rating: Option<String>,
}

/// Authoritative in-memory quote collection.
///
/// Owns every record and keeps the sorted category and author indexes in
/// step with the records: each mutating call rebuilds them before returning.
#[derive(Debug, Default)]
pub struct QuoteStore {
    records: Vec<Record>,
    last_id: u64,
    categories: Vec<String>,
    authors: Vec<String>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded quotes, assigning ids in the given order.
    pub fn from_quotes(quotes: impl IntoIterator<Item = Quote>) -> Self {
        let mut store = Self::new();
        for quote in quotes {
            store.push(quote);
        }
        store.reindex();
        debug!(count = store.len(), "Store populated");
        store
    }

    fn push(&mut self, quote: Quote) -> QuoteId {
        self.last_id += 1;
        let id = QuoteId(self.last_id);
        self.records.push(Record { id, quote });
        id
    }

    fn reindex(&mut self) {
        let categories: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.quote.category.as_str())
            .collect();
        let authors: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.quote.author.as_str())
            .collect();
        self.categories = categories.into_iter().map(String::from).collect();
        self.authors = authors.into_iter().map(String::from).collect();
    }

    fn record_mut(&mut self, id: QuoteId) -> Result<&mut Record, DomainError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::QuoteNotFound(id))
    }

    /// Append a new unrated quote. Every field must be non-empty after trimming.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, fields: &QuoteFields) -> Result<QuoteId, DomainError> {
        let fields = fields.validated()?;
        let id = self.push(Quote::new(fields.text, fields.author, fields.category));
        self.reindex();
        info!(quote_id = %id, "Added quote");
        Ok(id)
    }

    /// Overwrite text, author and category of a record. The rating is kept.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, id: QuoteId, fields: &QuoteFields) -> Result<(), DomainError> {
        let fields = fields.trimmed();
        let record = self.record_mut(id)?;
        record.quote.text = fields.text;
        record.quote.author = fields.author;
        record.quote.category = fields.category;
        self.reindex();
        info!(quote_id = %id, "Edited quote");
        Ok(())
    }

    /// Delete exactly the identified record and hand it back.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: QuoteId) -> Result<Quote, DomainError> {
        let index = self.position(id).ok_or(DomainError::QuoteNotFound(id))?;
        let removed = self.records.remove(index);
        self.reindex();
        info!(quote_id = %id, "Deleted quote");
        Ok(removed.quote)
    }

    /// Set the star rating. Values outside 1..=5 are rejected, not clamped.
    #[instrument(level = "debug", skip(self))]
    pub fn rate(&mut self, id: QuoteId, stars: i64) -> Result<(), DomainError> {
        if !(MIN_RATING..=MAX_RATING).contains(&stars) {
            return Err(DomainError::RatingOutOfRange(stars));
        }
        let record = self.record_mut(id)?;
        // range checked above
        record.quote.rating = stars as u8;
        info!(quote_id = %id, stars, "Rated quote");
        Ok(())
    }

    /// Append every row, cleaning fields but never rejecting one.
    ///
    /// Unlike [`QuoteStore::add`] no field is required here, and a missing or
    /// malformed rating becomes unrated instead of failing the row.
    /// Returns the records that were appended.
    pub fn import_records(&mut self, rows: impl IntoIterator<Item = ImportRow>) -> &[Record] {
        let start = self.records.len();
        for row in rows {
            let quote = Quote {
                text: row.text.trim().to_string(),
                author: row.author.trim().to_string(),
                category: row.category.trim().to_string(),
                rating: parse_rating(row.rating.as_deref()),
            };
            self.push(quote);
        }
        self.reindex();
        let imported = &self.records[start..];
        info!(count = imported.len(), "Imported quotes");
        imported
    }

    /// Rows of `(text, author, category, rating)` in store order.
    pub fn export_records(&self) -> Vec<[String; 4]> {
        export_records(self.records.iter().map(|r| &r.quote))
    }

    pub fn get(&self, id: QuoteId) -> Result<&Record, DomainError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(DomainError::QuoteNotFound(id))
    }

    pub fn position(&self, id: QuoteId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Clone the quotes out in store order, ready to be persisted.
    pub fn to_quotes(&self) -> Vec<Quote> {
        self.records.iter().map(|r| r.quote.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.records.len(),
            categories: self.categories.len(),
            authors: self.authors.len(),
            rated: self.records.iter().filter(|r| r.quote.is_rated()).count(),
        }
    }
}

/// Map quotes to export rows. The rating is always written, 0 included.
pub fn export_records<'a>(quotes: impl IntoIterator<Item = &'a Quote>) -> Vec<[String; 4]> {
    quotes
        .into_iter()
        .map(|q| {
            [
                q.text.clone(),
                q.author.clone(),
                q.category.clone(),
                q.rating.to_string(),
            ]
        })
        .collect()
}

/// Lenient rating parse used on import: anything unusable means unrated.
pub fn parse_rating(raw: Option<&str>) -> u8 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNRATED;
    };
    match raw.parse::<i64>() {
        Ok(rating) => normalize_rating(rating),
        Err(e) => {
            debug!(raw, error = %e, "Unparsable rating, importing as unrated");
            UNRATED
        }
    }
}
