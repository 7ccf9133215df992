// src/domain/quote.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

use crate::constants::{MAX_RATING, UNRATED};
use crate::domain::DomainError;

/// Identity of a record inside one `QuoteStore`.
///
/// Ids are handed out by the store when a record enters it and are never
/// reused for the lifetime of that store. They are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuoteId(pub u64);

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quotation as stored in the quote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: u8,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
            rating: UNRATED,
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating > UNRATED
    }
}

/// Map a stored or imported rating onto 0..=5. Anything else is unrated.
pub fn normalize_rating(raw: i64) -> u8 {
    match u8::try_from(raw) {
        Ok(rating) if i64::from(rating) <= MAX_RATING => rating,
        _ => {
            warn!(rating = raw, "Rating out of range, treating as unrated");
            UNRATED
        }
    }
}

fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    i64::deserialize(deserializer).map(normalize_rating)
}

/// The user-editable part of a quote: everything except the rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFields {
    pub text: String,
    pub author: String,
    pub category: String,
}

impl QuoteFields {
    pub fn new(text: impl Into<String>, author: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            text: self.text.trim().to_string(),
            author: self.author.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }

    /// Trim all fields and reject the first one left empty.
    pub fn validated(&self) -> Result<Self, DomainError> {
        let fields = self.trimmed();
        if fields.text.is_empty() {
            return Err(DomainError::EmptyField("quote"));
        }
        if fields.author.is_empty() {
            return Err(DomainError::EmptyField("author"));
        }
        if fields.category.is_empty() {
            return Err(DomainError::EmptyField("category"));
        }
        Ok(fields)
    }
}

impl From<&Quote> for QuoteFields {
    fn from(quote: &Quote) -> Self {
        Self::new(&quote.text, &quote.author, &quote.category)
    }
}

/// A quote together with the identity the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: QuoteId,
    #[serde(flatten)]
    pub quote: Quote,
}

/// Summary counts over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub categories: usize,
    pub authors: usize,
    pub rated: usize,
}
