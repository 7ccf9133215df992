// src/domain/error.rs
use crate::domain::QuoteId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quote not found: {0}")]
    QuoteNotFound(QuoteId),
    #[error("All fields are required: {0} is empty")]
    EmptyField(&'static str),
    #[error("Rating must be between 1 and 5 stars, got {0}")]
    RatingOutOfRange(i64),
    #[error("No quotes available!")]
    NoQuotes,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Quote file could not be read, refusing to overwrite it: {0}")]
    Unreadable(String),
}
