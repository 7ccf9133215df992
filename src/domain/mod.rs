// src/domain/mod.rs
pub mod error;
pub mod quote;
pub mod settings;

pub use error::DomainError;
pub use quote::{normalize_rating, Quote, QuoteFields, QuoteId, Record, Stats};
pub use settings::{Settings, Theme};
