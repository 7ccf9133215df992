// src/application/mod.rs
pub mod cursor;
pub mod projection;
pub mod quote_book;
pub mod quote_store;

pub use cursor::BrowseCursor;
pub use projection::{Projection, ViewFilter};
pub use quote_book::{QuoteBook, QuoteRepository, SettingsRepository};
pub use quote_store::{ImportRow, QuoteStore};
