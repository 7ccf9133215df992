// src/infrastructure/mod.rs
pub mod csv_file;
pub mod json_file;
pub mod settings_file;

pub use json_file::JsonQuoteFile;
pub use settings_file::JsonSettingsFile;
