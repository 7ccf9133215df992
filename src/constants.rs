// src/constants.rs
//
// Application-wide constants shared by the store, the file formats and the CLI.

/// Rating of a quote nobody has rated yet.
pub const UNRATED: u8 = 0;

/// Lowest number of stars accepted by a manual rating.
pub const MIN_RATING: i64 = 1;

/// Highest number of stars accepted by a manual rating.
pub const MAX_RATING: i64 = 5;

/// Header row written on CSV export and looked up on CSV import.
///
/// Import matches these names exactly (case-sensitive).
pub const CSV_HEADER: [&str; 4] = ["Quote", "Author", "Category", "Rating"];

/// Directory below the platform data dir holding the default files.
pub const APP_DIR_NAME: &str = "quotebook";

/// Default file name of the quote collection.
pub const DATA_FILE_NAME: &str = "quotes.json";

/// Default file name of the settings record.
pub const SETTINGS_FILE_NAME: &str = "settings.json";
