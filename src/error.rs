//! Error types for the `shelfmap` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `shelfmap`.
///
/// Every variant maps to exit code 1; write failures on stdout are plain
/// [`std::io::Error`]s and exit 2.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Configuration error (invalid value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// The goals file is not valid JSON or does not have the expected shape.
    #[error("goals file error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The goals file cannot be read.
    #[error("goals error: {0}")]
    Goals(String),

    /// A bin holds more items than a shelf position has slots.
    #[error("bin '{bin}' holds {items} items but a position only has {slots} slots")]
    SlotOverflow {
        bin: String,
        items: usize,
        slots: usize,
    },

    /// A grid write fell outside the shelf bounds.
    #[error("slot ({row}, {column}, {index}) is outside the {rows}x{columns}x{slots} shelf")]
    OutOfBounds {
        row: usize,
        column: usize,
        index: usize,
        rows: usize,
        columns: usize,
        slots: usize,
    },

    /// A work order entry names a bin that is not in `bin_contents`.
    #[error("work order refers to unknown bin '{0}'")]
    UnknownBin(String),
}
