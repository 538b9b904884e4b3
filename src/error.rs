//! Error types for the Bar Ops engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while estimating setups,
//! loading reference data or managing the event calendar.
//!
//! Reference-data misses (unknown zone, unknown accessory, missing module
//! rate) are deliberately absent here: they degrade to fallback values.

use thiserror::Error;

/// The main error type for the Bar Ops engine.
///
/// # Example
///
/// ```
/// use bar_ops_engine::error::EngineError;
///
/// let error = EngineError::InvalidTarget {
///     message: "target_time_minutes must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid target: target_time_minutes must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured engine constant is out of range.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfiguration {
        /// The setting that was rejected.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// The target duration for staff optimization was missing or not positive.
    #[error("Invalid target: {message}")]
    InvalidTarget {
        /// A description of what was wrong with the target.
        message: String,
    },

    /// No event exists with the given id.
    #[error("Event not found: {id}")]
    EventNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// An event payload was rejected.
    #[error("Invalid event field '{field}': {message}")]
    InvalidEvent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
