//! # Error Types
//!
//! All fallible operations in the quiz return [`QuizError`].
//!
//! An incorrect guess is not an error: it is reported as
//! [`GuessOutcome::Incorrect`](crate::GuessOutcome::Incorrect). Errors are
//! reserved for input the model cannot interpret at all.
//!
//! ## Error Types
//! - `InvalidString` - string number outside 1-4
//! - `InvalidFret` - fret outside 0-12 (the click sentinel -1 is accepted where documented)
//! - `UnknownNote` - a note name that is not one of the 12 pitch classes
//! - `ConfigError` - invalid YAML configuration
//! - `InvalidCommand` - a terminal command that could not be parsed
//!
//! ## Usage
//! ```rust
//! use fretquiz::{Fretboard, QuizError};
//!
//! let board = Fretboard::standard();
//! match board.note_at(5, 3) {
//!     Ok(note) => println!("{}", note),
//!     Err(QuizError::InvalidString(s)) => eprintln!("no string {}", s),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    /// String number outside 1-4.
    ///
    /// # Example
    /// ```
    /// # use fretquiz::QuizError;
    /// let err = QuizError::InvalidString(7);
    /// assert_eq!(err.to_string(), "Invalid string 7: expected 1-4");
    /// ```
    #[error("Invalid string {0}: expected 1-4")]
    InvalidString(u8),

    /// Fret outside 0-12.
    ///
    /// # Example
    /// ```
    /// # use fretquiz::QuizError;
    /// let err = QuizError::InvalidFret(13);
    /// assert_eq!(err.to_string(), "Invalid fret 13: expected 0-12 (or -1 for open)");
    /// ```
    #[error("Invalid fret {0}: expected 0-12 (or -1 for open)")]
    InvalidFret(i32),

    /// Note name that does not parse.
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    /// Invalid configuration.
    ///
    /// Occurs when the YAML is malformed or holds unsupported values.
    ///
    /// # Example
    /// ```
    /// # use fretquiz::QuizError;
    /// let err = QuizError::ConfigError("unknown mode: both".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: unknown mode: both");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Terminal command that could not be parsed.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
