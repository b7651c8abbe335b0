//! # fretquiz
//!
//! A guitar fretboard note-finding quiz.
//!
//! The player is shown a target note, optionally tied to one string, and
//! answers by picking a cell on a four-string board (frets 0 through 12).
//!
//! ## Modules
//! - `note` - the 12 pitch classes and their names
//! - `fretboard` - strings, frets, and the (string, fret) → note table
//! - `layout` - board coordinates for click targets, fret wires, inlays
//! - `session` - the quiz state machine
//! - `view` - hover/debug state and the display snapshot
//! - `config` - YAML configuration
//! - `command` - terminal command parsing
//!
//! ## Example
//! ```rust
//! use fretquiz::{Mode, QuizSession};
//!
//! let mut session = QuizSession::seeded(Mode::AllStrings, 7);
//! let note = session.target().note;
//! let cell = session.board().positions_of(note)[0];
//! assert!(session.submit_guess(cell.string.number(), cell.fret.number() as i32)?.is_correct());
//! assert_eq!(session.score(), 1);
//! # Ok::<(), fretquiz::QuizError>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod layout;
pub mod note;
pub mod session;
pub mod view;

pub use config::QuizConfig;
pub use error::*;
pub use fretboard::{Fret, Fretboard, GuitarString, Position, MAX_FRET, OPEN_CLICK_SENTINEL};
pub use layout::{fret_pixel_position, BoardLayout, LayoutSnapshot, Point};
pub use note::{Naming, Note};
pub use session::{random_target, GuessOutcome, Mode, QuizSession, Target};
pub use view::{QuizView, ViewState};

/// Look up the note at raw coordinates on the standard board
pub fn note_at(string: u8, fret: u8) -> Result<Note, QuizError> {
    Fretboard::standard().note_at(string, fret)
}
