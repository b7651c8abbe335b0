//! # View State
//!
//! Presentation state that never affects scoring, and the snapshot front
//! ends render from.
//!
//! [`ViewState`] holds the debug-overlay flag and the hovered cell.
//! [`QuizView::capture`] combines it with a [`QuizSession`] into one
//! serializable value: labels already resolved for the chosen [`Naming`],
//! and the note grid only when the overlay is on.

use rand::Rng;
use serde::Serialize;

use crate::error::QuizError;
use crate::fretboard::{GuitarString, Position};
use crate::note::{Naming, Note};
use crate::session::{Mode, QuizSession};

/// Ephemeral presentation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub debug: bool,
    pub hovered: Option<Position>,
}

impl ViewState {
    pub fn new(debug: bool) -> Self {
        ViewState {
            debug,
            hovered: None,
        }
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn set_hovered(&mut self, hovered: Option<Position>) {
        self.hovered = hovered;
    }

    /// Hover raw coordinates; accepts the open-string sentinel
    pub fn hover(&mut self, string: u8, fret: i32) -> Result<(), QuizError> {
        self.hovered = Some(Position::from_click(string, fret)?);
        Ok(())
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }
}

/// Everything a front end displays, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub target_note: Note,
    pub target_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_string: Option<GuitarString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_string_label: Option<String>,
    pub round: u64,
    pub score: u32,
    pub mode: Mode,
    pub mode_label: String,
    pub debug: bool,
    pub hovered: Option<Position>,
    /// Note labels by string then fret; only while debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_grid: Option<Vec<Vec<String>>>,
}

impl QuizView {
    pub fn capture<R: Rng>(session: &QuizSession<R>, view: &ViewState, naming: Naming) -> Self {
        let target = session.target();
        let note_grid = view.debug.then(|| {
            session
                .board()
                .note_grid()
                .into_iter()
                .map(|row| row.into_iter().map(|note| note.name().to_string()).collect())
                .collect()
        });

        QuizView {
            target_note: target.note,
            target_label: target.note.label(naming),
            required_string: target.required_string,
            required_string_label: target.required_string.map(|s| s.label(naming)),
            round: target.round,
            score: session.score(),
            mode: session.mode(),
            mode_label: session.mode().label(naming).to_string(),
            debug: view.debug,
            hovered: view.hovered,
            note_grid,
        }
    }
}
