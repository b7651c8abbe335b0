//! # Quiz Session
//!
//! The quiz state machine: a mode, the current target, and a score.
//!
//! ## Modes
//! - **SingleString** - the guess must be on the required string and hold the target note
//! - **AllStrings** - any cell holding the target note counts
//!
//! Toggling the mode immediately draws a new target shaped for the new mode.
//!
//! ## Target Generation
//! The required string (SingleString only) and the note are drawn
//! independently and uniformly. The generator never picks a cell and reads
//! its note back; every note exists on every string, so any draw is
//! answerable.
//!
//! ## Guesses
//! A correct guess adds one point and replaces the target. An incorrect
//! guess changes nothing. Out-of-range coordinates are rejected with an
//! error and also change nothing.
//!
//! ## Example
//! ```rust
//! use fretquiz::{GuessOutcome, Mode, QuizSession};
//!
//! let mut session = QuizSession::seeded(Mode::AllStrings, 42);
//! let target = session.target().note;
//! let answer = session.board().positions_of(target)[0];
//!
//! let outcome = session.submit_position(answer);
//! assert_eq!(outcome, GuessOutcome::Correct { score: 1 });
//! assert_eq!(session.target().round, 2);
//! ```

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::fretboard::{Fretboard, GuitarString, Position, STRING_COUNT};
use crate::note::{Naming, Note};

/// Which cells count as a correct answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Must match the required string and the note
    #[default]
    SingleString,
    /// Any string, any fret holding the note
    AllStrings,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::SingleString => Mode::AllStrings,
            Mode::AllStrings => Mode::SingleString,
        }
    }

    pub fn label(self, naming: Naming) -> &'static str {
        match (self, naming) {
            (Mode::SingleString, Naming::English) => "Single string",
            (Mode::AllStrings, Naming::English) => "All strings",
            (Mode::SingleString, Naming::Solfege) => "Une seule corde",
            (Mode::AllStrings, Naming::Solfege) => "Toutes les cordes",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::SingleString => f.write_str("single-string"),
            Mode::AllStrings => f.write_str("all-strings"),
        }
    }
}

impl FromStr for Mode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-string" | "single" | "one" => Ok(Mode::SingleString),
            "all-strings" | "all" | "any" => Ok(Mode::AllStrings),
            other => Err(QuizError::ConfigError(format!("unknown mode: {}", other))),
        }
    }
}

/// The current challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub note: Note,
    /// Present only in SingleString mode
    pub required_string: Option<GuitarString>,
    /// 1 for the first target of a session, incremented on every replacement
    pub round: u64,
}

impl Target {
    /// Whether a cell holding `note` answers this target
    pub fn accepts(&self, position: Position, note: Note) -> bool {
        match self.required_string {
            Some(required) => position.string == required && note == self.note,
            None => note == self.note,
        }
    }
}

/// Draw a fresh target for `mode`.
///
/// The string draw happens only in SingleString mode; the note draw is
/// independent of it.
pub fn random_target<R: Rng>(mode: Mode, rng: &mut R, round: u64) -> Target {
    let required_string = match mode {
        Mode::SingleString => Some(GuitarString::ALL[rng.gen_range(0..STRING_COUNT)]),
        Mode::AllStrings => None,
    };
    let note = Note::ALL[rng.gen_range(0..Note::ALL.len())];
    Target {
        note,
        required_string,
        round,
    }
}

/// Result of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum GuessOutcome {
    /// Point scored, new target drawn
    Correct { score: u32 },
    /// Nothing changed; `note` is what the guessed cell holds
    Incorrect { note: Note },
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

/// Quiz state owned by a front end
#[derive(Debug, Clone)]
pub struct QuizSession<R = StdRng> {
    board: Fretboard,
    mode: Mode,
    target: Target,
    score: u32,
    rng: R,
}

impl QuizSession<StdRng> {
    /// Session seeded from OS entropy
    pub fn new(mode: Mode) -> Self {
        QuizSession::with_rng(mode, StdRng::from_entropy())
    }

    /// Reproducible session
    pub fn seeded(mode: Mode, seed: u64) -> Self {
        QuizSession::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        match config.seed {
            Some(seed) => QuizSession::seeded(config.mode, seed),
            None => QuizSession::new(config.mode),
        }
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(mode: Mode, mut rng: R) -> Self {
        let target = random_target(mode, &mut rng, 1);
        debug!(%mode, note = %target.note, string = ?target.required_string, "initial target");
        QuizSession {
            board: Fretboard::standard(),
            mode,
            target,
            score: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Fretboard {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Evaluate a click at raw coordinates.
    ///
    /// `fret` may be the open-string sentinel `-1`, evaluated as fret 0.
    ///
    /// # Errors
    /// [`QuizError::InvalidString`] or [`QuizError::InvalidFret`] for
    /// coordinates off the board; the session is left untouched.
    pub fn submit_guess(&mut self, string: u8, fret: i32) -> Result<GuessOutcome, QuizError> {
        let position = Position::from_click(string, fret)?;
        Ok(self.submit_position(position))
    }

    pub fn submit_position(&mut self, position: Position) -> GuessOutcome {
        let note = self.board.note_at_position(position);
        if !self.target.accepts(position, note) {
            debug!(%position, %note, target = %self.target.note, "incorrect guess");
            return GuessOutcome::Incorrect { note };
        }

        self.score += 1;
        self.next_target();
        debug!(%position, %note, score = self.score, "correct guess");
        GuessOutcome::Correct { score: self.score }
    }

    /// Flip the mode and draw a new target for it
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "mode changed");
        self.next_target();
    }

    /// Switch to `mode`; a no-op if already there
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.toggle_mode();
        }
    }

    fn next_target(&mut self) {
        self.target = random_target(self.mode, &mut self.rng, self.target.round + 1);
        debug!(
            note = %self.target.note,
            string = ?self.target.required_string,
            round = self.target.round,
            "new target"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A cell that answers the current target
    fn answer<R: Rng>(session: &QuizSession<R>) -> Position {
        let target = *session.target();
        session
            .board()
            .positions_of(target.note)
            .into_iter()
            .find(|p| target.required_string.map_or(true, |s| p.string == s))
            .unwrap()
    }

    /// A cell holding the target note on some other string
    fn wrong_string<R: Rng>(session: &QuizSession<R>) -> Position {
        let target = *session.target();
        let required = target.required_string.unwrap();
        session
            .board()
            .positions_of(target.note)
            .into_iter()
            .find(|p| p.string != required)
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = QuizSession::seeded(Mode::SingleString, 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.target().round, 1);
        assert!(session.target().required_string.is_some());

        let session = QuizSession::seeded(Mode::AllStrings, 1);
        assert!(session.target().required_string.is_none());
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let mut a = QuizSession::seeded(Mode::SingleString, 99);
        let mut b = QuizSession::seeded(Mode::SingleString, 99);
        for _ in 0..20 {
            assert_eq!(a.target(), b.target());
            let pos = answer(&a);
            a.submit_position(pos);
            b.submit_position(pos);
        }
    }

    #[test]
    fn test_single_string_wrong_string_never_scores() {
        let mut session = QuizSession::seeded(Mode::SingleString, 3);
        for _ in 0..10 {
            let before = *session.target();
            let outcome = session.submit_position(wrong_string(&session));
            assert_eq!(outcome, GuessOutcome::Incorrect { note: before.note });
            assert_eq!(session.score(), 0);
            assert_eq!(*session.target(), before);
            // Move on to a fresh target
            session.toggle_mode();
            session.toggle_mode();
        }
    }

    #[test]
    fn test_all_strings_any_matching_cell_scores() {
        let mut session = QuizSession::seeded(Mode::AllStrings, 5);
        let mut expected = 0;
        for _ in 0..10 {
            let cells = session.board().positions_of(session.target().note);
            let pick = cells[expected as usize % cells.len()];
            expected += 1;
            assert_eq!(
                session.submit_position(pick),
                GuessOutcome::Correct { score: expected }
            );
        }
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_consecutive_correct_guesses_count_exactly() {
        let mut session = QuizSession::seeded(Mode::SingleString, 11);
        for n in 1..=25u32 {
            let round = session.target().round;
            let outcome = session.submit_position(answer(&session));
            assert!(outcome.is_correct());
            assert_eq!(session.score(), n);
            assert_eq!(session.target().round, round + 1);
        }
    }

    #[test]
    fn test_incorrect_guess_changes_nothing() {
        let mut session = QuizSession::seeded(Mode::AllStrings, 8);
        let before = *session.target();
        let wrong = session
            .board()
            .positions_of(before.note.transpose(1))
            .into_iter()
            .next()
            .unwrap();
        assert!(!session.submit_position(wrong).is_correct());
        assert_eq!(*session.target(), before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_out_of_range_guess_is_rejected() {
        let mut session = QuizSession::seeded(Mode::AllStrings, 8);
        let before = *session.target();
        assert_eq!(session.submit_guess(5, 0), Err(QuizError::InvalidString(5)));
        assert_eq!(session.submit_guess(1, 13), Err(QuizError::InvalidFret(13)));
        assert_eq!(session.submit_guess(1, -2), Err(QuizError::InvalidFret(-2)));
        assert_eq!(*session.target(), before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_open_sentinel_evaluates_fret_zero() {
        // Keep drawing until the target is an open-string note, then answer with -1.
        let mut session = QuizSession::seeded(Mode::AllStrings, 21);
        let mut scored = false;
        for _ in 0..200 {
            let target = *session.target();
            let open = GuitarString::ALL.into_iter().find(|s| s.open_note() == target.note);
            match open {
                Some(string) => {
                    let outcome = session.submit_guess(string.number(), -1).unwrap();
                    assert!(outcome.is_correct());
                    scored = true;
                    break;
                }
                None => {
                    let pos = answer(&session);
                    session.submit_position(pos);
                }
            }
        }
        assert!(scored);
    }

    #[test]
    fn test_toggle_mode_reshapes_target() {
        let mut session = QuizSession::seeded(Mode::SingleString, 2);
        for _ in 0..10 {
            session.toggle_mode();
            assert_eq!(session.mode(), Mode::AllStrings);
            assert!(session.target().required_string.is_none());
            session.toggle_mode();
            assert_eq!(session.mode(), Mode::SingleString);
            assert!(session.target().required_string.is_some());
        }
        assert_eq!(session.target().round, 21);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_set_mode_same_mode_keeps_target() {
        let mut session = QuizSession::seeded(Mode::AllStrings, 4);
        let before = *session.target();
        session.set_mode(Mode::AllStrings);
        assert_eq!(*session.target(), before);
        session.set_mode(Mode::SingleString);
        assert_eq!(session.target().round, before.round + 1);
    }

    #[test]
    fn test_random_targets_cover_all_notes_and_strings() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut notes = std::collections::HashSet::new();
        let mut strings = std::collections::HashSet::new();
        for round in 0..1000 {
            let target = random_target(Mode::SingleString, &mut rng, round);
            notes.insert(target.note);
            strings.insert(target.required_string.unwrap());
        }
        assert_eq!(notes.len(), 12);
        assert_eq!(strings.len(), 4);
    }

    #[test]
    fn test_scenario_low_e_string() {
        let target = Target {
            note: Note::G,
            required_string: None,
            round: 1,
        };
        let board = Fretboard::standard();
        let low_g = Position::from_click(4, 3).unwrap();
        let a_seventh = Position::from_click(3, 7).unwrap();
        assert!(target.accepts(low_g, board.note_at_position(low_g)));
        assert_eq!(board.note_at_position(a_seventh), Note::E);
        assert!(!target.accepts(a_seventh, board.note_at_position(a_seventh)));
    }

    #[test]
    fn test_scenario_low_e_string_through_session() {
        let mut session = QuizSession::seeded(Mode::AllStrings, 17);
        // Answer targets until G comes up
        for _ in 0..500 {
            if session.target().note == Note::G {
                break;
            }
            let pos = answer(&session);
            session.submit_position(pos);
        }
        assert_eq!(session.target().note, Note::G);

        let score = session.score();
        let before = *session.target();
        assert_eq!(session.submit_guess(3, 7), Ok(GuessOutcome::Incorrect { note: Note::E }));
        assert_eq!(*session.target(), before);
        assert_eq!(session.submit_guess(4, 3), Ok(GuessOutcome::Correct { score: score + 1 }));
        assert_eq!(session.target().round, before.round + 1);
    }

    #[test]
    fn test_mode_parse_and_labels() {
        assert_eq!("all".parse::<Mode>(), Ok(Mode::AllStrings));
        assert_eq!("Single-String".parse::<Mode>(), Ok(Mode::SingleString));
        assert!("both".parse::<Mode>().is_err());
        assert_eq!(Mode::SingleString.label(Naming::Solfege), "Une seule corde");
        assert_eq!(Mode::AllStrings.to_string(), "all-strings");
    }
}
