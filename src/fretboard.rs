//! # Fretboard Model
//!
//! A four-string fretboard with frets 0 (open) through 12.
//!
//! ## Strings
//! Strings are numbered 1 (highest pitch) to 4 (lowest):
//!
//! | String | Open note |
//! |--------|-----------|
//! | 1      | G         |
//! | 2      | D         |
//! | 3      | A         |
//! | 4      | E         |
//!
//! Each string's row is the chromatic cycle stepped one semitone per fret
//! from its open note, so fret 12 repeats the open note.
//!
//! ## Example
//! ```rust
//! use fretquiz::{Fretboard, Note};
//!
//! let board = Fretboard::standard();
//! assert_eq!(board.note_at(4, 0)?, Note::E);
//! assert_eq!(board.note_at(4, 3)?, Note::G);
//! assert_eq!(board.note_at(4, 12)?, Note::E);
//! assert!(board.note_at(5, 0).is_err());
//! # Ok::<(), fretquiz::QuizError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::note::{Naming, Note};

/// Number of strings on the board
pub const STRING_COUNT: usize = 4;

/// Highest fret on the board
pub const MAX_FRET: u8 = 12;

/// Number of positions per string (frets 0 through 12)
pub const FRET_COUNT: usize = MAX_FRET as usize + 1;

/// Fret value used by the open-string click zone left of the nut
pub const OPEN_CLICK_SENTINEL: i32 = -1;

/// One of the four strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GuitarString {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl GuitarString {
    /// Strings in number order, 1 to 4
    pub const ALL: [GuitarString; STRING_COUNT] = [
        GuitarString::First,
        GuitarString::Second,
        GuitarString::Third,
        GuitarString::Fourth,
    ];

    pub fn from_number(number: u8) -> Result<Self, QuizError> {
        match number {
            1 => Ok(GuitarString::First),
            2 => Ok(GuitarString::Second),
            3 => Ok(GuitarString::Third),
            4 => Ok(GuitarString::Fourth),
            other => Err(QuizError::InvalidString(other)),
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Row index into the fretboard table (0-3)
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn open_note(self) -> Note {
        match self {
            GuitarString::First => Note::G,
            GuitarString::Second => Note::D,
            GuitarString::Third => Note::A,
            GuitarString::Fourth => Note::E,
        }
    }

    /// Display label: "E" in English, "E (mi)" in solfège
    pub fn label(self, naming: Naming) -> String {
        let open = self.open_note();
        match naming {
            Naming::English => open.name().to_string(),
            Naming::Solfege => format!("{} ({})", open.name(), open.solfege().to_lowercase()),
        }
    }
}

impl TryFrom<u8> for GuitarString {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GuitarString::from_number(value)
    }
}

impl From<GuitarString> for u8 {
    fn from(string: GuitarString) -> u8 {
        string.number()
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A fret position, 0 (open) to 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Fret(u8);

impl Fret {
    pub const OPEN: Fret = Fret(0);

    pub fn new(fret: u8) -> Result<Self, QuizError> {
        if fret > MAX_FRET {
            return Err(QuizError::InvalidFret(fret as i32));
        }
        Ok(Fret(fret))
    }

    /// Fret from a click on the board.
    ///
    /// The open-string click zone reports [`OPEN_CLICK_SENTINEL`], which is
    /// the same position as fret 0.
    pub fn from_click(fret: i32) -> Result<Self, QuizError> {
        if fret == OPEN_CLICK_SENTINEL {
            return Ok(Fret::OPEN);
        }
        u8::try_from(fret)
            .map_err(|_| QuizError::InvalidFret(fret))
            .and_then(Fret::new)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Fret> {
        (0..=MAX_FRET).map(Fret)
    }
}

impl TryFrom<u8> for Fret {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Fret::new(value)
    }
}

impl From<Fret> for u8 {
    fn from(fret: Fret) -> u8 {
        fret.0
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub string: GuitarString,
    pub fret: Fret,
}

impl Position {
    pub const fn new(string: GuitarString, fret: Fret) -> Self {
        Position { string, fret }
    }

    /// Validate raw click coordinates, accepting the open-string sentinel
    pub fn from_click(string: u8, fret: i32) -> Result<Self, QuizError> {
        Ok(Position {
            string: GuitarString::from_number(string)?,
            fret: Fret::from_click(fret)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string {} fret {}", self.string, self.fret)
    }
}

type Table = [[Note; FRET_COUNT]; STRING_COUNT];

const fn build_table() -> Table {
    let mut table = [[Note::C; FRET_COUNT]; STRING_COUNT];
    let mut s = 0;
    while s < STRING_COUNT {
        let open = GuitarString::ALL[s].open_note();
        let mut f = 0;
        while f < FRET_COUNT {
            table[s][f] = open.transpose(f as u32);
            f += 1;
        }
        s += 1;
    }
    table
}

const STANDARD_TABLE: Table = build_table();

/// Immutable (string, fret) → note table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    table: Table,
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard::standard()
    }
}

impl Fretboard {
    /// The G-D-A-E board
    pub const fn standard() -> Self {
        Fretboard {
            table: STANDARD_TABLE,
        }
    }

    /// Look up a note from raw coordinates.
    ///
    /// # Errors
    /// [`QuizError::InvalidString`] outside 1-4, [`QuizError::InvalidFret`]
    /// outside 0-12.
    pub fn note_at(&self, string: u8, fret: u8) -> Result<Note, QuizError> {
        let position = Position::new(GuitarString::from_number(string)?, Fret::new(fret)?);
        Ok(self.note_at_position(position))
    }

    pub fn note_at_position(&self, position: Position) -> Note {
        self.table[position.string.index()][position.fret.number() as usize]
    }

    pub fn string_notes(&self, string: GuitarString) -> &[Note; FRET_COUNT] {
        &self.table[string.index()]
    }

    /// Every cell holding `note`, by string then fret
    pub fn positions_of(&self, note: Note) -> Vec<Position> {
        GuitarString::ALL
            .iter()
            .flat_map(|&string| Fret::all().map(move |fret| Position::new(string, fret)))
            .filter(|&position| self.note_at_position(position) == note)
            .collect()
    }

    /// The whole table, string 1 first
    pub fn note_grid(&self) -> Vec<Vec<Note>> {
        self.table.iter().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_chromatic_cycle() {
        let board = Fretboard::standard();
        for string in GuitarString::ALL {
            let open = string.open_note().semitone() as u32;
            for fret in 0..=MAX_FRET {
                assert_eq!(
                    board.note_at(string.number(), fret).unwrap(),
                    Note::from_semitone(open + fret as u32),
                    "string {} fret {}",
                    string,
                    fret
                );
            }
        }
    }

    #[test]
    fn test_known_rows() {
        let board = Fretboard::standard();
        use Note::*;
        assert_eq!(
            board.string_notes(GuitarString::Fourth),
            &[E, F, FSharp, G, GSharp, A, ASharp, B, C, CSharp, D, DSharp, E]
        );
        assert_eq!(
            board.string_notes(GuitarString::First),
            &[G, GSharp, A, ASharp, B, C, CSharp, D, DSharp, E, F, FSharp, G]
        );
    }

    #[test]
    fn test_note_at_rejects_out_of_range() {
        let board = Fretboard::standard();
        assert_eq!(board.note_at(0, 0), Err(QuizError::InvalidString(0)));
        assert_eq!(board.note_at(5, 0), Err(QuizError::InvalidString(5)));
        assert_eq!(board.note_at(1, 13), Err(QuizError::InvalidFret(13)));
    }

    #[test]
    fn test_fret_from_click() {
        assert_eq!(Fret::from_click(-1), Ok(Fret::OPEN));
        assert_eq!(Fret::from_click(7).map(Fret::number), Ok(7));
        assert_eq!(Fret::from_click(-2), Err(QuizError::InvalidFret(-2)));
        assert_eq!(Fret::from_click(300), Err(QuizError::InvalidFret(300)));
    }

    #[test]
    fn test_every_note_on_every_string() {
        let board = Fretboard::standard();
        for note in Note::ALL {
            let positions = board.positions_of(note);
            for string in GuitarString::ALL {
                assert!(positions.iter().any(|p| p.string == string));
            }
            let expected = if matches!(note, Note::E | Note::A | Note::D | Note::G) {
                5
            } else {
                4
            };
            assert_eq!(positions.len(), expected, "{}", note);
        }
    }

    #[test]
    fn test_string_labels() {
        assert_eq!(GuitarString::Fourth.label(Naming::Solfege), "E (mi)");
        assert_eq!(GuitarString::Second.label(Naming::Solfege), "D (ré)");
        assert_eq!(GuitarString::First.label(Naming::Solfege), "G (sol)");
        assert_eq!(GuitarString::Third.label(Naming::English), "A");
    }

    #[test]
    fn test_note_grid_shape() {
        let grid = Fretboard::standard().note_grid();
        assert_eq!(grid.len(), STRING_COUNT);
        assert!(grid.iter().all(|row| row.len() == FRET_COUNT));
        assert_eq!(grid[2][0], Note::A);
    }
}
