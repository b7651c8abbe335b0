//! # Notes
//!
//! The twelve chromatic pitch classes, spelled with sharps only.
//!
//! Notes are cyclic with period 12: stepping one semitone past `B` lands on
//! `C` again. The fretboard table is built entirely from
//! [`Note::transpose`].
//!
//! ## Naming
//! Notes can be displayed with English letter names (`C#`) or French
//! solfège names (`Do #`). Parsing always takes the English form, and
//! accepts flat spellings of the black keys (`Db` parses as `C#`).
//!
//! ## Example
//! ```rust
//! use fretquiz::Note;
//!
//! assert_eq!(Note::E.transpose(3), Note::G);
//! assert_eq!(Note::B.transpose(1), Note::C);
//! assert_eq!("Bb".parse::<Note>().unwrap(), Note::ASharp);
//! assert_eq!(Note::G.solfege(), "Sol");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A chromatic pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

impl Note {
    /// All twelve notes in chromatic order starting from C
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Semitones above C (0-11)
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    /// Note for a semitone count, reduced mod 12
    pub const fn from_semitone(semitone: u32) -> Note {
        Note::ALL[(semitone % 12) as usize]
    }

    /// Step forward `steps` semitones around the chromatic cycle
    pub const fn transpose(self, steps: u32) -> Note {
        Note::from_semitone(self.semitone() as u32 + steps % 12)
    }

    /// English name with sharps ("C#")
    pub const fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// French solfège name ("Do #")
    pub const fn solfege(self) -> &'static str {
        match self {
            Note::C => "Do",
            Note::CSharp => "Do #",
            Note::D => "Ré",
            Note::DSharp => "Ré #",
            Note::E => "Mi",
            Note::F => "Fa",
            Note::FSharp => "Fa #",
            Note::G => "Sol",
            Note::GSharp => "Sol #",
            Note::A => "La",
            Note::ASharp => "La #",
            Note::B => "Si",
        }
    }

    /// Display label for a naming scheme.
    ///
    /// Solfège labels keep the English name in front, the way the quiz
    /// prompt reads ("G - Sol").
    pub fn label(self, naming: Naming) -> String {
        match naming {
            Naming::English => self.name().to_string(),
            Naming::Solfege => format!("{} - {}", self.name(), self.solfege()),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let base = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(QuizError::UnknownNote(s.to_string())),
        };
        let semitone = match chars.as_str() {
            "" => base,
            "#" => base + 1,
            // Flats are accepted on input only; E# / Fb style spellings are not.
            "b" if !matches!(base, 0 | 5) => base - 1,
            _ => return Err(QuizError::UnknownNote(s.to_string())),
        };
        if semitone != base && matches!(semitone, 5 | 12) {
            // E# and B#
            return Err(QuizError::UnknownNote(s.to_string()));
        }
        Ok(Note::from_semitone(semitone))
    }
}

/// How note and string names are shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    #[default]
    English,
    Solfege,
}

impl FromStr for Naming {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Naming::English),
            "solfege" | "solfège" | "fr" => Ok(Naming::Solfege),
            other => Err(QuizError::ConfigError(format!("unknown naming: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromatic_cycle_wraps() {
        assert_eq!(Note::from_semitone(12), Note::C);
        assert_eq!(Note::from_semitone(16), Note::E);
        assert_eq!(Note::E.transpose(12), Note::E);
        assert_eq!(Note::A.transpose(3), Note::C);
    }

    #[test]
    fn test_transpose_large_steps() {
        assert_eq!(Note::B.transpose(u32::MAX), Note::from_semitone(11 + u32::MAX % 12));
        assert_eq!(Note::C.transpose(12 * 1000 + 7), Note::G);
    }

    #[test]
    fn test_semitones_follow_chromatic_order() {
        for (i, note) in Note::ALL.iter().enumerate() {
            assert_eq!(note.semitone() as usize, i);
        }
    }

    #[test]
    fn test_parse_display_names() {
        for note in Note::ALL {
            assert_eq!(note.to_string().parse::<Note>(), Ok(note));
        }
    }

    #[test]
    fn test_parse_flats_and_case() {
        assert_eq!("Db".parse::<Note>(), Ok(Note::CSharp));
        assert_eq!("eb".parse::<Note>(), Ok(Note::DSharp));
        assert_eq!("Gb".parse::<Note>(), Ok(Note::FSharp));
        assert_eq!("Ab".parse::<Note>(), Ok(Note::GSharp));
        assert_eq!("Bb".parse::<Note>(), Ok(Note::ASharp));
        assert_eq!(" f# ".parse::<Note>(), Ok(Note::FSharp));
    }

    #[test]
    fn test_parse_rejects_unknown_spellings() {
        for bad in ["H", "", "Cb", "Fb", "E#", "B#", "C##", "Do"] {
            assert!(
                matches!(bad.parse::<Note>(), Err(QuizError::UnknownNote(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Note::G.label(Naming::English), "G");
        assert_eq!(Note::G.label(Naming::Solfege), "G - Sol");
        assert_eq!(Note::DSharp.label(Naming::Solfege), "D# - Ré #");
    }

    #[test]
    fn test_naming_from_str() {
        assert_eq!("Solfege".parse::<Naming>(), Ok(Naming::Solfege));
        assert_eq!("english".parse::<Naming>(), Ok(Naming::English));
        assert!("german".parse::<Naming>().is_err());
    }
}
