//! # Configuration
//!
//! Quiz settings read from YAML. Every key is optional:
//!
//! ```yaml
//! mode: all-strings
//! naming: solfege
//! seed: 42
//! debug: false
//! layout:
//!   fret-spacing: 40
//!   finger-shift: 40
//! ```
//!
//! The YAML is first deserialized into [`RawConfig`] (plain strings and
//! numbers) and then validated into [`QuizConfig`], so that bad values
//! surface as [`QuizError::ConfigError`] with a readable message.
//!
//! ## Example
//! ```rust
//! use fretquiz::{Mode, Naming, QuizConfig};
//!
//! let config = QuizConfig::from_yaml("mode: all-strings\nnaming: solfege\n")?;
//! assert_eq!(config.mode, Mode::AllStrings);
//! assert_eq!(config.naming, Naming::Solfege);
//! assert_eq!(config.seed, None);
//! # Ok::<(), fretquiz::QuizError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::QuizError;
use crate::layout::{fret_pixel_position, BoardLayout};
use crate::note::Naming;
use crate::session::Mode;

/// Validated quiz configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizConfig {
    pub mode: Mode,
    pub naming: Naming,
    /// Fixed seed for reproducible targets; entropy when absent
    pub seed: Option<u64>,
    /// Start with the note-grid overlay shown
    pub debug: bool,
    pub layout: BoardLayout,
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub mode: Option<String>,
    pub naming: Option<String>,
    pub seed: Option<u64>,
    pub debug: Option<bool>,
    pub layout: Option<RawLayout>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawLayout {
    pub fret_spacing: Option<f64>,
    pub string_spacing: Option<f64>,
    pub first_string_y: Option<f64>,
    pub finger_shift: Option<f64>,
    pub wire_shift: Option<f64>,
    pub open_offset: Option<f64>,
}

impl QuizConfig {
    pub fn from_yaml(content: &str) -> Result<Self, QuizError> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(QuizConfig::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| QuizError::ConfigError(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| QuizError::ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, QuizError> {
        let mode = match raw.mode {
            Some(ref m) => m.parse()?,
            None => Mode::default(),
        };

        let naming = match raw.naming {
            Some(ref n) => n.parse()?,
            None => Naming::default(),
        };

        let layout = match raw.layout {
            Some(raw_layout) => Self::parse_layout(raw_layout)?,
            None => BoardLayout::default(),
        };

        Ok(QuizConfig {
            mode,
            naming,
            seed: raw.seed,
            debug: raw.debug.unwrap_or(false),
            layout,
        })
    }

    fn parse_layout(raw: RawLayout) -> Result<BoardLayout, QuizError> {
        let defaults = BoardLayout::default();

        let positive = |name: &str, value: Option<f64>, default: f64| -> Result<f64, QuizError> {
            match value {
                Some(v) if v.is_finite() && v > 0.0 => Ok(v),
                Some(v) => Err(QuizError::ConfigError(format!(
                    "layout {} must be a positive number, got {}",
                    name, v
                ))),
                None => Ok(default),
            }
        };
        let finite = |name: &str, value: Option<f64>, default: f64| -> Result<f64, QuizError> {
            match value {
                Some(v) if v.is_finite() => Ok(v),
                Some(v) => Err(QuizError::ConfigError(format!(
                    "layout {} must be finite, got {}",
                    name, v
                ))),
                None => Ok(default),
            }
        };

        let layout = BoardLayout {
            fret_spacing: positive("fret-spacing", raw.fret_spacing, defaults.fret_spacing)?,
            string_spacing: positive("string-spacing", raw.string_spacing, defaults.string_spacing)?,
            first_string_y: finite("first-string-y", raw.first_string_y, defaults.first_string_y)?,
            finger_shift: finite("finger-shift", raw.finger_shift, defaults.finger_shift)?,
            wire_shift: finite("wire-shift", raw.wire_shift, defaults.wire_shift)?,
            open_offset: finite("open-offset", raw.open_offset, defaults.open_offset)?,
            ..defaults
        };

        // The open target must sit left of fret 1 or clicks land out of order.
        let first_fret = fret_pixel_position(1, layout.fret_spacing, layout.finger_shift, None);
        if layout.open_offset >= first_fret {
            return Err(QuizError::ConfigError(format!(
                "layout open-offset ({}) must be less than the fret 1 position ({})",
                layout.open_offset, first_fret
            )));
        }

        Ok(layout)
    }
}
