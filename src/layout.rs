//! # Board Layout
//!
//! Converts fret and string indices into board coordinates.
//!
//! ## Placement Formula
//! [`fret_pixel_position`] places the open position at a fixed offset and
//! fret `n >= 1` at `(n + 1) * spacing - shift`. Two shifts are in use:
//! - **finger shift** (40 by default) centers click targets and inlay dots
//!   between fret wires
//! - **wire shift** (60 by default) places the fret wires themselves
//!
//! ## Default Geometry
//! The defaults describe a 500x160 board with a 20-unit nut:
//! - string `s` runs at `y = (s - 1) * 40 + 25`
//! - fret 3 click target at `x = 120`, open target at `x = 10`
//! - inlay dots at frets 3, 5, 7, 9 (centered) and 12 (doubled)
//!
//! Nothing here draws; front ends read a [`LayoutSnapshot`].

use serde::Serialize;

use crate::fretboard::{Fret, GuitarString, Position, FRET_COUNT};

/// Frets carrying a single centered inlay dot
pub const SINGLE_INLAY_FRETS: [u8; 4] = [3, 5, 7, 9];

/// Fret carrying the doubled inlay
pub const DOUBLE_INLAY_FRET: u8 = 12;

/// Place a fret index along the board.
///
/// # Example
/// ```
/// use fretquiz::layout::fret_pixel_position;
///
/// assert_eq!(fret_pixel_position(0, 40.0, 40.0, Some(10.0)), 10.0);
/// assert_eq!(fret_pixel_position(0, 40.0, 60.0, None), 0.0);
/// assert_eq!(fret_pixel_position(3, 40.0, 40.0, Some(10.0)), 120.0);
/// assert_eq!(fret_pixel_position(1, 40.0, 60.0, None), 20.0);
/// ```
pub fn fret_pixel_position(fret: u8, fret_spacing: f64, shift: f64, open_offset: Option<f64>) -> f64 {
    if fret == 0 {
        open_offset.unwrap_or(0.0)
    } else {
        (fret as f64 + 1.0) * fret_spacing - shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Board geometry parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLayout {
    pub fret_spacing: f64,
    pub string_spacing: f64,
    pub first_string_y: f64,
    pub finger_shift: f64,
    pub wire_shift: f64,
    pub open_offset: f64,
    pub width: f64,
    pub height: f64,
    pub nut_width: f64,
    pub click_radius: f64,
    pub open_zone_radius: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout {
            fret_spacing: 40.0,
            string_spacing: 40.0,
            first_string_y: 25.0,
            finger_shift: 40.0,
            wire_shift: 60.0,
            open_offset: 10.0,
            width: 500.0,
            height: 160.0,
            nut_width: 20.0,
            click_radius: 8.0,
            open_zone_radius: 10.0,
        }
    }
}

impl BoardLayout {
    pub fn string_y(&self, string: GuitarString) -> f64 {
        string.index() as f64 * self.string_spacing + self.first_string_y
    }

    /// Center of the click target for a cell
    pub fn click_target(&self, position: Position) -> Point {
        Point {
            x: fret_pixel_position(
                position.fret.number(),
                self.fret_spacing,
                self.finger_shift,
                Some(self.open_offset),
            ),
            y: self.string_y(position.string),
        }
    }

    /// Center of the open-string click zone over the nut
    pub fn open_zone(&self, string: GuitarString) -> Point {
        Point {
            x: self.open_offset,
            y: self.string_y(string),
        }
    }

    /// X positions of the fret wires, one past the last fret included
    pub fn fret_wires(&self) -> Vec<f64> {
        (0..=FRET_COUNT as u8)
            .map(|i| fret_pixel_position(i, self.fret_spacing, self.wire_shift, None))
            .collect()
    }

    pub fn inlays(&self) -> Vec<Point> {
        let middle = (self.string_y(GuitarString::Second) + self.string_y(GuitarString::Third)) / 2.0;
        let upper = (self.string_y(GuitarString::First) + self.string_y(GuitarString::Second)) / 2.0;
        let lower = (self.string_y(GuitarString::Third) + self.string_y(GuitarString::Fourth)) / 2.0;
        let x = |fret: u8| fret_pixel_position(fret, self.fret_spacing, self.finger_shift, None);

        let mut dots: Vec<Point> = SINGLE_INLAY_FRETS
            .iter()
            .map(|&fret| Point { x: x(fret), y: middle })
            .collect();
        dots.push(Point { x: x(DOUBLE_INLAY_FRET), y: upper });
        dots.push(Point { x: x(DOUBLE_INLAY_FRET), y: lower });
        dots
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let strings = GuitarString::ALL
            .iter()
            .map(|&string| StringLine {
                string,
                y: self.string_y(string),
                open_zone: self.open_zone(string),
                targets: Fret::all()
                    .map(|fret| self.click_target(Position::new(string, fret)))
                    .collect(),
            })
            .collect();

        LayoutSnapshot {
            width: self.width,
            height: self.height,
            nut_width: self.nut_width,
            click_radius: self.click_radius,
            open_zone_radius: self.open_zone_radius,
            fret_wires: self.fret_wires(),
            inlays: self.inlays(),
            strings,
        }
    }
}

/// Everything a front end needs to place the board
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub width: f64,
    pub height: f64,
    pub nut_width: f64,
    pub click_radius: f64,
    pub open_zone_radius: f64,
    pub fret_wires: Vec<f64>,
    pub inlays: Vec<Point>,
    pub strings: Vec<StringLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringLine {
    pub string: GuitarString,
    pub y: f64,
    pub open_zone: Point,
    /// Click targets for frets 0 through 12
    pub targets: Vec<Point>,
}
