//! City geometry: the radial coordinate model for Black Rock City.
//!
//! Addresses combine a clock position around the Man (the city center) with
//! one of twelve lettered concentric streets. This module owns the value
//! types for both halves of an address and the fixed radial-distance table
//! the route planner prices arcs and lines against.

use std::f64::consts::PI;
use std::fmt;

use crate::error::{Error, Result};

/// Layout constants for the city's concentric geometry.
pub mod constants {
    /// Radial distance from the Man (city center) to the Esplanade, in feet.
    pub const MAN_TO_ESPLANADE_FT: f64 = 2500.0;

    /// Radial distance from the Esplanade to each lettered ring, in feet,
    /// indexed by ring (A = 0 through L = 11). Strictly increasing.
    pub const ESPLANADE_TO_RING_FT: [f64; 12] = [
        400.0, 650.0, 900.0, 1150.0, 1400.0, 1600.0, 1800.0, 2000.0, 2200.0, 2400.0, 2550.0,
        2700.0,
    ];
}

/// One of the twelve lettered concentric streets, A (innermost) through L
/// (outermost).
///
/// The index is validated at construction, so offset lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ring(u8);

impl Ring {
    /// Number of lettered rings in the city.
    pub const COUNT: usize = constants::ESPLANADE_TO_RING_FT.len();

    /// Build a ring from its street letter (case-insensitive).
    pub fn from_letter(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        if ('A'..='L').contains(&upper) {
            Ok(Self(upper as u8 - b'A'))
        } else {
            Err(Error::RingLetterOutOfRange { letter })
        }
    }

    /// Build a ring from its zero-based index (A = 0).
    pub fn from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(Error::RingIndexOutOfRange { index })
        }
    }

    /// Zero-based index of the ring (A = 0 through L = 11).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Street letter of the ring, always uppercase.
    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Radial distance from the Esplanade to this ring, in feet.
    pub fn offset_ft(self) -> f64 {
        constants::ESPLANADE_TO_RING_FT[self.index()]
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A validated TimeLetter address: a clock position crossed with a ring.
///
/// Construction does not re-validate the clock fields; the address grammar
/// in [`crate::address`] is the validation boundary, and callers building
/// positions directly are expected to honor it (hours within the supported
/// grammar, minutes one of 0, 15, 30 or 45).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    hour: u8,
    minute: u8,
    ring: Ring,
}

impl Position {
    pub fn new(hour: u8, minute: u8, ring: Ring) -> Self {
        Self { hour, minute, ring }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// Angular position around the Man, in radians:
    /// `hour · π/6 + minute · π/360`.
    ///
    /// The raw sum is returned without normalization; the displacement
    /// policies in [`crate::routing`] own the wrap rule.
    pub fn angle_rad(&self) -> f64 {
        f64::from(self.hour) * PI / 6.0 + f64::from(self.minute) * PI / 360.0
    }

    /// The clock half of the address alone, e.g. `2` or `9:30`.
    pub fn time_label(&self) -> String {
        if self.minute == 0 {
            format!("{}", self.hour)
        } else {
            format!("{}:{:02}", self.hour, self.minute)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time_label(), self.ring.letter())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ring_offsets_strictly_increase() {
        for pair in constants::ESPLANADE_TO_RING_FT.windows(2) {
            assert!(pair[0] > 0.0);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn ring_from_letter_round_trips() {
        for (index, letter) in ('A'..='L').enumerate() {
            let ring = Ring::from_letter(letter).expect("letter in range");
            assert_eq!(ring.index(), index);
            assert_eq!(ring.letter(), letter);
        }
    }

    #[test]
    fn ring_accepts_lowercase_letters() {
        let ring = Ring::from_letter('c').expect("lowercase letter in range");
        assert_eq!(ring.letter(), 'C');
        assert_eq!(ring.index(), 2);
    }

    #[test]
    fn ring_rejects_out_of_range_letter() {
        let error = Ring::from_letter('M').expect_err("letter beyond L");
        assert!(format!("{error}").contains("ring letter out of range"));
    }

    #[test]
    fn ring_rejects_out_of_range_index() {
        let error = Ring::from_index(12).expect_err("index beyond L");
        assert!(format!("{error}").contains("ring index out of range"));
    }

    #[test]
    fn angle_of_two_o_clock() {
        let ring = Ring::from_letter('A').unwrap();
        let position = Position::new(2, 0, ring);
        assert_relative_eq!(position.angle_rad(), PI / 3.0);
    }

    #[test]
    fn angle_includes_quarter_hour_offset() {
        let ring = Ring::from_letter('A').unwrap();
        let position = Position::new(2, 15, ring);
        assert_relative_eq!(position.angle_rad(), 3.0 * PI / 8.0);
    }

    #[test]
    fn display_omits_zero_minutes() {
        let ring = Ring::from_letter('A').unwrap();
        assert_eq!(Position::new(2, 0, ring).to_string(), "2A");
        assert_eq!(Position::new(9, 30, ring).to_string(), "9:30A");
    }
}
