//! Letter-grade classification.
//!
//! Maps a total mark (out of 100) to a letter grade and grade-point value
//! using a fixed, data-driven band table. Bands are contiguous across the
//! whole number line, so every finite total maps to exactly one grade.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grades, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Outstanding (total >= 90)
    S,
    /// Excellent (total >= 80)
    A,
    /// Very good (total >= 70)
    B,
    /// Good (total >= 60)
    C,
    /// Average (total >= 50)
    D,
    /// Pass (total >= 40)
    E,
    /// Fail (total < 40)
    F,
}

impl LetterGrade {
    /// Grade-point value used as the SGPA weight.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::F => 0,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown letter grade: '{s}'")),
        }
    }
}

/// A classified grade: letter plus grade points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    /// Letter grade
    pub letter: LetterGrade,
    /// Grade points (0-10)
    pub points: u8,
}

/// Grade bands as inclusive lower bounds, checked in descending order.
/// Anything below the last band is an F.
const GRADE_BANDS: [(f64, LetterGrade); 6] = [
    (90.0, LetterGrade::S),
    (80.0, LetterGrade::A),
    (70.0, LetterGrade::B),
    (60.0, LetterGrade::C),
    (50.0, LetterGrade::D),
    (40.0, LetterGrade::E),
];

/// Classify a total mark into a letter grade and grade points.
///
/// The first matching band wins, so boundary values (e.g. exactly 90)
/// belong to the higher grade. Total for any finite input; the function
/// does not range-restrict its argument.
#[must_use]
pub fn compute_grade(total: f64) -> Grade {
    for &(threshold, letter) in &GRADE_BANDS {
        if total >= threshold {
            return Grade {
                letter,
                points: letter.points(),
            };
        }
    }
    Grade {
        letter: LetterGrade::F,
        points: LetterGrade::F.points(),
    }
}
