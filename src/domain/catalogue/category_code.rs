//! CategoryCode - the four-letter classification result.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::quiz::{Axis, TraitLetter};

/// Four-letter category code, one winning letter per axis in `Axis::ORDER`.
///
/// # Invariants
///
/// - letter `i` belongs to `Axis::ORDER[i]`
/// - therefore exactly 16 values exist, all keys of the result catalogue
///
/// Ordering is lexicographic on the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryCode([TraitLetter; 4]);

impl CategoryCode {
    /// Builds a code from per-axis winners.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if a letter sits on the wrong axis.
    pub fn from_letters(letters: [TraitLetter; 4]) -> Result<Self, ValidationError> {
        for (axis, letter) in Axis::ORDER.iter().zip(letters.iter()) {
            if letter.axis() != *axis {
                return Err(ValidationError::invalid_format(
                    "category_code",
                    format!("{} is not a letter of axis {}", letter, axis),
                ));
            }
        }
        Ok(Self(letters))
    }

    /// All 16 codes in lexicographic order.
    pub fn all() -> Vec<CategoryCode> {
        let mut codes = Vec::with_capacity(16);
        for e in pair(Axis::Energy) {
            for s in pair(Axis::Perception) {
                for t in pair(Axis::Judgement) {
                    for j in pair(Axis::Lifestyle) {
                        codes.push(CategoryCode([e, s, t, j]));
                    }
                }
            }
        }
        codes.sort();
        codes
    }

    pub fn letters(&self) -> &[TraitLetter; 4] {
        &self.0
    }

    /// Winning letter on the given axis.
    pub fn letter_for(&self, axis: Axis) -> TraitLetter {
        self.0[axis.position()]
    }

    pub fn as_string(&self) -> String {
        self.0.iter().map(TraitLetter::as_char).collect()
    }
}

fn pair(axis: Axis) -> [TraitLetter; 2] {
    let (a, b) = axis.letters();
    [a, b]
}

impl Ord for CategoryCode {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.iter().map(TraitLetter::as_char);
        let rhs = other.0.iter().map(TraitLetter::as_char);
        lhs.cmp(rhs)
    }
}

impl PartialOrd for CategoryCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl FromStr for CategoryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(ValidationError::invalid_format(
                "category_code",
                format!("expected 4 letters, got '{}'", s),
            ));
        }
        let mut letters = [TraitLetter::E; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = TraitLetter::from_char(c)?;
        }
        Self::from_letters(letters)
    }
}

impl TryFrom<String> for CategoryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryCode> for String {
    fn from(code: CategoryCode) -> Self {
        code.as_string()
    }
}
