//! Trait letters and the four binary axes they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the four binary personality dimensions.
///
/// Axes are scored independently and always concatenated in `ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// E/I: where energy is drawn from.
    Energy,
    /// S/N: how the world is taken in.
    Perception,
    /// T/F: how decisions get made.
    Judgement,
    /// J/P: how the day is structured.
    Lifestyle,
}

impl Axis {
    /// Fixed scoring and concatenation order.
    pub const ORDER: [Axis; 4] = [Axis::Energy, Axis::Perception, Axis::Judgement, Axis::Lifestyle];

    /// The two letters of this axis. The first one wins ties.
    pub fn letters(&self) -> (TraitLetter, TraitLetter) {
        match self {
            Axis::Energy => (TraitLetter::E, TraitLetter::I),
            Axis::Perception => (TraitLetter::S, TraitLetter::N),
            Axis::Judgement => (TraitLetter::T, TraitLetter::F),
            Axis::Lifestyle => (TraitLetter::J, TraitLetter::P),
        }
    }

    /// 0-based position in `ORDER`.
    pub fn position(&self) -> usize {
        match self {
            Axis::Energy => 0,
            Axis::Perception => 1,
            Axis::Judgement => 2,
            Axis::Lifestyle => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "{}/{}", a, b)
    }
}

/// A single trait letter; two per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    /// The axis this letter scores on.
    pub fn axis(&self) -> Axis {
        match self {
            TraitLetter::E | TraitLetter::I => Axis::Energy,
            TraitLetter::S | TraitLetter::N => Axis::Perception,
            TraitLetter::T | TraitLetter::F => Axis::Judgement,
            TraitLetter::J | TraitLetter::P => Axis::Lifestyle,
        }
    }

    /// Dense index in `ALL`, used by the tally.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_char(&self) -> char {
        match self {
            TraitLetter::E => 'E',
            TraitLetter::I => 'I',
            TraitLetter::S => 'S',
            TraitLetter::N => 'N',
            TraitLetter::T => 'T',
            TraitLetter::F => 'F',
            TraitLetter::J => 'J',
            TraitLetter::P => 'P',
        }
    }

    /// Parses a letter, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, ValidationError> {
        TraitLetter::ALL
            .iter()
            .copied()
            .find(|l| l.as_char() == c.to_ascii_uppercase())
            .ok_or_else(|| {
                ValidationError::invalid_format("trait_letter", format!("'{}' is not a trait letter", c))
            })
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
