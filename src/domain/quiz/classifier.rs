//! Classifier - reduces a completed answer sequence to a category code.
//!
//! Only letter counts matter. Per axis the strictly larger count wins and an
//! exact tie goes to the first letter of the axis (E, S, T, J).

use super::errors::QuizError;
use super::letters::{Axis, TraitLetter};
use crate::domain::catalogue::CategoryCode;

/// Occurrence counts of the eight trait letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterTally([u32; 8]);

impl LetterTally {
    /// Counts the letters of a completed answer sequence.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteAnswers` at the first unset entry.
    pub fn from_answers(answers: &[Option<TraitLetter>]) -> Result<Self, QuizError> {
        let mut tally = LetterTally::default();
        for (index, answer) in answers.iter().enumerate() {
            match answer {
                Some(letter) => tally.0[letter.index()] += 1,
                None => return Err(QuizError::IncompleteAnswers { index }),
            }
        }
        Ok(tally)
    }

    pub fn count(&self, letter: TraitLetter) -> u32 {
        self.0[letter.index()]
    }

    /// Winning letter of one axis.
    pub fn winner(&self, axis: Axis) -> TraitLetter {
        let (first, second) = axis.letters();
        if self.count(second) > self.count(first) {
            second
        } else {
            first
        }
    }
}

/// Pure classification entry point.
pub struct Classifier;

impl Classifier {
    /// Classifies a completed answer sequence.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteAnswers` if any entry is unset.
    pub fn classify(answers: &[Option<TraitLetter>]) -> Result<CategoryCode, QuizError> {
        let tally = LetterTally::from_answers(answers)?;
        Ok(Self::classify_tally(&tally))
    }

    /// Classifies a tally directly.
    pub fn classify_tally(tally: &LetterTally) -> CategoryCode {
        let winners = Axis::ORDER.map(|axis| tally.winner(axis));
        match CategoryCode::from_letters(winners) {
            Ok(code) => code,
            // winner(axis) always returns a letter of that axis
            Err(_) => unreachable!("axis winners are always valid code letters"),
        }
    }
}
