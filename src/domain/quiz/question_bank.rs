//! Question bank - the static catalogue of forced-choice items.
//!
//! Every question scores exactly one axis and offers both of that axis'
//! letters, one per option. The standard bank has three questions per axis.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use super::letters::{Axis, TraitLetter};
use crate::domain::foundation::ValidationError;

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub text: String,
    pub letter: TraitLetter,
}

/// A forced-choice questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: String,
    axis: Axis,
    text: String,
    options: [QuestionOption; 2],
}

impl Question {
    /// Creates a question, checking that its options cover both letters of `axis`.
    pub fn new(
        id: impl Into<String>,
        axis: Axis,
        text: impl Into<String>,
        options: [QuestionOption; 2],
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("question.id"));
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("question.text"));
        }

        let (first, second) = axis.letters();
        let offered = (options[0].letter, options[1].letter);
        if offered != (first, second) && offered != (second, first) {
            return Err(ValidationError::invalid_format(
                "question.options",
                format!("question {} must offer {} and {}", id, first, second),
            ));
        }

        Ok(Self {
            id,
            axis,
            text,
            options,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[QuestionOption; 2] {
        &self.options
    }

    /// Returns true if `letter` is one of this question's two options.
    pub fn offers(&self, letter: TraitLetter) -> bool {
        self.options.iter().any(|o| o.letter == letter)
    }
}

/// Ordered, immutable set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from questions.
    ///
    /// # Errors
    ///
    /// - empty bank
    /// - duplicate question ids
    /// - an axis with no question (its letter could never be earned)
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id()) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id {}", q.id()),
                ));
            }
        }

        for axis in Axis::ORDER {
            if !questions.iter().any(|q| q.axis() == axis) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("no question scores axis {}", axis),
                ));
            }
        }

        Ok(Self { questions })
    }

    /// The reference twelve-question bank.
    pub fn standard() -> &'static QuestionBank {
        &STANDARD_BANK
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}

type Row = (&'static str, Axis, &'static str, (&'static str, TraitLetter), (&'static str, TraitLetter));

const STANDARD_ROWS: [Row; 12] = [
    (
        "q01",
        Axis::Energy,
        "A visitor rings the doorbell. Your companion...",
        ("rushes to greet them at the door", TraitLetter::E),
        ("watches from a quiet corner first", TraitLetter::I),
    ),
    (
        "q02",
        Axis::Perception,
        "On a familiar walk, your companion mostly...",
        ("sniffs every known spot along the usual route", TraitLetter::S),
        ("pulls toward paths it has never tried", TraitLetter::N),
    ),
    (
        "q03",
        Axis::Judgement,
        "When scolded, your companion...",
        ("seems to work out what went wrong and stops", TraitLetter::T),
        ("looks hurt and wants comfort right away", TraitLetter::F),
    ),
    (
        "q04",
        Axis::Lifestyle,
        "Around mealtime, your companion...",
        ("waits at the bowl at exactly the same time every day", TraitLetter::J),
        ("eats whenever it happens to feel hungry", TraitLetter::P),
    ),
    (
        "q05",
        Axis::Energy,
        "At a busy park, your companion...",
        ("makes new friends within minutes", TraitLetter::E),
        ("sticks close to you and one familiar friend", TraitLetter::I),
    ),
    (
        "q06",
        Axis::Perception,
        "Given a new toy, your companion...",
        ("plays with it exactly as intended", TraitLetter::S),
        ("invents a strange new game with it", TraitLetter::N),
    ),
    (
        "q07",
        Axis::Judgement,
        "Solving a treat puzzle, your companion...",
        ("tries methodically until something works", TraitLetter::T),
        ("gives you a look until you help", TraitLetter::F),
    ),
    (
        "q08",
        Axis::Lifestyle,
        "When the daily routine changes, your companion...",
        ("gets restless until things are back to normal", TraitLetter::J),
        ("adapts without noticing", TraitLetter::P),
    ),
    (
        "q09",
        Axis::Energy,
        "After a long day out, your companion recharges by...",
        ("asking for even more play", TraitLetter::E),
        ("retreating to its own bed alone", TraitLetter::I),
    ),
    (
        "q10",
        Axis::Perception,
        "When you pick up the leash, your companion...",
        ("reacts only once the door actually opens", TraitLetter::S),
        ("already guesses the plan from tiny hints", TraitLetter::N),
    ),
    (
        "q11",
        Axis::Judgement,
        "When another animal is upset nearby, your companion...",
        ("keeps doing its own thing", TraitLetter::T),
        ("goes over to check on it", TraitLetter::F),
    ),
    (
        "q12",
        Axis::Lifestyle,
        "With its toys, your companion...",
        ("keeps them in one favourite spot", TraitLetter::J),
        ("leaves them scattered all over the house", TraitLetter::P),
    ),
];

static STANDARD_BANK: Lazy<QuestionBank> = Lazy::new(|| QuestionBank {
    questions: STANDARD_ROWS
        .iter()
        .map(|(id, axis, text, (a_text, a_letter), (b_text, b_letter))| Question {
            id: id.to_string(),
            axis: *axis,
            text: text.to_string(),
            options: [
                QuestionOption {
                    text: a_text.to_string(),
                    letter: *a_letter,
                },
                QuestionOption {
                    text: b_text.to_string(),
                    letter: *b_letter,
                },
            ],
        })
        .collect(),
});
