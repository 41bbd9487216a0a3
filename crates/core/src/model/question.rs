use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

/// Letter label for an option index (A–D).
///
/// Returns `None` for indices outside `0..OPTION_COUNT`.
#[must_use]
pub fn option_letter(index: usize) -> Option<char> {
    if index < OPTION_COUNT {
        char::from_u32('A' as u32 + index as u32)
    } else {
        None
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: topic cannot be empty")]
    EmptyTopic { id: u64 },

    #[error("question {id}: prompt cannot be empty")]
    EmptyPrompt { id: u64 },

    #[error("question {id}: expected {OPTION_COUNT} options, got {got}")]
    WrongOptionCount { id: u64, got: usize },

    #[error("question {id}: option {index} cannot be empty")]
    EmptyOption { id: u64, index: usize },

    #[error("question {id}: answer index {index} out of range")]
    AnswerIndexOutOfRange { id: u64, index: usize },

    #[error("question {id}: explanation cannot be empty")]
    EmptyExplanation { id: u64 },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question record as supplied by a catalog source (e.g. embedded JSON).
///
/// A draft has not been checked against the schema invariants yet; call
/// [`QuestionDraft::validate`] to obtain a usable [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub id: u64,
    pub topic: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft against the question schema.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` if the topic, prompt, any option, or the
    /// explanation is blank, if the option count is not exactly
    /// [`OPTION_COUNT`], or if `answer_index` does not address an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.topic.trim().is_empty() {
            return Err(QuestionError::EmptyTopic { id: self.id });
        }
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id: self.id });
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount {
                id: self.id,
                got: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { id: self.id, index });
        }
        if self.answer_index >= OPTION_COUNT {
            return Err(QuestionError::AnswerIndexOutOfRange {
                id: self.id,
                index: self.answer_index,
            });
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation { id: self.id });
        }

        Ok(Question {
            id: QuestionId::new(self.id),
            topic: self.topic,
            prompt: self.prompt,
            options: self.options,
            answer_index: self.answer_index,
            explanation: self.explanation,
        })
    }
}

/// An immutable multiple-choice question.
///
/// Constructed only through [`QuestionDraft::validate`], so every instance
/// satisfies the schema invariants: exactly four non-blank options and an
/// in-range `answer_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic: String,
    prompt: String,
    options: Vec<String>,
    answer_index: usize,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All options in presentation order (always [`OPTION_COUNT`] of them).
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The option text at `index`, if in range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Index (0-based) of the correct option.
    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether the given selection is the correct one.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.answer_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
