use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// Recorded outcome for one question slot in a session.
///
/// `correct` is derived once, when the response is recorded, from the selected
/// index and the question's answer index; downstream consumers (score, report)
/// trust it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    question_id: QuestionId,
    selected: Option<usize>,
    correct: bool,
}

impl Response {
    /// Record an answered question.
    #[must_use]
    pub fn answered(question: &Question, selected: usize) -> Self {
        Self {
            question_id: question.id(),
            selected: Some(selected),
            correct: question.is_correct(selected),
        }
    }

    /// Record a question that was shown but never answered.
    #[must_use]
    pub fn unanswered(question_id: QuestionId) -> Self {
        Self {
            question_id,
            selected: None,
            correct: false,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// The selected option index, or `None` for an unanswered slot.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionDraft;

    fn question() -> Question {
        QuestionDraft {
            id: 7,
            topic: "ANS".into(),
            prompt: "Preganglionic sympathetic fibres arise from:".into(),
            options: vec![
                "T1-L2 spinal segments".into(),
                "Cranial nerves only".into(),
                "S2-S4 segments".into(),
                "Cervical spinal cord".into(),
            ],
            answer_index: 0,
            explanation: "The sympathetic outflow is thoracolumbar (T1-L2).".into(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn correct_is_derived_from_question() {
        let q = question();
        assert!(Response::answered(&q, 0).is_correct());
        assert!(!Response::answered(&q, 2).is_correct());
    }

    #[test]
    fn unanswered_is_never_correct() {
        let r = Response::unanswered(QuestionId::new(7));
        assert_eq!(r.selected(), None);
        assert!(!r.is_correct());
    }
}
