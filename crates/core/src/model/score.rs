use crate::model::response::Response;

/// Aggregate score for a session's answer log.
///
/// Derived purely from the responses; a partial session yields a partial
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionScore {
    attempted: u32,
    correct: u32,
}

impl SessionScore {
    /// Count attempted and correct responses in an answer log.
    pub fn from_responses<'a>(responses: impl IntoIterator<Item = &'a Response>) -> Self {
        let mut attempted = 0_u32;
        let mut correct = 0_u32;
        for response in responses {
            attempted = attempted.saturating_add(1);
            if response.is_correct() {
                correct = correct.saturating_add(1);
            }
        }
        Self { attempted, correct }
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Percentage of correct answers, or `None` when nothing was attempted.
    ///
    /// The `None` case is the caller's "undefined score" signal; there is no
    /// silent divide-by-zero.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        if self.attempted == 0 {
            None
        } else {
            Some(100.0 * f64::from(self.correct) / f64::from(self.attempted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;
    use crate::model::question::QuestionDraft;

    fn responses(correct: usize, wrong: usize) -> Vec<Response> {
        let q = QuestionDraft {
            id: 1,
            topic: "T".into(),
            prompt: "P".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer_index: 0,
            explanation: "E".into(),
        }
        .validate()
        .unwrap();

        let mut out = Vec::new();
        for _ in 0..correct {
            out.push(Response::answered(&q, 0));
        }
        for _ in 0..wrong {
            out.push(Response::answered(&q, 1));
        }
        out
    }

    #[test]
    fn score_counts_attempted_and_correct() {
        let log = responses(7, 3);
        let score = SessionScore::from_responses(&log);
        assert_eq!(score.attempted(), 10);
        assert_eq!(score.correct(), 7);
        assert_eq!(score.percentage(), Some(70.0));
    }

    #[test]
    fn empty_log_has_undefined_percentage() {
        let log: Vec<Response> = Vec::new();
        let score = SessionScore::from_responses(&log);
        assert_eq!(score.attempted(), 0);
        assert_eq!(score.percentage(), None);
    }

    #[test]
    fn unanswered_counts_as_attempted_but_not_correct() {
        let log = vec![Response::unanswered(QuestionId::new(1))];
        let score = SessionScore::from_responses(&log);
        assert_eq!(score.attempted(), 1);
        assert_eq!(score.correct(), 0);
    }
}
