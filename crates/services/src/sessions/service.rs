use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use bank::Catalog;
use mcq_core::model::{OPTION_COUNT, Question, QuestionId, Response, SessionScore, TopicFilter};

use super::progress::SessionProgress;
use super::report::TranscriptEntry;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt: a filtered, optionally shuffled question order stepped
/// through one slot at a time.
///
/// Per slot: select an option (any number of times), submit (locks the
/// selection and reveals the explanation; may be repeated to overwrite),
/// then advance. The order is fixed at start and never re-shuffled. Restart
/// is wholesale replacement: build a new session and drop this one.
#[derive(Debug, Clone)]
pub struct QuizSession {
    filter: TopicFilter,
    questions: Vec<Question>,
    position: usize,
    pending: Option<usize>,
    responses: Vec<Response>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a session over the catalog questions matching `filter`.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic. Shuffling, when enabled, happens exactly once here.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the filter selects no questions; no
    /// session state is created in that case.
    pub fn start(
        catalog: &Catalog,
        filter: TopicFilter,
        shuffle: bool,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        Self::start_with_rng(catalog, filter, shuffle, started_at, &mut rand::rng())
    }

    /// Like [`QuizSession::start`], but with a caller-supplied RNG so tests
    /// can seed the shuffle.
    pub fn start_with_rng<R>(
        catalog: &Catalog,
        filter: TopicFilter,
        shuffle: bool,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, SessionError>
    where
        R: Rng + ?Sized,
    {
        let mut questions: Vec<Question> =
            catalog.matching(&filter).into_iter().cloned().collect();

        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        if shuffle {
            questions.shuffle(rng);
        }

        Ok(Self {
            filter,
            questions,
            position: 0,
            pending: None,
            responses: Vec::new(),
            started_at,
        })
    }

    #[must_use]
    pub fn filter(&self) -> &TopicFilter {
        &self.filter
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The session's question order, fixed at start.
    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(Question::id)
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of slots that have been submitted so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Number of slots not yet advanced past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.position)
    }

    /// Current slot index (0-based). Equals `total_questions` once complete.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// The question at the current slot, or `None` once the session is
    /// complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// The not-yet-submitted highlighted option for the current slot.
    #[must_use]
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    /// Whether the current slot already has a submitted answer (and therefore
    /// a revealed explanation).
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.responses.len() > self.position
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Responses recorded so far, in presentation order.
    #[must_use]
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// The recorded response for the current slot, if submitted.
    #[must_use]
    pub fn current_response(&self) -> Option<&Response> {
        self.responses.get(self.position)
    }

    /// Highlight an option for the current question.
    ///
    /// May be called repeatedly before submitting; each call overwrites the
    /// pending selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last slot,
    /// `SessionError::AlreadySubmitted` once the current slot's answer is
    /// locked, and `SessionError::OptionOutOfRange` for an invalid index.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.is_submitted() {
            return Err(SessionError::AlreadySubmitted);
        }
        if index >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange { index });
        }

        self.pending = Some(index);
        Ok(())
    }

    /// Submit the pending selection for the current question.
    ///
    /// With no explicit selection the first option counts as selected, the
    /// same implicit default the presentation layer shows pre-selected.
    /// Resubmitting before advancing overwrites the recorded response with
    /// one computed from the current pending selection. Does not advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last slot.
    pub fn submit_answer(&mut self) -> Result<&Response, SessionError> {
        let Some(question) = self.questions.get(self.position) else {
            return Err(SessionError::Completed);
        };

        let selected = self.pending.unwrap_or(0);
        let response = Response::answered(question, selected);

        if self.responses.len() > self.position {
            self.responses[self.position] = response;
        } else {
            self.responses.push(response);
        }

        Ok(&self.responses[self.position])
    }

    /// Move to the next question (or complete the session after the last).
    ///
    /// Clears the pending selection for the new slot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session already finished and
    /// `SessionError::NotSubmitted` if the current slot has no recorded
    /// answer; in both cases the position is unchanged.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if !self.is_submitted() {
            return Err(SessionError::NotSubmitted);
        }

        self.position += 1;
        self.pending = None;
        Ok(())
    }

    /// Aggregate score over the responses recorded so far.
    #[must_use]
    pub fn score(&self) -> SessionScore {
        SessionScore::from_responses(self.responses.iter())
    }

    /// (Question, Response) pairs in presentation order, one per submitted
    /// slot. This is the report generator's input.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry<'_>> {
        self.responses
            .iter()
            .enumerate()
            .map(|(slot, response)| TranscriptEntry {
                question: &self.questions[slot],
                response,
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
