use std::sync::Arc;

use rand::Rng;

use bank::Catalog;
use mcq_core::Clock;
use mcq_core::model::TopicFilter;

use super::report::{render_report, report_file_name};
use super::service::QuizSession;
use crate::error::SessionError;

/// One topic the user can pick, with how many questions it would select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicListItem {
    pub topic: String,
    pub available: usize,
}

/// Facade the presentation layer drives: owns the catalog and the time
/// source, starts sessions, and renders dated reports.
///
/// Starting a session while another one exists is the restart path; the old
/// session is simply dropped by the caller.
#[derive(Debug, Clone)]
pub struct TrainerService {
    clock: Clock,
    catalog: Arc<Catalog>,
    shuffle: bool,
}

impl TrainerService {
    /// Create a trainer over the given catalog. Shuffling defaults to on,
    /// matching the original trainer's "Randomise order" default.
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self {
            clock,
            catalog,
            shuffle: true,
        }
    }

    /// Enable or disable the one-time shuffle applied at session start.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All topics with their available-question counts, sorted by topic.
    #[must_use]
    pub fn topics(&self) -> Vec<TopicListItem> {
        self.catalog
            .topics()
            .into_iter()
            .map(|topic| {
                let available = self
                    .catalog
                    .count_matching(&TopicFilter::Topic(topic.clone()));
                TopicListItem { topic, available }
            })
            .collect()
    }

    /// Number of questions the given filter would select.
    #[must_use]
    pub fn available(&self, filter: &TopicFilter) -> usize {
        self.catalog.count_matching(filter)
    }

    /// Start (or restart) a session for the given filter.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the filter selects no questions.
    pub fn start(&self, filter: TopicFilter) -> Result<QuizSession, SessionError> {
        QuizSession::start(&self.catalog, filter, self.shuffle, self.clock.now())
    }

    /// Start a session with a caller-supplied RNG (deterministic tests).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the filter selects no questions.
    pub fn start_with_rng<R>(
        &self,
        filter: TopicFilter,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError>
    where
        R: Rng + ?Sized,
    {
        QuizSession::start_with_rng(&self.catalog, filter, self.shuffle, self.clock.now(), rng)
    }

    /// Render the session's transcript as a dated plain-text report.
    #[must_use]
    pub fn report(&self, session: &QuizSession) -> String {
        render_report(&session.transcript(), self.clock.now())
    }

    /// Suggested file name for saving a report generated now.
    #[must_use]
    pub fn report_file_name(&self) -> String {
        report_file_name(self.clock.now())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use mcq_core::model::QuestionDraft;
    use mcq_core::time::fixed_clock;

    fn trainer() -> TrainerService {
        let drafts = vec![
            QuestionDraft {
                id: 1,
                topic: "X".into(),
                prompt: "P1".into(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_index: 0,
                explanation: "E1".into(),
            },
            QuestionDraft {
                id: 2,
                topic: "Y".into(),
                prompt: "P2".into(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_index: 1,
                explanation: "E2".into(),
            },
        ];
        let catalog = Catalog::from_drafts(drafts).unwrap();
        TrainerService::new(fixed_clock(), Arc::new(catalog)).with_shuffle(false)
    }

    #[test]
    fn topics_report_available_counts() {
        let topics = trainer().topics();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, "X");
        assert_eq!(topics[0].available, 1);
    }

    #[test]
    fn start_rejects_empty_selection() {
        let err = trainer()
            .start(TopicFilter::Topic("missing".into()))
            .unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn report_uses_the_service_clock() {
        let trainer = trainer();
        let mut session = trainer.start(TopicFilter::All).unwrap();
        session.submit_answer().unwrap();

        let report = trainer.report(&session);
        assert!(report.contains("Date: 2023-11-14 22:13"));
        assert!(report.contains("Total questions attempted: 1"));
        assert_eq!(trainer.report_file_name(), "anatomy_mcq_20231114_2213.txt");
    }
}
