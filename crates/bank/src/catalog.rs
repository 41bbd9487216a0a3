use std::collections::HashSet;

use thiserror::Error;

use mcq_core::model::{Question, QuestionDraft, QuestionError, QuestionId, TopicFilter};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no questions")]
    Empty,

    #[error("duplicate question id {id}")]
    DuplicateId { id: QuestionId },

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only, ordered collection of validated questions.
///
/// Construction validates every record once; after that the catalog is
/// immutable and iteration order is stable (source order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from raw drafts, validating each record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty source,
    /// `CatalogError::DuplicateId` when two records share an id, and
    /// propagates per-question schema violations.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, CatalogError> {
        if drafts.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(drafts.len());
        let mut questions = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let question = draft.validate()?;
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateId { id: question.id() });
            }
            questions.push(question);
        }

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate questions in stable catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Sorted, de-duplicated list of topic labels in the catalog.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self
            .questions
            .iter()
            .map(|q| q.topic().to_string())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        topics.sort();
        topics
    }

    /// Questions passing the filter, in catalog order.
    #[must_use]
    pub fn matching(&self, filter: &TopicFilter) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| filter.matches(q.topic()))
            .collect()
    }

    /// Number of questions the filter would select.
    #[must_use]
    pub fn count_matching(&self, filter: &TopicFilter) -> usize {
        self.questions
            .iter()
            .filter(|q| filter.matches(q.topic()))
            .count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: u64, topic: &str) -> QuestionDraft {
        QuestionDraft {
            id,
            topic: topic.into(),
            prompt: format!("Prompt {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer_index: 0,
            explanation: format!("Explanation {id}"),
        }
    }

    #[test]
    fn catalog_preserves_source_order() {
        let catalog =
            Catalog::from_drafts(vec![draft(3, "X"), draft(1, "Y"), draft(2, "X")]).unwrap();
        let ids: Vec<u64> = catalog.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::from_drafts(vec![draft(1, "X"), draft(1, "Y")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == QuestionId::new(1)));
    }

    #[test]
    fn empty_source_rejected() {
        assert!(matches!(
            Catalog::from_drafts(Vec::new()).unwrap_err(),
            CatalogError::Empty
        ));
    }

    #[test]
    fn invalid_question_rejected() {
        let mut bad = draft(1, "X");
        bad.answer_index = 9;
        let err = Catalog::from_drafts(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::Question(_)));
    }

    #[test]
    fn topics_are_sorted_and_unique() {
        let catalog =
            Catalog::from_drafts(vec![draft(1, "B"), draft(2, "A"), draft(3, "B")]).unwrap();
        assert_eq!(catalog.topics(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn matching_filters_by_topic() {
        let catalog =
            Catalog::from_drafts(vec![draft(1, "X"), draft(2, "Y"), draft(3, "X")]).unwrap();

        let all = catalog.matching(&TopicFilter::All);
        assert_eq!(all.len(), 3);

        let filter = TopicFilter::Topic("X".into());
        let xs = catalog.matching(&filter);
        assert_eq!(xs.len(), 2);
        assert!(xs.iter().all(|q| q.topic() == "X"));
        assert_eq!(catalog.count_matching(&filter), 2);
        assert_eq!(
            catalog.count_matching(&TopicFilter::Topic("missing".into())),
            0
        );
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::from_drafts(vec![draft(5, "X")]).unwrap();
        assert!(catalog.get(QuestionId::new(5)).is_some());
        assert!(catalog.get(QuestionId::new(6)).is_none());
    }
}
