use mcq_core::model::QuestionDraft;

use crate::catalog::{Catalog, CatalogError};

/// The embedded anatomy question bank.
const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// Load the built-in anatomy question bank.
///
/// Parses the embedded JSON and validates every record once.
///
/// # Errors
///
/// Returns `CatalogError` if the embedded data fails to parse or violates the
/// question schema. With an intact build this does not happen; callers treat
/// it as a startup failure.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(QUESTIONS_JSON)?;
    Catalog::from_drafts(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcq_core::model::TopicFilter;

    #[test]
    fn builtin_bank_loads_and_validates() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 301);
    }

    #[test]
    fn builtin_bank_covers_expected_topics() {
        let catalog = builtin_catalog().unwrap();
        let topics = catalog.topics();
        assert_eq!(topics.len(), 15);
        assert!(topics.iter().any(|t| t == "Anatomical Terms & Planes"));
        assert!(topics.iter().any(|t| t == "Membrane Transport"));

        // Every listed topic selects at least one question.
        for topic in topics {
            assert!(catalog.count_matching(&TopicFilter::Topic(topic)) > 0);
        }
    }
}
