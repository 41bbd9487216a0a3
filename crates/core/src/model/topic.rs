use std::fmt;

/// Topic selection applied when building a session's question order.
///
/// `All` is the "All topics" sentinel of the trainer UI; `Topic` matches on
/// string equality against each question's topic label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(String),
}

impl TopicFilter {
    /// Build a filter from a user-facing topic choice.
    ///
    /// The "All topics" sentinel (or a blank string) maps to `All`.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        let trimmed = choice.trim();
        if trimmed.is_empty() || trimmed == "All topics" {
            Self::All
        } else {
            Self::Topic(trimmed.to_string())
        }
    }

    /// Whether a question with the given topic label passes this filter.
    #[must_use]
    pub fn matches(&self, topic: &str) -> bool {
        match self {
            Self::All => true,
            Self::Topic(wanted) => wanted == topic,
        }
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All topics"),
            Self::Topic(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        assert!(TopicFilter::All.matches("Endocrine System"));
        assert!(TopicFilter::All.matches(""));
    }

    #[test]
    fn topic_matches_by_equality() {
        let filter = TopicFilter::Topic("ANS".into());
        assert!(filter.matches("ANS"));
        assert!(!filter.matches("Urinary System"));
    }

    #[test]
    fn from_choice_maps_sentinel() {
        assert_eq!(TopicFilter::from_choice("All topics"), TopicFilter::All);
        assert_eq!(TopicFilter::from_choice("  "), TopicFilter::All);
        assert_eq!(
            TopicFilter::from_choice("Joints & Muscle"),
            TopicFilter::Topic("Joints & Muscle".into())
        );
    }

    #[test]
    fn display_round_trips_sentinel() {
        assert_eq!(TopicFilter::All.to_string(), "All topics");
        assert_eq!(
            TopicFilter::Topic("ANS".into()).to_string(),
            "ANS"
        );
    }
}
