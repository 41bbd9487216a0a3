mod ids;
mod question;
mod response;
mod score;
mod topic;

pub use ids::{ParseIdError, QuestionId};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError, option_letter};
pub use response::Response;
pub use score::SessionScore;
pub use topic::TopicFilter;
