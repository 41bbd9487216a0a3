mod progress;
mod report;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use report::{NOT_ANSWERED, REPORT_TITLE, TranscriptEntry, render_report, report_file_name};
pub use service::QuizSession;
pub use workflow::{TopicListItem, TrainerService};
