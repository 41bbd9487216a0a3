#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use mcq_core::Clock;

pub use error::SessionError;
pub use sessions::{
    QuizSession, SessionProgress, TopicListItem, TrainerService, TranscriptEntry, render_report,
    report_file_name,
};
