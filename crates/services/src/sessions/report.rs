use chrono::{DateTime, Utc};

use mcq_core::model::{Question, Response, option_letter};

/// Title line of the exported session summary.
pub const REPORT_TITLE: &str = "Anatomy MCQ Session Summary";

/// Marker rendered when a response carries no selection.
pub const NOT_ANSWERED: &str = "Not answered";

const SEPARATOR_LEN: usize = 55;

/// One row of the report input: a question paired with its recorded response,
/// in presentation order.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptEntry<'a> {
    pub question: &'a Question,
    pub response: &'a Response,
}

fn letter_or_marker(selected: Option<usize>) -> String {
    selected
        .and_then(option_letter)
        .map_or_else(|| NOT_ANSWERED.to_string(), |c| c.to_string())
}

/// Render the plain-text session summary.
///
/// Pure function of its inputs: identical entries and timestamp produce
/// byte-identical text. The response's precomputed `correct` flag is trusted
/// as-is. Partial sessions are fine; the attempted count is the number of
/// entries, not the session length.
#[must_use]
pub fn render_report(entries: &[TranscriptEntry<'_>], generated_at: DateTime<Utc>) -> String {
    let separator = "-".repeat(SEPARATOR_LEN);
    let mut lines = Vec::new();

    lines.push(REPORT_TITLE.to_string());
    lines.push(format!("Date: {}", generated_at.format("%Y-%m-%d %H:%M")));
    lines.push(format!("Total questions attempted: {}", entries.len()));
    lines.push(separator.clone());

    for (i, entry) in entries.iter().enumerate() {
        let question = entry.question;
        let response = entry.response;

        lines.push(format!(
            "\nQ{}. [{}] {}",
            i + 1,
            question.topic(),
            question.prompt()
        ));
        for (index, option) in question.options().iter().enumerate() {
            let label = option_letter(index).unwrap_or('?');
            lines.push(format!("  {label}) {option}"));
        }

        let correct_letter = option_letter(question.answer_index()).unwrap_or('?');
        let verdict = if response.is_correct() {
            "Correct"
        } else {
            "Incorrect"
        };

        lines.push(format!("Your answer: {}", letter_or_marker(response.selected())));
        lines.push(format!("Correct answer: {correct_letter}"));
        lines.push(format!("Result: {verdict}"));
        lines.push(format!("Explanation: {}", question.explanation()));
        lines.push(separator.clone());
    }

    lines.join("\n")
}

/// Suggested file name for a saved report, matching the original trainer's
/// download naming.
#[must_use]
pub fn report_file_name(generated_at: DateTime<Utc>) -> String {
    format!("anatomy_mcq_{}.txt", generated_at.format("%Y%m%d_%H%M"))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
