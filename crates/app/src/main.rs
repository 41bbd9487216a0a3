use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use mcq_core::model::{OPTION_COUNT, Question, TopicFilter, option_letter};
use services::{Clock, QuizSession, SessionError, TrainerService};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} value cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- run    [--topic <name>] [--no-shuffle] [--out <path>] [--no-save]");
    eprintln!("  cargo run -p app -- topics");
    eprintln!();
    eprintln!("Defaults for run:");
    eprintln!("  all topics, shuffled order, report saved next to the binary");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MCQ_TOPIC  default topic filter for run");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Topics,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "run" => Some(Self::Run),
            "topics" => Some(Self::Topics),
            _ => None,
        }
    }
}

struct Args {
    filter: TopicFilter,
    shuffle: bool,
    out: Option<String>,
    save: bool,
}

impl Args {
    fn parse_run(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut filter = std::env::var("MCQ_TOPIC")
            .ok()
            .map_or(TopicFilter::All, |value| TopicFilter::from_choice(&value));
        let mut shuffle = true;
        let mut out = None;
        let mut save = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue { flag: "--topic" });
                    }
                    filter = TopicFilter::from_choice(&value);
                }
                "--no-shuffle" => shuffle = false,
                "--out" => {
                    let value = require_value(args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue { flag: "--out" });
                    }
                    out = Some(value);
                }
                "--no-save" => save = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            filter,
            shuffle,
            out,
            save,
        })
    }
}

/// What the user typed at the answer prompt.
enum AnswerInput {
    Selected(usize),
    Default,
    Quit,
}

fn parse_answer(line: &str) -> Option<AnswerInput> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(AnswerInput::Default);
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Some(AnswerInput::Quit);
    }

    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let index = match first.to_ascii_uppercase() {
        c @ 'A'..='D' => c as usize - 'A' as usize,
        c @ '1'..='4' => c as usize - '1' as usize,
        _ => return None,
    };
    debug_assert!(index < OPTION_COUNT);
    Some(AnswerInput::Selected(index))
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        // EOF: treat like quitting.
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn print_question(question: &Question, number: usize, total: usize) {
    println!();
    println!("Question {number} of {total}");
    println!("Topic: {}", question.topic());
    println!("{}", question.prompt());
    for (index, option) in question.options().iter().enumerate() {
        let label = option_letter(index).unwrap_or('?');
        println!("  {label}) {option}");
    }
}

fn run_quiz(
    trainer: &TrainerService,
    mut session: QuizSession,
    out: Option<String>,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let total = session.total_questions();

    while let Some(question) = session.current_question().cloned() {
        print_question(&question, session.position() + 1, total);

        let selected = loop {
            print!("Your answer [A-D, Enter = A, q to stop]: ");
            io::stdout().flush()?;
            let Some(line) = read_line(&mut input)? else {
                break None;
            };
            match parse_answer(&line) {
                Some(AnswerInput::Selected(index)) => break Some(index),
                Some(AnswerInput::Default) => break Some(0),
                Some(AnswerInput::Quit) => break None,
                None => println!("Please answer with A, B, C, or D."),
            }
        };

        let Some(selected) = selected else {
            break;
        };

        session.select_option(selected)?;
        let response = session.submit_answer()?;

        if response.is_correct() {
            println!("Correct!");
        } else {
            let letter = option_letter(question.answer_index()).unwrap_or('?');
            println!("Incorrect. Correct answer is {letter}.");
        }
        println!("Explanation: {}", question.explanation());

        if session.remaining() > 1 {
            print!("Press Enter for the next question (q to stop): ");
            io::stdout().flush()?;
            match read_line(&mut input)? {
                None => {
                    session.advance()?;
                    break;
                }
                Some(line) if line.trim().eq_ignore_ascii_case("q") => {
                    session.advance()?;
                    break;
                }
                Some(_) => session.advance()?,
            }
        } else {
            session.advance()?;
        }
    }

    let score = session.score();
    println!();
    println!("Session summary");
    println!("Questions attempted: {}", score.attempted());
    println!("Correct answers: {}", score.correct());
    match score.percentage() {
        Some(pct) => println!("Score: {pct:.1}%"),
        None => println!("You did not answer any questions in this session."),
    }

    if score.attempted() > 0 && save {
        let report = trainer.report(&session);
        let path = out.unwrap_or_else(|| trainer.report_file_name());
        std::fs::write(&path, report)?;
        println!("Session summary written to {path}");
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: run a quiz when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Run,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Run,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let catalog = Arc::new(bank::builtin_catalog()?);
    let mut iter = argv.into_iter();

    match cmd {
        Command::Topics => {
            if let Some(arg) = iter.next() {
                let err = ArgsError::UnknownArg(arg);
                eprintln!("{err}");
                print_usage();
                return Err(err.into());
            }
            let trainer = TrainerService::new(Clock::default_clock(), catalog);
            println!("Available topics:");
            for item in trainer.topics() {
                println!("  {} ({} questions)", item.topic, item.available);
            }
            Ok(())
        }
        Command::Run => {
            let parsed = Args::parse_run(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;

            let trainer = TrainerService::new(Clock::default_clock(), catalog)
                .with_shuffle(parsed.shuffle);

            let available = trainer.available(&parsed.filter);
            println!("Topic: {} ({available} questions)", parsed.filter);

            let session = match trainer.start(parsed.filter) {
                Ok(session) => session,
                Err(SessionError::Empty) => {
                    eprintln!("No questions for this topic yet. Try `topics` to list them.");
                    return Err(SessionError::Empty.into());
                }
                Err(err) => return Err(err.into()),
            };

            run_quiz(&trainer, session, parsed.out, parsed.save)
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_letters_and_digits() {
        assert!(matches!(parse_answer("a"), Some(AnswerInput::Selected(0))));
        assert!(matches!(parse_answer("D"), Some(AnswerInput::Selected(3))));
        assert!(matches!(parse_answer(" 2 "), Some(AnswerInput::Selected(1))));
    }

    #[test]
    fn parse_answer_blank_is_default() {
        assert!(matches!(parse_answer("\n"), Some(AnswerInput::Default)));
    }

    #[test]
    fn parse_answer_rejects_garbage() {
        assert!(parse_answer("E").is_none());
        assert!(parse_answer("AB").is_none());
        assert!(parse_answer("5").is_none());
    }

    #[test]
    fn parse_answer_quit() {
        assert!(matches!(parse_answer("q"), Some(AnswerInput::Quit)));
        assert!(matches!(parse_answer("Q\n"), Some(AnswerInput::Quit)));
    }
}
