use std::io;

use thiserror::Error;

pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Lexical problems the scanner detects. The display text is what reaches
/// the [`Reporter`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ScanError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated block comment.")]
    UnterminatedComment,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Usage: loxscan [path]")]
    Usage,
    #[error("Could not read file \"{path}\".")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Sink for lexical diagnostics. Called synchronously once per problem.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// Prints `[line N] Error: message` to stderr and remembers whether anything
/// was printed.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("[line {line}] Error: {message}");
        self.had_error = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

/// Collects every report in order.
#[derive(Debug, Default)]
pub struct ErrorLog {
    pub diagnostics: Vec<Diagnostic>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Reporter for ErrorLog {
    fn report(&mut self, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_reporters() {
        let mut seen = Vec::new();
        let mut reporter = |line: usize, message: &str| seen.push((line, message.to_owned()));
        reporter.report(3, "Unexpected character.");
        assert_eq!(seen, vec![(3, "Unexpected character.".to_owned())]);
    }

    #[test]
    fn console_reporter_remembers_errors() {
        let mut reporter = ConsoleReporter::new();
        assert!(!reporter.had_error());
        reporter.report(1, &ScanError::UnterminatedString.to_string());
        assert!(reporter.had_error());
        reporter.reset();
        assert!(!reporter.had_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            ScanError::UnexpectedCharacter('@').to_string(),
            "Unexpected character."
        );
        assert_eq!(
            ScanError::UnterminatedComment.to_string(),
            "Unterminated block comment."
        );
    }
}
