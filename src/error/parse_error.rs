use thiserror::Error;

use crate::{frontend::position::Span, util::arrows::string_with_arrows};

/// The category of a [`ParseError`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that starts no token.
    #[error("Illegal Character")]
    IllegalCharacter,
    /// A token sequence that does not follow the expression grammar.
    #[error("Invalid Syntax")]
    InvalidSyntax,
}

/// Represents the first error met while tokenizing or parsing.
///
/// Only one error is ever produced per run: the first failure aborts the
/// stage it happened in and the later stages are never entered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}: {details}")]
pub struct ParseError {
    /// What went wrong.
    pub kind:    ErrorKind,
    /// The offending source range.
    pub span:    Span,
    /// A short human-readable description, such as `'$'` or `Expected ')'`.
    pub details: String,
}

impl ParseError {
    /// Creates an error of any kind.
    #[must_use]
    pub fn new(kind: ErrorKind, span: Span, details: impl Into<String>) -> Self {
        Self { kind,
               span,
               details: details.into() }
    }

    /// Creates an [`ErrorKind::InvalidSyntax`] error.
    #[must_use]
    pub fn invalid_syntax(span: Span, details: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSyntax, span, details)
    }

    /// One-based line the error starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.start.line + 1
    }

    /// Renders the full diagnostic: header, location, and the offending
    /// source lines with the span underlined.
    ///
    /// # Example
    /// ```
    /// use numeral::run;
    ///
    /// let err = run("<stdin>", "1 + $").unwrap_err();
    /// assert_eq!(err.as_string(),
    ///            "ERROR Illegal Character: '$'\n  File <stdin>, line 1\n\n1 + $\n    ^");
    /// ```
    #[must_use]
    pub fn as_string(&self) -> String {
        let start = &self.span.start;
        format!("ERROR {}: {}\n  File {}, line {}\n\n{}",
                self.kind,
                self.details,
                start.source_name(),
                self.line(),
                string_with_arrows(start.source_text(), start, &self.span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::position::{Position, SourceFile};

    fn span(text: &str, from: usize, to: usize) -> Span {
        let mut start = Position::start(SourceFile::new("calc.txt", text));
        let chars: Vec<char> = text.chars().collect();
        for c in &chars[..from] {
            start.advance(Some(*c));
        }
        let mut end = start.clone();
        for c in &chars[from..to] {
            end.advance(Some(*c));
        }
        Span::new(start, end)
    }

    #[test]
    fn display_is_kind_and_details() {
        let err = ParseError::invalid_syntax(span("(1", 2, 2), "Expected ')'");
        assert_eq!(err.to_string(), "Invalid Syntax: Expected ')'");
    }

    #[test]
    fn kind_names_are_title_case() {
        assert_eq!(ErrorKind::IllegalCharacter.to_string(), "Illegal Character");
        assert_eq!(ErrorKind::InvalidSyntax.to_string(), "Invalid Syntax");
    }

    #[test]
    fn as_string_names_file_and_line() {
        let err = ParseError::new(ErrorKind::IllegalCharacter, span("1 + 2 # 3", 6, 7), "'#'");
        assert_eq!(err.as_string(),
                   "ERROR Illegal Character: '#'\n  File calc.txt, line 1\n\n1 + 2 # 3\n      ^");
    }

    #[test]
    fn zero_width_span_still_gets_a_caret() {
        let err = ParseError::invalid_syntax(span("(1+2", 4, 4), "Expected ')'");
        assert!(err.as_string().ends_with("(1+2\n    ^"));
    }
}
