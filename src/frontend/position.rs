use std::{fmt, sync::Arc};

/// A named piece of source text.
///
/// Every [`Position`] holds a shared handle to the file it points into, so a
/// diagnostic can always recover the source name and the full text it needs
/// for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name of the source, such as a file path or `<stdin>`.
    pub name: String,
    /// The complete source text.
    pub text: String,
}

impl SourceFile {
    /// Creates a new shared source file.
    ///
    /// # Example
    /// ```
    /// use numeral::frontend::position::SourceFile;
    ///
    /// let source = SourceFile::new("<stdin>", "1 + 2");
    /// assert_eq!(source.name, "<stdin>");
    /// assert_eq!(source.text, "1 + 2");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self { name: name.into(),
                        text: text.into(), })
    }
}

/// A coordinate in a [`SourceFile`].
///
/// `index` counts characters (not bytes) consumed from the start of the text.
/// `line` and `column` are zero-based; the column resets and the line
/// increments exactly when the character being left behind is a newline.
///
/// Positions are plain values: cloning one takes an independent snapshot.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Characters consumed from the start of the source.
    pub index:  usize,
    /// Zero-based line number.
    pub line:   usize,
    /// Zero-based column within `line`.
    pub column: usize,
    /// The source this position points into.
    pub source: Arc<SourceFile>,
}

impl Position {
    /// Returns the position of the first character of `source`.
    #[must_use]
    pub const fn start(source: Arc<SourceFile>) -> Self {
        Self { index: 0,
               line: 0,
               column: 0,
               source }
    }

    /// Moves one character forward.
    ///
    /// `current` must be the character being stepped over, i.e. the one at
    /// this position before the call. Passing `Some('\n')` moves to the first
    /// column of the next line.
    ///
    /// # Example
    /// ```
    /// use numeral::frontend::position::{Position, SourceFile};
    ///
    /// let mut pos = Position::start(SourceFile::new("<stdin>", "1\n2"));
    /// pos.advance(Some('1'));
    /// assert_eq!((pos.index, pos.line, pos.column), (1, 0, 1));
    ///
    /// pos.advance(Some('\n'));
    /// assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub const fn advance(&mut self, current: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if let Some('\n') = current {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Name of the source this position points into.
    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    /// Full text of the source this position points into.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source.text
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
         .field("index", &self.index)
         .field("line", &self.line)
         .field("column", &self.column)
         .field("source", &self.source.name)
         .finish()
    }
}

/// Formats as `name:line:column` with one-based line and column.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source.name, self.line + 1, self.column + 1)
    }
}

/// A half-open range `[start, end)` of source positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// First position covered.
    pub start: Position,
    /// Position just past the last covered character.
    pub end:   Position,
}

impl Span {
    /// Creates a span from two position snapshots.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at `pos`.
    #[must_use]
    pub fn empty_at(pos: &Position) -> Self {
        Self { start: pos.clone(),
               end:   pos.clone(), }
    }

    /// Creates a span covering the single character `current` at `pos`.
    #[must_use]
    pub fn single_at(pos: &Position, current: char) -> Self {
        let mut end = pos.clone();
        end.advance(Some(current));
        Self { start: pos.clone(),
               end }
    }

    /// Joins two spans into one running from `self.start` to `other.end`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.index.saturating_sub(self.start.index)
    }

    /// Returns `true` when the span covers no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(text: &str) -> Position {
        Position::start(SourceFile::new("test", text))
    }

    #[test]
    fn advance_moves_column() {
        let mut pos = origin("abc");
        pos.advance(Some('a')).advance(Some('b'));
        assert_eq!((pos.index, pos.line, pos.column), (2, 0, 2));
    }

    #[test]
    fn newline_resets_column() {
        let mut pos = origin("ab\ncd");
        for c in "ab\nc".chars() {
            pos.advance(Some(c));
        }
        assert_eq!((pos.index, pos.line, pos.column), (4, 1, 1));
    }

    #[test]
    fn advance_without_char_never_breaks_line() {
        let mut pos = origin("");
        pos.advance(None);
        assert_eq!((pos.index, pos.line, pos.column), (1, 0, 1));
    }

    #[test]
    fn snapshot_is_independent() {
        let mut pos = origin("12");
        let snapshot = pos.clone();
        pos.advance(Some('1'));
        assert_eq!(snapshot.index, 0);
        assert_eq!(pos.index, 1);
    }

    #[test]
    fn single_char_span_crossing_newline() {
        let span = Span::single_at(&origin("\n"), '\n');
        assert_eq!(span.len(), 1);
        assert_eq!((span.end.line, span.end.column), (1, 0));
    }

    #[test]
    fn display_is_one_based() {
        let mut pos = origin("1+2");
        pos.advance(Some('1'));
        assert_eq!(pos.to_string(), "test:1:2");
    }
}
