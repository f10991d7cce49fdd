use std::{fmt, sync::Arc};

use logos::Logos;
use num_bigint::BigInt;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::{
    error::{ErrorKind, ParseError},
    frontend::position::{Position, SourceFile, Span},
};

/// The kind of a lexical token, carrying the literal value for numbers.
///
/// Whitespace (spaces and tabs) is skipped. Every other character that does
/// not start one of these tokens is an illegal character; that includes
/// newlines and a `.` that is not part of a number.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// Decimal literal with a fractional point, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(OrderedFloat<f64>),
    /// Integer literal, such as `42`. Any number of digits is accepted.
    #[regex(r"[0-9]+", parse_integer)]
    Int(BigInt),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched from text; appended by [`tokenize`].
    Eof,
}

impl TokenKind {
    /// Returns `true` for `Int` and `Float`.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Upper-case name of the kind without its value, such as `INT`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        }
    }
}

/// Formats as `INT:5`, `FLOAT:1.5` or just the kind name, e.g. `PLUS`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}:{value}", self.name()),
            Self::Float(value) => write!(f, "{}:{:?}", self.name(), value.into_inner()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was read.
    pub kind: TokenKind,
    /// Where it was read.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// The complete output of the tokenizer.
///
/// A stream always ends with exactly one [`TokenKind::Eof`] token. Reading
/// past the end keeps returning that token, so the parser never runs out of
/// input to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    eof:    Token,
}

impl TokenStream {
    /// Returns the token at `index`, or the end-of-input token when `index`
    /// is past the last real token.
    #[must_use]
    pub fn get(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// The terminal end-of-input token.
    #[must_use]
    pub const fn eof(&self) -> &Token {
        &self.eof
    }

    /// Number of tokens, including the end-of-input token.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len() + 1
    }

    /// Always `false`: a stream holds at least its end-of-input token.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all tokens, ending with the end-of-input token.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().chain(std::iter::once(&self.eof))
    }

    /// Kinds of all tokens, ending with [`TokenKind::Eof`].
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.iter().map(|token| token.kind.clone()).collect()
    }
}

/// Formats as the bracketed token list, e.g. `[INT:1, PLUS, INT:2, EOF]`.
impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "]")
    }
}

/// Walks a [`Position`] forward over the source in step with logos.
///
/// logos reports byte ranges; the cursor converts them into character-based
/// positions by stepping over every character between the last visited byte
/// and the requested one.
struct Cursor<'s> {
    text:   &'s str,
    offset: usize,
    pos:    Position,
}

impl<'s> Cursor<'s> {
    fn new(text: &'s str, source: Arc<SourceFile>) -> Self {
        Self { text,
               offset: 0,
               pos: Position::start(source) }
    }

    /// Advances to byte `target` and returns a snapshot of the position there.
    fn seek(&mut self, target: usize) -> Position {
        if let Some(skipped) = self.text.get(self.offset..target) {
            for c in skipped.chars() {
                self.pos.advance(Some(c));
            }
            self.offset = target;
        }
        self.pos.clone()
    }

    /// Returns the character at the current byte offset, if any.
    fn peek_char(&self) -> Option<char> {
        self.text.get(self.offset..).and_then(|rest| rest.chars().next())
    }
}

/// Splits `source_text` into tokens.
///
/// Scanning stops at the first character that starts no token. The error then
/// spans exactly that character and no tokens are returned. On success the
/// stream ends with an end-of-input token whose span is the empty span just
/// past the last character.
///
/// Numbers are the longest run of digits containing at most one `.`; a second
/// `.` is left for the next token, where it is rejected.
///
/// # Errors
/// - [`ErrorKind::IllegalCharacter`] for any unexpected character.
///
/// # Example
/// ```
/// use numeral::frontend::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("<stdin>", "1 + 2").unwrap();
/// assert_eq!(tokens.kinds(),
///            vec![TokenKind::Int(1.into()),
///                 TokenKind::Plus,
///                 TokenKind::Int(2.into()),
///                 TokenKind::Eof]);
///
/// assert!(tokenize("<stdin>", "1 $ 2").is_err());
/// ```
pub fn tokenize(source_name: &str, source_text: &str) -> Result<TokenStream, ParseError> {
    let source = SourceFile::new(source_name, source_text);
    let mut cursor = Cursor::new(source_text, Arc::clone(&source));
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source_text);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = cursor.seek(range.start);

        match result {
            Ok(kind) => {
                let end = cursor.seek(range.end);
                trace!(%kind, %start, "token");
                tokens.push(Token::new(kind, Span::new(start, end)));
            },
            Err(()) => {
                let offending = cursor.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                debug!(%start, character = ?offending, "illegal character");
                return Err(ParseError::new(ErrorKind::IllegalCharacter,
                                           Span::single_at(&start, offending),
                                           format!("'{offending}'")));
            },
        }
    }

    let end = cursor.seek(source_text.len());
    let eof = Token::new(TokenKind::Eof, Span::empty_at(&end));
    debug!(source = %source.name, count = tokens.len() + 1, "tokenized");

    Ok(TokenStream { tokens, eof })
}

/// Parses a floating-point literal from the current token slice.
///
/// The slice always matches `[0-9]+\.[0-9]*`, which `f64::from_str` accepts,
/// including a trailing `.`.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<OrderedFloat<f64>> {
    lex.slice().parse().ok().map(OrderedFloat)
}

/// Parses an integer literal of any length from the current token slice.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<BigInt> {
    lex.slice().parse().ok()
}
