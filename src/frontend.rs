/// Source coordinates.
///
/// Declares the source file handle shared by every coordinate, the
/// character-based `Position` cursor with its line/column bookkeeping, and the
/// half-open `Span` that tokens and errors carry.
///
/// # Responsibilities
/// - Count characters, lines and columns exactly as a one-character-at-a-time
///   scan would.
/// - Provide cheap, independent snapshots of a coordinate.
pub mod position;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numeric literals, the four arithmetic operators, and parentheses,
/// always terminated by an end-of-input token. This is the first stage of the
/// front end.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Scans integer and decimal literals.
/// - Reports the first illegal character with its exact position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that follows the usual arithmetic precedence: signs bind tightest,
/// then `*` and `/`, then `+` and `-`, all binary levels left-associative.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting the first error with location info.
/// - Rejects trailing input after a complete expression.
pub mod parser;
