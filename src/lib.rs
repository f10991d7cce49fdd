//! # numeral
//!
//! numeral is the front end of a small arithmetic expression language written
//! in Rust. It turns source text made of integers, decimals, `+ - * /`, unary
//! signs and parentheses into an abstract syntax tree, or into a single
//! diagnostic that points at the exact offending source location.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use tracing::{debug, instrument};

use crate::{
    ast::Node,
    error::ParseError,
    frontend::{lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents the syntactic
/// structure of an expression as a tree, plus the operator classifications
/// the parser uses to decide precedence.
///
/// # Responsibilities
/// - Defines the number, unary and binary node shapes.
/// - Keeps operator tokens (and so source locations) inside the tree.
/// - Renders trees in a compact prefix form for inspection.
pub mod ast;
/// Provides the error type for lexing and parsing.
///
/// This module defines the one error that the front end can return. It
/// carries the error kind, a detail message, and the source span, and can
/// render itself together with an underlined excerpt of the source.
///
/// # Responsibilities
/// - Defines the error kinds (illegal character, literal too large, invalid
///   syntax).
/// - Attaches exact start and end positions for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Tokenizing and parsing.
///
/// This module ties together source positions, the lexer and the
/// recursive-descent parser. Each stage runs once over its input and stops at
/// the first error.
///
/// # Responsibilities
/// - Tracks line and column coordinates while scanning.
/// - Produces the token stream and the tree.
/// - Hands the first failure of any stage back to the caller unchanged.
pub mod frontend;
/// General utilities shared by the diagnostics code.
pub mod util;

/// Tokenizes and parses `source_text` into a tree.
///
/// The lexer runs first; if it fails, its error is returned and the parser is
/// never invoked. Otherwise the parser's result is returned as is. Exactly one
/// of tree or error is produced.
///
/// # Parameters
/// - `source_name`: Name shown in diagnostics, such as a path or `<stdin>`.
/// - `source_text`: The expression source.
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
///
/// # Examples
/// ```
/// use numeral::run;
///
/// // Multiplication binds tighter than addition.
/// let tree = run("<stdin>", "2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
///
/// // An unbalanced parenthesis is reported at the end of input.
/// let err = run("<stdin>", "(1 + 2").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Syntax: Expected ')'");
/// assert_eq!(err.span.start.index, 6);
/// ```
#[instrument(level = "debug", skip(source_text), fields(len = source_text.len()))]
pub fn run(source_name: &str, source_text: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source_name, source_text)?;
    let result = parse(&tokens);

    match &result {
        Ok(node) => debug!(tree = %node, "run succeeded"),
        Err(err) => debug!(error = %err, at = %err.span.start, "run failed"),
    }

    result
}
