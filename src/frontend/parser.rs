/// Parser entry point and shared plumbing.
///
/// Declares the result type used by every grammar rule, the token cursor the
/// rules read from, and the top-level `parse` function that requires the
/// whole token stream to be consumed.
pub mod core;

/// Binary operator levels.
///
/// Implements the `expr` (`+`, `-`) and `term` (`*`, `/`) rules on top of a
/// single left-folding combinator.
pub mod binary;

/// Unary operators and atoms.
///
/// Implements the `factor` rule: leading signs, numeric literals, and
/// parenthesized sub-expressions.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult, TokenCursor, parse};
