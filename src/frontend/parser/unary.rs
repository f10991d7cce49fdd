use crate::{
    ast::Node,
    error::ParseError,
    frontend::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenCursor, parse_expression},
    },
};

/// Parses a factor: a signed factor, a literal or a parenthesized expression.
///
/// Leading signs are right-associative and may nest, so `--5` is parsed as
/// `-(-(5))` and `+-3` as `+(-(3))`.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | INT | FLOAT
///             | "(" expr ")"
/// ```
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of the factor.
///
/// # Returns
/// A [`Node::UnaryOp`], a [`Node::Number`], or the inner node of a grouping.
///
/// # Errors
/// - `Expected int or float` at the current token when it starts no factor.
/// - `Expression nested too deeply` at the sign or `(` that opens one level
///   more than [`MAX_NESTING_DEPTH`](super::core::MAX_NESTING_DEPTH).
/// - Errors from a nested factor or grouping, unchanged.
pub(crate) fn parse_factor(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    match tokens.peek().kind {
        TokenKind::Plus | TokenKind::Minus => {
            let op = tokens.advance().clone();
            tokens.enter_nesting(&op.span)?;
            let operand = parse_factor(tokens);
            tokens.leave_nesting();
            Ok(Node::UnaryOp { op,
                               operand: Box::new(operand?) })
        },
        TokenKind::Int(_) | TokenKind::Float(_) => {
            Ok(Node::Number { token: tokens.advance().clone() })
        },
        TokenKind::LParen => parse_grouping(tokens),
        _ => Err(ParseError::invalid_syntax(tokens.peek().span.clone(), "Expected int or float")),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// - `Expected ')'` at the current token when the closing parenthesis is
///   missing; for unbalanced input that is the end-of-input token.
/// - Errors from the inner expression, unchanged.
fn parse_grouping(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let open = tokens.advance();
    tokens.enter_nesting(&open.span)?;
    let expr = parse_expression(tokens);
    tokens.leave_nesting();
    let expr = expr?;

    let closing = tokens.peek();
    if closing.kind == TokenKind::RParen {
        tokens.advance();
        Ok(expr)
    } else {
        Err(ParseError::invalid_syntax(closing.span.clone(), "Expected ')'"))
    }
}
