use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Node, is_additive_op, is_multiplicative_op, token_to_binary_operator},
    error::ParseError,
    frontend::parser::{
        core::{MAX_TREE_DEPTH, NESTED_TOO_DEEPLY, ParseResult, TokenCursor},
        unary::parse_factor,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A `Node::BinaryOp` tree representing the parsed expression.
pub fn parse_expr(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    fold_binary(tokens, parse_term, is_additive_op)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    fold_binary(tokens, parse_factor, is_multiplicative_op)
}

/// Parses one operand level joined by a class of binary operators.
///
/// Parses a first operand with `operand`, then, while the current token is an
/// operator accepted by `accepts`, consumes it, parses the next operand and
/// folds both into a new `Node::BinaryOp` whose left side is everything
/// parsed so far. This makes every level strictly left-associative:
/// `8 / 4 / 2` becomes `(8 / 4) / 2`.
///
/// Grammar (generic): `level := operand (op operand)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `operand`: Rule for the next-tighter precedence level.
/// - `accepts`: Which operators belong to this level.
///
/// # Errors
/// - The first error raised by `operand`; nothing after it is consumed.
/// - `Expression nested too deeply` at the operator whose node would make the
///   tree taller than [`MAX_TREE_DEPTH`].
fn fold_binary(tokens: &mut TokenCursor<'_>,
               operand: fn(&mut TokenCursor<'_>) -> ParseResult<Node>,
               accepts: fn(BinaryOperator) -> bool)
               -> ParseResult<Node> {
    let mut left = operand(tokens)?;
    let mut depth = left.depth();

    while let Some(op) = token_to_binary_operator(&tokens.peek().kind)
          && accepts(op)
    {
        let op_token = tokens.advance().clone();
        let right = operand(tokens)?;

        depth = depth.max(right.depth()) + 1;
        if depth > MAX_TREE_DEPTH {
            debug!(%op, at = %op_token.span.start, limit = MAX_TREE_DEPTH, "tree too deep");
            return Err(ParseError::invalid_syntax(op_token.span, NESTED_TOO_DEEPLY));
        }

        trace!(%op, depth, "fold");
        left = Node::BinaryOp { left:  Box::new(left),
                                op:    op_token,
                                right: Box::new(right), };
    }

    Ok(left)
}
