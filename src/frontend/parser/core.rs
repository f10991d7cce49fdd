use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    frontend::{
        lexer::{Token, TokenKind, TokenStream},
        parser::binary::parse_expr,
        position::Span,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many signs and parentheses a factor may sit inside.
///
/// Each level costs several stack frames in the recursive rules, so the
/// limit keeps hostile input such as `((((...` from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum height of a tree built by chaining binary operators.
pub const MAX_TREE_DEPTH: usize = 512;

pub(crate) const NESTED_TOO_DEEPLY: &str = "Expression nested too deeply";

/// Read position over a [`TokenStream`].
///
/// The cursor never runs dry: once every real token has been consumed it
/// keeps returning the end-of-input token.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:  &'a TokenStream,
    index:   usize,
    nesting: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a TokenStream) -> Self {
        Self { tokens,
               index: 0,
               nesting: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.index)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    /// Returns `true` once only the end-of-input token is left.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Enters one more level of nesting; pair with [`Self::leave_nesting`].
    ///
    /// # Errors
    /// `Expression nested too deeply` at `at` once [`MAX_NESTING_DEPTH`]
    /// levels are open. The depth is left unchanged in that case.
    pub fn enter_nesting(&mut self, at: &Span) -> ParseResult<()> {
        if self.nesting >= MAX_NESTING_DEPTH {
            debug!(at = %at.start, limit = MAX_NESTING_DEPTH, "nesting limit reached");
            return Err(ParseError::invalid_syntax(at.clone(), NESTED_TOO_DEEPLY));
        }
        self.nesting += 1;
        Ok(())
    }

    /// Leaves a level opened by [`Self::enter_nesting`].
    pub const fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}

/// Parses a full expression.
///
/// This is the grammar's start rule; it descends into `term` and `factor`.
///
/// Grammar: `expression := expr`
///
/// # Parameters
/// - `tokens`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_expr(tokens)
}

/// Parses a complete token stream into a single tree.
///
/// After the expression, the end-of-input token must be next. Anything else
/// is trailing input that no operator connects to the expression.
///
/// # Errors
/// - Any error from the grammar rules, unchanged; the first one wins.
/// - `Invalid Syntax: Expected '+', '-', '*' or '/'` at the first token left
///   over after a complete expression.
///
/// # Example
/// ```
/// use numeral::frontend::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("<stdin>", "1 + 2 * 3").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(INT:1, PLUS, (INT:2, MUL, INT:3))");
///
/// let tokens = tokenize("<stdin>", "1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &TokenStream) -> ParseResult<Node> {
    let mut cursor = TokenCursor::new(tokens);
    let node = parse_expression(&mut cursor)?;

    if !cursor.at_end() {
        let leftover = cursor.peek();
        debug!(token = %leftover, at = %leftover.span.start, "trailing input");
        return Err(ParseError::invalid_syntax(leftover.span.clone(),
                                              "Expected '+', '-', '*' or '/'"));
    }

    debug!(nodes = node.size(), "parsed");
    Ok(node)
}
