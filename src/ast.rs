use std::fmt;

use crate::frontend::{
    lexer::{Token, TokenKind},
    position::Span,
};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its children exclusively; the tree is built bottom-up by
/// the parser and handed over as a single root. Operator nodes keep the
/// operator token itself so its source span stays available to later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A numeric literal.
    Number {
        /// The `Int` or `Float` token.
        token: Token,
    },
    /// A leading `+` or `-` applied to an operand.
    UnaryOp {
        /// The `Plus` or `Minus` token.
        op:      Token,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A left-associative binary application.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The `Plus`, `Minus`, `Mul` or `Div` token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Gets the source range the whole node was parsed from.
    ///
    /// Parentheses around a sub-expression are not part of the tree, so they
    /// are not part of the span either.
    ///
    /// ## Example
    /// ```
    /// use numeral::run;
    ///
    /// let node = run("<stdin>", "1 + 23").unwrap();
    /// let span = node.span();
    ///
    /// assert_eq!((span.start.index, span.end.index), (0, 6));
    /// ```
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Number { token } => token.span.clone(),
            Self::UnaryOp { op, operand } => op.span.to(&operand.span()),
            Self::BinaryOp { left, right, .. } => left.span().to(&right.span()),
        }
    }

    /// Gets the one-based line number the node starts on.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.span().start.line + 1
    }

    /// Gets the binary operator of a [`Node::BinaryOp`].
    #[must_use]
    pub const fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::BinaryOp { op, .. } => token_to_binary_operator(&op.kind),
            _ => None,
        }
    }

    /// Gets the unary operator of a [`Node::UnaryOp`].
    #[must_use]
    pub const fn unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            Self::UnaryOp { op, .. } => token_to_unary_operator(&op.kind),
            _ => None,
        }
    }

    /// Gets the height of the tree; a lone number has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::UnaryOp { operand, .. } => 1 + operand.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Counts the nodes in the tree, including `self`.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::UnaryOp { operand, .. } => 1 + operand.size(),
            Self::BinaryOp { left, right, .. } => 1 + left.size() + right.size(),
        }
    }
}

/// Formats the tree in prefix tuple form, such as `(INT:1, PLUS, (MINUS, INT:2))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { token } => write!(f, "{token}"),
            Self::UnaryOp { op, operand } => write!(f, "({op}, {operand})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left}, {op}, {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use numeral::{
///     ast::{BinaryOperator, token_to_binary_operator},
///     frontend::lexer::TokenKind,
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Mul), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token kind to its unary operator, if it is one.
#[must_use]
pub const fn token_to_unary_operator(kind: &TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}

/// Returns `true` for the operators folded at the `expr` level (`+`, `-`).
#[must_use]
pub const fn is_additive_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
}

/// Returns `true` for the operators folded at the `term` level (`*`, `/`).
#[must_use]
pub const fn is_multiplicative_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
