/// Lexing and parsing errors.
///
/// Defines the single error type produced by the front end. An error names
/// its kind, the exact source span it points at, and a short detail message.
/// Lexical errors (illegal characters, oversized literals) and grammar errors
/// share the same type so callers handle one failure channel.
pub mod parse_error;

pub use parse_error::{ErrorKind, ParseError};
