/// Source excerpt rendering for diagnostics.
///
/// This module turns a pair of positions into the familiar "source line with
/// carets underneath" excerpt shown below an error message. It only reads the
/// source text carried by the positions and never fails: spans that point
/// past the end of a line or of the text are clamped to what exists.
///
/// # Responsibilities
/// - Select the source lines a span touches.
/// - Underline the covered columns with `^`, drawing at least one caret.
/// - Keep carets aligned with character columns when lines contain tabs.
pub mod arrows;
