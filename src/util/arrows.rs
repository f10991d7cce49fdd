use crate::frontend::position::Position;

/// Renders the source lines between `start` and `end` with the covered
/// columns underlined by `^`.
///
/// The first line is underlined from `start.column`, the last one up to
/// `end.column`, and any line in between in full. A zero-width span still
/// gets one caret so it stays visible; continuation lines with nothing to
/// underline are left out. Tabs are shown as single spaces so every caret
/// lands under the character it marks.
///
/// # Parameters
/// - `text`: The complete source text.
/// - `start`: First position covered.
/// - `end`: Position just past the last covered character.
///
/// # Returns
/// The excerpt, one source line followed by one underline per covered line,
/// without a trailing newline.
///
/// # Example
/// ```
/// use numeral::{
///     frontend::position::{Position, SourceFile},
///     util::arrows::string_with_arrows,
/// };
///
/// let text = "12 + x";
/// let mut start = Position::start(SourceFile::new("<stdin>", text));
/// for c in "12 + ".chars() {
///     start.advance(Some(c));
/// }
/// let mut end = start.clone();
/// end.advance(Some('x'));
///
/// assert_eq!(string_with_arrows(text, &start, &end), "12 + x\n     ^");
/// ```
#[must_use]
pub fn string_with_arrows(text: &str, start: &Position, end: &Position) -> String {
    let last_line = end.line.max(start.line);
    let mut rendered = Vec::new();

    for (number, line) in text.split('\n')
                              .enumerate()
                              .skip(start.line)
                              .take(last_line - start.line + 1)
    {
        let line: String = line.chars().map(|c| if c == '\t' { ' ' } else { c }).collect();
        let is_first = number == start.line;

        let col_start = if is_first { start.column } else { 0 };
        let col_end = if number == last_line {
            end.column
        } else {
            line.chars().count()
        };
        let carets = col_end.saturating_sub(col_start);

        if carets == 0 && !is_first {
            continue;
        }

        rendered.push(format!("{line}\n{}{}", " ".repeat(col_start), "^".repeat(carets.max(1))));
    }

    rendered.join("\n")
}
