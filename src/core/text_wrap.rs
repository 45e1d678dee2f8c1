//! Greedy word wrapping for tooltip text.

/// Default character budget per tooltip line.
pub const DEFAULT_WRAP_WIDTH: usize = 50;

/// Line separator understood by the hover-label renderer.
pub const LINE_BREAK: &str = "<br>";

/// Splits `text` into greedily filled lines.
///
/// A word moves to a new line when the current line's length plus the word's
/// length exceeds `max_line_length`; the joining space is not counted, so a
/// multi-word line may run one character over. Words are never split and a
/// word longer than the budget ends up alone on its own line. Lengths are
/// counted in `char`s.
#[must_use]
pub fn wrap_lines(text: &str, max_line_length: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + word_len > max_line_length {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps `text` and joins the lines with [`LINE_BREAK`].
#[must_use]
pub fn wrap(text: &str, max_line_length: usize) -> String {
    wrap_lines(text, max_line_length).join(LINE_BREAK)
}
