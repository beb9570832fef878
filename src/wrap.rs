use unicode_width::UnicodeWidthChar;

// Glues words together; never a break opportunity.
const NO_BREAK_SPACE: char = '\u{00A0}';

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Reflows `text` so no line is wider than `max_width` columns.
    ///
    /// Existing newlines are kept and reset the column count. Lines break at
    /// whitespace; a word at least `max_width` wide is moved to its own line
    /// and left whole. Word width is display width, each whitespace character
    /// counts as one column.
    pub fn wrap(text: &str, max_width: usize) -> String {
        let mut wrapped = String::with_capacity(text.len() + text.len() / max_width.max(1));
        let mut current_width = 0;

        let mut word = String::new();
        let mut word_width = 0;
        let mut space = String::new();
        let mut space_width = 0;

        for ch in text.chars() {
            if ch == '\n' {
                if word.is_empty() {
                    // Trailing whitespace survives only if it still fits.
                    if current_width + space_width <= max_width {
                        wrapped.push_str(&space);
                    }
                } else {
                    wrapped.push_str(&space);
                    wrapped.push_str(&word);
                }
                space.clear();
                space_width = 0;
                word.clear();
                word_width = 0;

                wrapped.push(ch);
                current_width = 0;
            } else if ch.is_whitespace() && ch != NO_BREAK_SPACE {
                if space.is_empty() || !word.is_empty() {
                    current_width += space_width + word_width;
                    wrapped.push_str(&space);
                    wrapped.push_str(&word);
                    space.clear();
                    space_width = 0;
                    word.clear();
                    word_width = 0;
                }
                space.push(ch);
                space_width += 1;
            } else {
                word.push(ch);
                word_width += ch.width().unwrap_or(0);

                if current_width + space_width + word_width > max_width && word_width < max_width {
                    wrapped.push('\n');
                    current_width = 0;
                    space.clear();
                    space_width = 0;
                }
            }
        }

        if word.is_empty() {
            if current_width + space_width <= max_width {
                wrapped.push_str(&space);
            }
        } else {
            wrapped.push_str(&space);
            wrapped.push_str(&word);
        }

        wrapped
    }
}
