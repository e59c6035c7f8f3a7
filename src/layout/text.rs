use crate::error::WrapError;
use crate::font::{FontMetricsTable, TEST_FONT_ID};
use crate::layout::measure::{space_width, word_width};
use crate::layout::token::{BreakKind, Token, Tokens};
use crate::units::Px;

/// Running state for a single call to [format_text]. Nothing here outlives
/// the call.
struct LineState {
    output: String,
    line: String,
    line_width: Px,
    first_line_of_paragraph: bool,
    first_word_of_line: bool,
}

impl LineState {
    fn new(capacity: usize) -> LineState {
        LineState {
            output: String::with_capacity(capacity),
            line: String::new(),
            line_width: Px::ZERO,
            first_line_of_paragraph: true,
            first_word_of_line: true,
        }
    }

    /// Flush the current line followed by an authored break
    fn push_break(&mut self, kind: BreakKind) {
        self.output.push_str(&self.line);
        self.output.push_str(kind.marker());
        self.output.push('\n');
        self.line.clear();
        self.line_width = Px::ZERO;
        self.first_word_of_line = true;
        self.first_line_of_paragraph = kind == BreakKind::Paragraph;
    }

    /// Add a word to the current line, wrapping first if it would overflow.
    /// `width` already includes the leading space when the word isn't the
    /// first on its line.
    fn push_word(&mut self, word: &str, width: Px, max_width: Px) {
        if self.line_width + width > max_width && !self.line.is_empty() {
            let kind = if self.first_line_of_paragraph {
                self.first_line_of_paragraph = false;
                BreakKind::FirstLine
            } else {
                BreakKind::Continue
            };
            log::trace!("wrapping before '{word}' with {}", kind.marker());

            self.output.push_str(&self.line);
            self.output.push_str(kind.marker());
            self.output.push('\n');
            self.line.clear();
            self.line.push_str(word);
            // the new line keeps the width of the space that preceded the word
            self.line_width = width;
            self.first_word_of_line = false;
        } else {
            self.line_width += width;
            if !self.first_word_of_line {
                self.line.push(' ');
            }
            self.line.push_str(word);
            self.first_word_of_line = false;
        }
    }

    fn finish(mut self) -> String {
        self.output.push_str(&self.line);
        self.output
    }
}

/// Insert line breaks into dialog text so that every line fits within
/// `max_width` pixels when drawn with the font `font_id`.
///
/// Words are placed greedily: each word goes on the current line if it fits,
/// otherwise the current line is ended with a `\n` (when it is the first line
/// of a paragraph) or a `\l` (any later line) and the word starts a new line.
/// A word is never split, so a single word wider than `max_width` gets a line
/// to itself. Authored `\n`, `\l` and `\p` breaks are kept as they are, and
/// every break in the output is followed by a newline character. Newlines in
/// the input are treated as spaces.
///
/// An empty `font_id` disables measurement (everything is zero pixels wide),
/// and [TEST_FONT_ID] measures with fixed widths. Any other font id must be in
/// `metrics`, otherwise [WrapError::UnknownFontId] is returned.
///
/// # Example
///
/// ```
/// use pixel_wrap::{layout::format_text, FontMetricsTable, Px, TEST_FONT_ID};
///
/// let metrics = FontMetricsTable::default();
/// let text = format_text(&metrics, "ab cd", Px(25), TEST_FONT_ID).expect("can format");
/// assert_eq!(text, "ab\\n\ncd");
/// ```
pub fn format_text(
    metrics: &FontMetricsTable,
    text: &str,
    max_width: Px,
    font_id: &str,
) -> Result<String, WrapError> {
    if !font_id.is_empty() && font_id != TEST_FONT_ID && !metrics.contains_font(font_id) {
        log::debug!("rejecting unknown font id '{font_id}'");
        return Err(WrapError::UnknownFontId {
            font_id: font_id.to_string(),
            valid: metrics.font_ids(),
        });
    }

    // normalize newlines, real line breaks only come from escapes
    let text = text.replace('\n', " ");

    let space = space_width(metrics, font_id);
    let mut state = LineState::new(text.len());

    for token in Tokens::new(&text) {
        match token {
            Token::Break(kind) => state.push_break(kind),
            Token::Word(word) => {
                let mut width = word_width(metrics, word, font_id);
                if !state.first_word_of_line {
                    width += space;
                }
                state.push_word(word, width, max_width);
            }
        }
    }

    Ok(state.finish())
}
