use crate::font::FontMetricsTable;
use crate::units::Px;

/// Calculate the width of a single word drawn in the font `font_id`.
///
/// Control codes (brace-delimited spans such as `{COLOR RED}`) are priced as
/// a whole using their complete text as the key; everything outside of them is
/// priced one glyph at a time. Braces nest the same way they do when the text
/// is split into tokens, so `{A {B} C}` is a single control code. An
/// unterminated `{` and a `}` with no matching `{` are ordinary glyphs.
pub fn word_width(metrics: &FontMetricsTable, word: &str, font_id: &str) -> Px {
    let mut width = Px::ZERO;
    let mut depth = 0usize;
    let mut code_start = 0usize;

    for (pos, ch) in word.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    code_start = pos;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    let code = &word[code_start..=pos];
                    width += metrics.control_code_width(code, font_id);
                }
            }
            _ if depth == 0 => width += metrics.glyph_width(ch, font_id),
            _ => {}
        }
    }

    // an unterminated control code is just text
    if depth > 0 {
        width += word[code_start..]
            .chars()
            .map(|ch| metrics.glyph_width(ch, font_id))
            .sum::<Px>();
    }

    width
}

/// Calculate the width of the space drawn between two words
pub fn space_width(metrics: &FontMetricsTable, font_id: &str) -> Px {
    metrics.glyph_width(' ', font_id)
}
