/// One of the three authored line breaks that can appear verbatim in dialog text.
/// The engine uses the same markers for the breaks that it inserts itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// `\n`: ends the first line of a paragraph
    FirstLine,
    /// `\l`: ends a continuation line, scrolling the text box
    Continue,
    /// `\p`: ends the paragraph, clearing the text box
    Paragraph,
}

impl BreakKind {
    /// The escape sequence for this break, as it appears in text
    pub fn marker(self) -> &'static str {
        match self {
            BreakKind::FirstLine => r"\n",
            BreakKind::Continue => r"\l",
            BreakKind::Paragraph => r"\p",
        }
    }

    /// Recognize a token that consists of exactly one break marker
    pub fn from_marker(token: &str) -> Option<BreakKind> {
        match token {
            r"\n" => Some(BreakKind::FirstLine),
            r"\l" => Some(BreakKind::Continue),
            r"\p" => Some(BreakKind::Paragraph),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of non-space text, possibly containing control codes
    Word(&'a str),
    /// A standalone authored break
    Break(BreakKind),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Word(word) => *word,
            Token::Break(kind) => kind.marker(),
        }
    }
}

/// Scan the next token out of `text`, returning how many bytes were consumed
/// along with the token's text.
///
/// Tokens are separated by spaces, except for spaces inside a `{...}` control
/// code. A `\n`, `\l` or `\p` escape is returned on its own when it starts a
/// token; when it follows ordinary characters, the characters before it are
/// returned and the escape is left for the next call.
///
/// Once only spaces remain, the returned token is empty and the whole of
/// `text` is consumed.
pub fn next_token(text: &str) -> (usize, &str) {
    let mut escape = false;
    let mut escape_pos = 0usize;
    let mut start = 0usize;
    let mut found_non_space = false;
    let mut found_regular = false;
    let mut end_on_next = false;
    let mut depth = 0usize;

    for (pos, ch) in text.char_indices() {
        if end_on_next {
            return (pos, &text[start..pos]);
        }

        if escape && matches!(ch, 'l' | 'n' | 'p') {
            if found_regular {
                return (escape_pos, &text[start..escape_pos]);
            }
            end_on_next = true;
        } else if ch == '\\' && depth == 0 {
            escape = true;
            if !found_regular {
                start = pos;
            }
            found_non_space = true;
            escape_pos = pos;
        } else {
            if ch == ' ' {
                if found_non_space && depth == 0 {
                    return (pos, &text[start..pos]);
                }
            } else {
                if !found_non_space {
                    start = pos;
                }
                found_regular = true;
                found_non_space = true;
                match ch {
                    '{' => depth += 1,
                    '}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }
            escape = false;
        }
    }

    if !found_non_space {
        return (text.len(), "");
    }
    (text.len(), &text[start..])
}

/// Iterator over the tokens of a piece of text, driving [next_token] until the
/// text is exhausted
pub struct Tokens<'a> {
    remaining: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Tokens<'a> {
        Tokens { remaining: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let (consumed, token) = next_token(self.remaining);
        self.remaining = &self.remaining[consumed..];
        if token.is_empty() {
            self.remaining = "";
            return None;
        }

        Some(match BreakKind::from_marker(token) {
            Some(kind) => Token::Break(kind),
            None => Token::Word(token),
        })
    }
}
