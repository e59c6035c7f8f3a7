//! Property tests for the wrap engine: words are never split or lost, every
//! wrapped line fits unless it holds a single word, and wrapping is stable
//! when applied again to its own output. Inputs range from plain words to
//! dialog mixing control codes (with spaces inside the braces) and authored
//! `\n`, `\l` and `\p` breaks.

use pixel_wrap::layout::format_text;
use pixel_wrap::layout::token::{Token, Tokens};
use pixel_wrap::{FontMetricsTable, Px, TEST_FONT_ID};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Undo the breaks inserted by the engine, for text without authored breaks
fn unwrap(text: &str) -> String {
    text.replace("\\n\n", " ").replace("\\l\n", " ")
}

fn test_font(text: &str, max_width: u32) -> String {
    format_text(&FontMetricsTable::default(), text, Px(max_width), TEST_FONT_ID)
        .expect("test font is always valid")
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z,.!?']{1,10}").expect("valid regex"),
        0..30,
    )
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ ]{1,3}|\n").expect("valid regex")
}

fn text_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (words_strategy(), separator_strategy()).prop_map(|(words, sep)| {
        let text = words.join(sep.as_str());
        (words, text)
    })
}

fn tokens_of(text: &str) -> Vec<Token<'_>> {
    Tokens::new(text).collect()
}

/// Split formatted output back into token texts, dropping the breaks the
/// engine inserted. Authored breaks look the same as inserted ones, so they
/// are told apart by matching the output against `source` token by token:
/// inserted breaks only ever appear where `source` has a word.
fn strip_inserted_breaks(source: &str, formatted: &str) -> Vec<String> {
    let source = source.replace('\n', " ");
    let formatted = formatted.replace('\n', " ");
    let expected = tokens_of(&source);

    let mut kept = Vec::new();
    let mut next = 0usize;
    for token in Tokens::new(&formatted) {
        if expected.get(next) == Some(&token) {
            next += 1;
        } else if let Token::Break(_) = token {
            continue;
        }
        kept.push(token.text().to_string());
    }
    kept
}

fn source_tokens(source: &str) -> Vec<String> {
    let source = source.replace('\n', " ");
    tokens_of(&source)
        .into_iter()
        .map(|token| token.text().to_string())
        .collect()
}

fn dialog_strategy() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        4 => prop::string::string_regex("[a-zA-Z,.!?']{1,10}").expect("valid regex"),
        2 => prop::string::string_regex(r"[a-z]{0,3}\{[A-Z]{1,5}( [A-Z]{1,5}){0,2}\}[a-z]{0,3}")
            .expect("valid regex"),
        1 => prop::sample::select(vec![r"\n", r"\l", r"\p"]).prop_map(str::to_string),
    ];
    (prop::collection::vec(token, 0..30), separator_strategy())
        .prop_map(|(tokens, sep)| tokens.join(sep.as_str()))
}

proptest! {
    #[test]
    fn words_are_never_split((words, text) in text_strategy(), max_width in 0u32..300) {
        let formatted = test_font(&text, max_width);
        prop_assert_eq!(unwrap(&formatted), words.join(" "));
    }

    #[test]
    fn lines_fit_unless_they_hold_one_word((_words, text) in text_strategy(), max_width in 0u32..300) {
        let formatted = test_font(&text, max_width);
        for line in formatted.lines() {
            let line = line.trim_end_matches("\\n").trim_end_matches("\\l");
            let width = line.chars().count() as u32 * 10;
            prop_assert!(width <= max_width || !line.contains(' '), "line '{}' overflows", line);
        }
    }

    #[test]
    fn rewrapping_is_stable((_words, text) in text_strategy(), max_width in 0u32..300) {
        let formatted = test_font(&text, max_width);
        prop_assert_eq!(test_font(&unwrap(&formatted), max_width), formatted);
    }

    #[test]
    fn dialog_words_and_authored_breaks_survive(text in dialog_strategy(), max_width in 0u32..600) {
        let formatted = test_font(&text, max_width);
        prop_assert_eq!(strip_inserted_breaks(&text, &formatted), source_tokens(&text));
    }

    #[test]
    fn rewrapping_dialog_is_stable(text in dialog_strategy(), max_width in 0u32..600) {
        let formatted = test_font(&text, max_width);
        let rewrapped = test_font(&strip_inserted_breaks(&text, &formatted).join(" "), max_width);
        prop_assert_eq!(rewrapped, formatted);
    }
}

#[test]
fn wraps_lorem_ipsum_with_real_widths() {
    let metrics = FontMetricsTable::from_json(
        r#"{"fonts": {"body": {"widths": {" ": 3, "i": 2, "l": 2, "m": 8, "w": 8, "default": 5}}}}"#,
    )
    .expect("can parse metrics");
    let text = lipsum::lipsum(120);

    let formatted = format_text(&metrics, &text, Px(208), "body").expect("can format");
    assert_eq!(
        unwrap(&formatted).split(' ').collect::<Vec<_>>(),
        text.split_whitespace().collect::<Vec<_>>()
    );

    let mut markers = formatted.lines().filter_map(|line| {
        line.strip_suffix("\\n")
            .map(|_| "\\n")
            .or_else(|| line.strip_suffix("\\l").map(|_| "\\l"))
    });
    assert_eq!(markers.next(), Some("\\n"));
    assert!(markers.all(|marker| marker == "\\l"));
}
