//! Pixel-width-aware line wrapping for dialog text.
//!
//! Dialog is drawn into a fixed-size text box, so line breaks have to be
//! placed according to how wide each glyph actually is in the box's font.
//! Text is split into [tokens](token::Tokens), each word is
//! [measured](measure::word_width) against a [FontMetricsTable](crate::FontMetricsTable),
//! and [format_text] places the words greedily, inserting break markers:
//!
//! - `\n` ends the first line of a paragraph
//! - `\l` ends any later line of a paragraph
//! - `\p` ends the paragraph
//!
//! Breaks the author wrote into the text are kept as-is.
//!
//! # Example
//!
//! ```
//! use pixel_wrap::FontMetricsTable;
//! use pixel_wrap::layout::format_text;
//!
//! let metrics = FontMetricsTable::from_json(
//!     r#"{"defaultFontId": "main", "fonts": {"main": {"widths": {"default": 6}, "maxLineLength": 80}}}"#,
//! )
//! .expect("can parse metrics");
//!
//! let width = metrics.max_line_length("main").expect("main is a font");
//! let text = format_text(&metrics, "Hello there! How are you?", width, "main")
//!     .expect("can format");
//! assert_eq!(text, "Hello there!\\n\nHow are you?");
//! ```

pub mod measure;
mod text;
pub mod token;

pub use text::*;
