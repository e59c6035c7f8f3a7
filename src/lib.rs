//! Line wrapping for dialog text drawn into fixed-size text boxes.
//!
//! Given a [FontMetricsTable] describing how many pixels wide each glyph and
//! control code is, [layout::format_text] inserts `\n`, `\l` and `\p` break
//! markers so that text fits within a maximum pixel width.

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Tokenizing, measuring and wrapping text
pub mod layout;

mod units;
pub use units::*;
