use crate::{layout, Px, WrapError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Font identifier that bypasses the metrics table entirely. Every glyph is
/// [TEST_GLYPH_WIDTH] wide and every control code is [TEST_CONTROL_CODE_WIDTH]
/// wide, which keeps expected layouts easy to work out by hand.
pub const TEST_FONT_ID: &str = "TEST";

/// Width of any single glyph under [TEST_FONT_ID]
pub const TEST_GLYPH_WIDTH: Px = Px(10);

/// Width of any control code under [TEST_FONT_ID]
pub const TEST_CONTROL_CODE_WIDTH: Px = Px(100);

/// Key in [FontMetrics::widths] used when a glyph or control code has no
/// entry of its own
pub const DEFAULT_WIDTH_KEY: &str = "default";

/// Pixel widths for a single font.
///
/// Keys of `widths` are either a single rendered character, a complete control
/// code including its braces (such as `{COLOR RED}`), or [DEFAULT_WIDTH_KEY].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    #[serde(default)]
    pub widths: HashMap<String, u32>,
    /// The width of the text box this font is normally drawn in. This is
    /// advisory only: it's up to the caller to pass it along as the maximum
    /// width when formatting.
    #[serde(default)]
    pub max_line_length: u32,
}

impl FontMetrics {
    /// Look up the width of `key`, falling back to the font's `default` entry
    /// and then to zero
    pub fn width_of(&self, key: &str) -> Px {
        self.widths
            .get(key)
            .or_else(|| self.widths.get(DEFAULT_WIDTH_KEY))
            .copied()
            .map(Px)
            .unwrap_or(Px::ZERO)
    }
}

/// The full set of font metrics, keyed by font id. A table is loaded once and
/// only read from afterwards, so a single table can be shared between any
/// number of threads formatting text at the same time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetricsTable {
    #[serde(default)]
    pub default_font_id: String,
    #[serde(default)]
    pub fonts: HashMap<String, FontMetrics>,
}

impl FontMetricsTable {
    /// Load a font metrics table from a JSON file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FontMetricsTable, WrapError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WrapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&contents)?;
        log::debug!(
            "loaded metrics for {} font(s) from {}",
            table.fonts.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a font metrics table from a JSON string
    pub fn from_json(json: &str) -> Result<FontMetricsTable, WrapError> {
        let table: FontMetricsTable = serde_json::from_str(json)?;
        if !table.default_font_id.is_empty() && !table.contains_font(&table.default_font_id) {
            log::warn!(
                "default font id '{}' has no metrics in the table",
                table.default_font_id
            );
        }
        Ok(table)
    }

    /// The font id to use when the caller doesn't name one
    pub fn default_font_id(&self) -> &str {
        &self.default_font_id
    }

    /// All font ids in the table, sorted
    pub fn font_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.fonts.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn font(&self, font_id: &str) -> Option<&FontMetrics> {
        self.fonts.get(font_id)
    }

    pub fn contains_font(&self, font_id: &str) -> bool {
        self.fonts.contains_key(font_id)
    }

    /// The advisory text box width recorded for a font, if the font is known
    pub fn max_line_length(&self, font_id: &str) -> Option<Px> {
        self.font(font_id).map(|font| Px(font.max_line_length))
    }

    /// Look up the width of `key` in the font identified by `font_id`. Unknown
    /// fonts have no widths, so everything in them is zero pixels wide.
    pub fn width_of(&self, key: &str, font_id: &str) -> Px {
        self.font(font_id)
            .map(|font| font.width_of(key))
            .unwrap_or(Px::ZERO)
    }

    /// Calculate the width of a single rendered character
    pub fn glyph_width(&self, ch: char, font_id: &str) -> Px {
        if font_id == TEST_FONT_ID {
            return TEST_GLYPH_WIDTH;
        }
        let mut buf = [0u8; 4];
        self.width_of(ch.encode_utf8(&mut buf), font_id)
    }

    /// Calculate the width of a complete control code such as `{PLAYER}`
    pub fn control_code_width(&self, code: &str, font_id: &str) -> Px {
        if font_id == TEST_FONT_ID {
            return TEST_CONTROL_CODE_WIDTH;
        }
        self.width_of(code, font_id)
    }

    /// Insert line breaks into `text` so that it fits within `max_width`
    /// pixels when drawn with the font `font_id`. See [layout::format_text].
    pub fn format_text(
        &self,
        text: &str,
        max_width: Px,
        font_id: &str,
    ) -> Result<String, WrapError> {
        layout::format_text(self, text, max_width, font_id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table() -> FontMetricsTable {
        FontMetricsTable::from_json(
            r#"{
                "defaultFontId": "1_latin",
                "fonts": {
                    "1_latin": {
                        "widths": { "a": 5, "{PLAYER}": 42, "default": 6 },
                        "maxLineLength": 208
                    },
                    "narrow": {
                        "widths": { "a": 3 }
                    }
                }
            }"#,
        )
        .expect("can parse table")
    }

    #[test]
    fn parses_camel_case_fields() {
        let table = table();
        assert_eq!(table.default_font_id(), "1_latin");
        assert_eq!(table.font_ids(), vec!["1_latin", "narrow"]);
        assert_eq!(table.max_line_length("1_latin"), Some(Px(208)));
        assert_eq!(table.max_line_length("narrow"), Some(Px(0)));
        assert_eq!(table.max_line_length("missing"), None);
    }

    #[test]
    fn width_lookup_falls_back_to_default_then_zero() {
        let table = table();
        assert_eq!(table.width_of("a", "1_latin"), Px(5));
        assert_eq!(table.width_of("{PLAYER}", "1_latin"), Px(42));
        assert_eq!(table.width_of("z", "1_latin"), Px(6));
        assert_eq!(table.width_of("z", "narrow"), Px(0));
        assert_eq!(table.width_of("a", "missing"), Px(0));
        assert_eq!(table.width_of("a", ""), Px(0));
    }

    #[test]
    fn test_font_ignores_table_contents() {
        let table = table();
        assert_eq!(table.glyph_width('a', TEST_FONT_ID), Px(10));
        assert_eq!(table.glyph_width('é', TEST_FONT_ID), Px(10));
        assert_eq!(table.control_code_width("{PLAYER}", TEST_FONT_ID), Px(100));
        assert_eq!(table.glyph_width('a', "1_latin"), Px(5));
        assert_eq!(table.control_code_width("{PLAYER}", "1_latin"), Px(42));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = FontMetricsTable::from_json(r#"{"fonts": {"x": {"widths": {"a": -1}}}}"#)
            .expect_err("negative widths are rejected");
        assert!(matches!(err, WrapError::ConfigParse(_)));
    }
}
