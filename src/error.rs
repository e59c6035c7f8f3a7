use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum WrapError {
    #[error("failed to read font metrics from {}", path.display())]
    /// The font metrics file could not be read
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font metrics: {0}")]
    /// [serde_json] failed to parse the font metrics
    ConfigParse(#[from] serde_json::Error),

    #[error("unknown font id '{font_id}', valid font ids are: {}", valid.join(", "))]
    /// The font id given to [format_text](crate::layout::format_text) is not in the table
    UnknownFontId { font_id: String, valid: Vec<String> },
}
