//! Downloadable snippet files.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in a `data:` URI payload.
const DATA_URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A file offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub filename: String,
    /// MIME type of the contents.
    pub mime: &'static str,
    /// Exact file contents.
    pub contents: String,
}

impl Download {
    /// Plain-text download.
    pub fn text(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime: "text/plain",
            contents: contents.into(),
        }
    }

    /// Contents as a percent-encoded `data:` URI, usable as a link target.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            self.mime,
            utf8_percent_encode(&self.contents, DATA_URI_ENCODE_SET)
        )
    }
}
