//! Request data types shared by the body builders.

mod etag;
mod select;

pub use self::etag::strip_quote_wrapping;
pub use self::select::{
    CompressionType, CsvInputFormat, CsvOutputFormat, ExpressionType, FileHeaderInfo, InputFormat,
    JsonInputFormat, JsonOutputFormat, JsonType, OutputFormat, bool_str,
};

/// Object key plus optional version id, for batch deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdentifier {
    /// Object key. Always present on the wire.
    pub key: String,
    /// Version id. Omitted from the body when `None` or empty.
    pub version_id: Option<String>,
}
