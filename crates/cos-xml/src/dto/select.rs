//! Select-query format descriptors.
//!
//! Input and output serialization descriptors for SQL-over-object select
//! requests. Each descriptor appends its own subtree under a caller-supplied
//! parent node, so the request builder never sees the concrete variant. All
//! option defaults mirror the service schema, and an unconfigured descriptor
//! serializes validly.
//!
//! The default record delimiter is the two-character sequence `\n`
//! (backslash, `n`), not a newline byte; that is the escape notation the
//! service expects on the wire.

use crate::xml::{Document, NodeId};

/// CSV header-line handling for select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileHeaderInfo {
    /// The input has no header line.
    #[default]
    None,
    /// A header line exists but its column names are not addressable.
    Ignore,
    /// Column names from the header line are addressable in the expression.
    Use,
}

impl FileHeaderInfo {
    /// Wire token for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Ignore => "IGNORE",
            Self::Use => "USE",
        }
    }
}

/// Compression applied to select input objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionType {
    /// Uncompressed input.
    #[default]
    None,
    /// Gzip-compressed input.
    Gzip,
}

impl CompressionType {
    /// Wire token for this compression kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Gzip => "GZIP",
        }
    }
}

/// Framing of JSON select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonType {
    /// The object is a single JSON document.
    #[default]
    Document,
    /// The object is newline-delimited JSON records.
    Lines,
}

impl JsonType {
    /// Wire token for this framing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Lines => "LINES",
        }
    }
}

/// Dialect of the select expression. `SQL` is the only defined dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpressionType {
    /// SQL expression.
    #[default]
    Sql,
}

impl ExpressionType {
    /// Wire token for this dialect.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sql => "SQL",
        }
    }
}

/// Uppercase boolean token used across the select request family.
///
/// The batch-delete `Quiet` flag uses lowercase literals at its own call
/// site; the two casings are distinct wire surfaces and are never unified.
#[must_use]
pub fn bool_str(flag: bool) -> &'static str {
    if flag { "TRUE" } else { "FALSE" }
}

/// Input-side serialization descriptor for a select request.
///
/// Renders an `InputSerialization` element (carrying a `CompressionType`
/// and a variant-specific block) under the given parent.
pub trait InputFormat {
    /// Appends this descriptor's subtree under `parent` and returns the
    /// created `InputSerialization` node.
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId;
}

/// Output-side serialization descriptor for a select request.
///
/// Renders an `OutputSerialization` element under the given parent.
pub trait OutputFormat {
    /// Appends this descriptor's subtree under `parent` and returns the
    /// created `OutputSerialization` node.
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId;
}

fn input_serialization(doc: &mut Document, compression: CompressionType) -> NodeId {
    let node = doc.new_element("InputSerialization");
    let child = doc.new_element_with_text("CompressionType", compression.as_str());
    doc.append_child(node, child);
    node
}

/// CSV select input descriptor.
#[derive(Debug, Clone)]
pub struct CsvInputFormat {
    /// Input object compression.
    pub compression: CompressionType,
    /// Header-line handling.
    pub file_header_info: FileHeaderInfo,
    /// Record separator.
    pub record_delimiter: String,
    /// Field separator.
    pub field_delimiter: String,
    /// Quote character.
    pub quote_character: String,
    /// Escape character for quotes inside quoted fields.
    pub quote_escape_character: String,
    /// Prefix marking a row as a comment.
    pub comments: String,
    /// Whether quoted fields may contain the record delimiter.
    pub allow_quoted_record_delimiter: bool,
}

impl Default for CsvInputFormat {
    fn default() -> Self {
        Self {
            compression: CompressionType::None,
            file_header_info: FileHeaderInfo::None,
            record_delimiter: "\\n".to_owned(),
            field_delimiter: ",".to_owned(),
            quote_character: "\"".to_owned(),
            quote_escape_character: "\"".to_owned(),
            comments: "#".to_owned(),
            allow_quoted_record_delimiter: false,
        }
    }
}

impl InputFormat for CsvInputFormat {
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let node = input_serialization(doc, self.compression);
        let csv = doc.new_element("CSV");
        for (name, value) in [
            ("FileHeaderInfo", self.file_header_info.as_str()),
            ("RecordDelimiter", self.record_delimiter.as_str()),
            ("FieldDelimiter", self.field_delimiter.as_str()),
            ("QuoteCharacter", self.quote_character.as_str()),
            ("QuoteEscapeCharacter", self.quote_escape_character.as_str()),
            ("Comments", self.comments.as_str()),
            ("AllowQuotedRecordDelimiter", bool_str(self.allow_quoted_record_delimiter)),
        ] {
            let child = doc.new_element_with_text(name, value);
            doc.append_child(csv, child);
        }
        doc.append_child(node, csv);
        doc.append_child(parent, node);
        node
    }
}

/// JSON select input descriptor.
#[derive(Debug, Clone, Default)]
pub struct JsonInputFormat {
    /// Input object compression.
    pub compression: CompressionType,
    /// JSON record framing.
    pub json_type: JsonType,
}

impl InputFormat for JsonInputFormat {
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let node = input_serialization(doc, self.compression);
        let json = doc.new_element("JSON");
        let child = doc.new_element_with_text("Type", self.json_type.as_str());
        doc.append_child(json, child);
        doc.append_child(node, json);
        doc.append_child(parent, node);
        node
    }
}

/// CSV select output descriptor.
#[derive(Debug, Clone)]
pub struct CsvOutputFormat {
    /// When to quote output fields. Free-form token; the schema default is
    /// `ASNEEDED`.
    pub quote_fields: String,
    /// Record separator.
    pub record_delimiter: String,
    /// Field separator.
    pub field_delimiter: String,
    /// Quote character.
    pub quote_character: String,
    /// Escape character for quotes inside quoted fields.
    pub quote_escape_character: String,
}

impl Default for CsvOutputFormat {
    fn default() -> Self {
        Self {
            quote_fields: "ASNEEDED".to_owned(),
            record_delimiter: "\\n".to_owned(),
            field_delimiter: ",".to_owned(),
            quote_character: "\"".to_owned(),
            quote_escape_character: "\"".to_owned(),
        }
    }
}

impl OutputFormat for CsvOutputFormat {
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let node = doc.new_element("OutputSerialization");
        let csv = doc.new_element("CSV");
        for (name, value) in [
            ("QuoteFields", self.quote_fields.as_str()),
            ("RecordDelimiter", self.record_delimiter.as_str()),
            ("FieldDelimiter", self.field_delimiter.as_str()),
            ("QuoteCharacter", self.quote_character.as_str()),
            ("QuoteEscapeCharacter", self.quote_escape_character.as_str()),
        ] {
            let child = doc.new_element_with_text(name, value);
            doc.append_child(csv, child);
        }
        doc.append_child(node, csv);
        doc.append_child(parent, node);
        node
    }
}

/// JSON select output descriptor.
#[derive(Debug, Clone)]
pub struct JsonOutputFormat {
    /// Record separator.
    pub record_delimiter: String,
}

impl Default for JsonOutputFormat {
    fn default() -> Self {
        Self {
            record_delimiter: "\\n".to_owned(),
        }
    }
}

impl OutputFormat for JsonOutputFormat {
    fn render_into(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let node = doc.new_element("OutputSerialization");
        let json = doc.new_element("JSON");
        let child = doc.new_element_with_text("RecordDelimiter", self.record_delimiter.as_str());
        doc.append_child(json, child);
        doc.append_child(node, json);
        doc.append_child(parent, node);
        node
    }
}
