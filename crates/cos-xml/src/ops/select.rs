//! Select-query body.

use crate::dto::{ExpressionType, InputFormat, OutputFormat, bool_str};
use crate::error::BodyError;
use crate::ops::RequestBody;
use crate::xml::Document;

use tracing::trace;

/// `SelectObjectContent` request body (`SelectRequest`).
///
/// The request borrows its format descriptors; they stay caller-owned and
/// read-only for the request's lifetime, so one descriptor may back many
/// concurrent renders.
///
/// # Panics
///
/// Rendering panics if either format descriptor is unset. A select request
/// without both descriptors is not a request state the service defines, so
/// the builder fails fast instead of emitting a partial document.
#[derive(Clone, Default)]
pub struct SelectObjectContent<'a> {
    /// Expression run against the object content.
    pub expression: String,
    /// Expression dialect.
    pub expression_type: ExpressionType,
    /// Input framing descriptor. Must be set before rendering.
    pub input_format: Option<&'a dyn InputFormat>,
    /// Output framing descriptor. Must be set before rendering.
    pub output_format: Option<&'a dyn OutputFormat>,
    /// Asks the service to stream progress events.
    pub request_progress: bool,
}

impl RequestBody for SelectObjectContent<'_> {
    fn request_body(&self) -> Result<String, BodyError> {
        let input = self.input_format.expect("select request: input format is not set");
        let output = self.output_format.expect("select request: output format is not set");

        let mut doc = Document::new();
        let root = doc.new_element("SelectRequest");
        doc.append_root(root);

        let expression = doc.new_element_with_text("Expression", self.expression.as_str());
        doc.append_child(root, expression);
        let expression_type = doc.new_element_with_text("ExpressionType", self.expression_type.as_str());
        doc.append_child(root, expression_type);

        input.render_into(&mut doc, root);
        output.render_into(&mut doc, root);

        let progress = doc.new_element("RequestProgress");
        let enabled = doc.new_element_with_text("Enabled", bool_str(self.request_progress));
        doc.append_child(progress, enabled);
        doc.append_child(root, progress);

        let body = doc.serialize();
        trace!(op = "SelectObjectContent", len = body.len(), "rendered request body");
        Ok(body)
    }
}
