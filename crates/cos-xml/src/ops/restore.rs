//! Archive restore body.

use crate::error::BodyError;
use crate::ops::RequestBody;
use crate::xml::Document;

use tracing::trace;

/// `RestoreObject` request body (`RestoreRequest`).
#[derive(Debug, Clone, Default)]
pub struct RestoreObject {
    /// Days the restored copy stays available.
    pub days: u64,
    /// Restore tier name, passed through as-is (e.g. `Standard`,
    /// `Expedited`, `Bulk`). The service validates the value.
    pub tier: String,
}

impl RequestBody for RestoreObject {
    fn request_body(&self) -> Result<String, BodyError> {
        let mut doc = Document::new();
        let root = doc.new_element("RestoreRequest");
        doc.append_root(root);

        let mut buf = itoa::Buffer::new();
        let days = doc.new_element_with_text("Days", buf.format(self.days));
        doc.append_child(root, days);

        let parameters = doc.new_element("CASJobParameters");
        let tier = doc.new_element_with_text("Tier", self.tier.as_str());
        doc.append_child(parameters, tier);
        doc.append_child(root, parameters);

        let body = doc.serialize();
        trace!(op = "RestoreObject", len = body.len(), "rendered request body");
        Ok(body)
    }
}
