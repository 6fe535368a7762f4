//! Multipart-upload completion body.

use crate::dto::strip_quote_wrapping;
use crate::error::BodyError;
use crate::ops::RequestBody;
use crate::xml::Document;

use tracing::trace;

/// `CompleteMultipartUpload` request body.
///
/// Part numbers and ETags are parallel sequences paired by index. Parts are
/// emitted in the order supplied, not re-sorted; the service rejects
/// out-of-order completions on its own terms.
#[derive(Debug, Clone, Default)]
pub struct CompleteMultipartUpload {
    /// Part numbers, parallel to `etags`.
    pub part_numbers: Vec<u64>,
    /// Part ETags as returned by the service, possibly quoted.
    pub etags: Vec<String>,
}

impl RequestBody for CompleteMultipartUpload {
    fn request_body(&self) -> Result<String, BodyError> {
        if self.part_numbers.len() != self.etags.len() {
            return Err(BodyError::PartCountMismatch {
                part_numbers: self.part_numbers.len(),
                etags: self.etags.len(),
            });
        }

        let mut doc = Document::new();
        let root = doc.new_element("CompleteMultipartUpload");
        doc.append_root(root);

        let mut buf = itoa::Buffer::new();
        for (&part_number, etag) in self.part_numbers.iter().zip(&self.etags) {
            let part = doc.new_element("Part");
            let number = doc.new_element_with_text("PartNumber", buf.format(part_number));
            doc.append_child(part, number);
            let etag = doc.new_element_with_text("ETag", strip_quote_wrapping(etag));
            doc.append_child(part, etag);
            doc.append_child(root, part);
        }

        let body = doc.serialize();
        trace!(op = "CompleteMultipartUpload", len = body.len(), "rendered request body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_in_caller_order_with_stripped_etags() {
        let req = CompleteMultipartUpload {
            part_numbers: vec![2, 1],
            etags: vec!["\"etag-two\"".to_owned(), "etag-one".to_owned()],
        };
        assert_eq!(
            req.request_body().unwrap(),
            "<CompleteMultipartUpload>\
             <Part><PartNumber>2</PartNumber><ETag>etag-two</ETag></Part>\
             <Part><PartNumber>1</PartNumber><ETag>etag-one</ETag></Part>\
             </CompleteMultipartUpload>"
        );
    }

    #[test]
    fn no_parts_renders_bare_root() {
        let req = CompleteMultipartUpload::default();
        assert_eq!(req.request_body().unwrap(), "<CompleteMultipartUpload/>");
    }

    #[test]
    fn length_mismatch_is_a_validation_error() {
        let req = CompleteMultipartUpload {
            part_numbers: vec![1, 2, 3],
            etags: vec!["a".to_owned()],
        };
        let err = req.request_body().unwrap_err();
        assert!(matches!(
            err,
            BodyError::PartCountMismatch { part_numbers: 3, etags: 1 }
        ));
    }
}
