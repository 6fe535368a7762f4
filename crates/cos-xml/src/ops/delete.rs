//! Batch object deletion body.

use crate::dto::ObjectIdentifier;
use crate::error::BodyError;
use crate::ops::RequestBody;
use crate::xml::Document;

use tracing::trace;

/// `DeleteObjects` request body.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjects {
    /// Suppresses per-object success entries in the response.
    pub quiet: bool,
    /// Objects to delete, emitted in order.
    pub objects: Vec<ObjectIdentifier>,
}

impl RequestBody for DeleteObjects {
    fn request_body(&self) -> Result<String, BodyError> {
        let mut doc = Document::new();
        let root = doc.new_element("Delete");
        doc.append_root(root);

        // `Quiet` is lowercase on the wire, unlike the select-family booleans.
        let quiet = doc.new_element_with_text("Quiet", if self.quiet { "true" } else { "false" });
        doc.append_child(root, quiet);

        for object in &self.objects {
            let node = doc.new_element("Object");
            let key = doc.new_element_with_text("Key", object.key.as_str());
            doc.append_child(node, key);
            if let Some(version_id) = object.version_id.as_deref().filter(|v| !v.is_empty()) {
                let version = doc.new_element_with_text("VersionId", version_id);
                doc.append_child(node, version);
            }
            doc.append_child(root, node);
        }

        let body = doc.serialize();
        trace!(op = "DeleteObjects", len = body.len(), "rendered request body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_id_only_when_present() {
        let req = DeleteObjects {
            quiet: true,
            objects: vec![
                ObjectIdentifier {
                    key: "a.txt".to_owned(),
                    version_id: None,
                },
                ObjectIdentifier {
                    key: "b.txt".to_owned(),
                    version_id: Some("v1".to_owned()),
                },
            ],
        };
        assert_eq!(
            req.request_body().unwrap(),
            "<Delete><Quiet>true</Quiet>\
             <Object><Key>a.txt</Key></Object>\
             <Object><Key>b.txt</Key><VersionId>v1</VersionId></Object>\
             </Delete>"
        );
    }

    #[test]
    fn empty_version_id_is_omitted() {
        let req = DeleteObjects {
            quiet: false,
            objects: vec![ObjectIdentifier {
                key: "a.txt".to_owned(),
                version_id: Some(String::new()),
            }],
        };
        assert_eq!(
            req.request_body().unwrap(),
            "<Delete><Quiet>false</Quiet><Object><Key>a.txt</Key></Object></Delete>"
        );
    }
}
