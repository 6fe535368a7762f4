//! Object ACL replacement body.

use crate::error::BodyError;
use crate::ops::RequestBody;
use crate::xml::{Document, NodeId};

use tracing::trace;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Bucket or object owner identity.
#[derive(Debug, Clone, Default)]
pub struct Owner {
    /// Canonical owner id.
    pub id: String,
    /// Display name; omitted from the body when absent.
    pub display_name: Option<String>,
}

/// Party a permission is granted to.
#[derive(Debug, Clone)]
pub enum Grantee {
    /// A single account, addressed by canonical id.
    Canonical {
        /// Canonical account id.
        id: String,
        /// Display name; omitted from the body when absent.
        display_name: Option<String>,
    },
    /// A predefined group, addressed by URI.
    Group {
        /// Group URI.
        uri: String,
    },
}

/// One ACL entry.
#[derive(Debug, Clone)]
pub struct Grant {
    /// Who the permission is granted to.
    pub grantee: Grantee,
    /// Permission token, passed through as-is (e.g. `READ`, `WRITE`,
    /// `FULL_CONTROL`).
    pub permission: String,
}

/// `PutObjectAcl` request body (`AccessControlPolicy`).
#[derive(Debug, Clone, Default)]
pub struct PutObjectAcl {
    /// Object owner.
    pub owner: Owner,
    /// Grants, emitted in order.
    pub grants: Vec<Grant>,
}

impl RequestBody for PutObjectAcl {
    fn request_body(&self) -> Result<String, BodyError> {
        let mut doc = Document::new();
        let root = doc.new_element("AccessControlPolicy");
        doc.append_root(root);

        let owner = doc.new_element("Owner");
        let id = doc.new_element_with_text("ID", self.owner.id.as_str());
        doc.append_child(owner, id);
        if let Some(display_name) = &self.owner.display_name {
            let name = doc.new_element_with_text("DisplayName", display_name.as_str());
            doc.append_child(owner, name);
        }
        doc.append_child(root, owner);

        let list = doc.new_element("AccessControlList");
        for grant in &self.grants {
            let node = doc.new_element("Grant");
            let grantee = render_grantee(&mut doc, &grant.grantee);
            doc.append_child(node, grantee);
            let permission = doc.new_element_with_text("Permission", grant.permission.as_str());
            doc.append_child(node, permission);
            doc.append_child(list, node);
        }
        doc.append_child(root, list);

        let body = doc.serialize();
        trace!(op = "PutObjectAcl", len = body.len(), "rendered request body");
        Ok(body)
    }
}

fn render_grantee(doc: &mut Document, grantee: &Grantee) -> NodeId {
    let node = doc.new_element("Grantee");
    doc.append_attribute(node, "xmlns:xsi", XSI_NAMESPACE);
    match grantee {
        Grantee::Canonical { id, display_name } => {
            doc.append_attribute(node, "xsi:type", "CanonicalUser");
            let id = doc.new_element_with_text("ID", id.as_str());
            doc.append_child(node, id);
            if let Some(display_name) = display_name {
                let name = doc.new_element_with_text("DisplayName", display_name.as_str());
                doc.append_child(node, name);
            }
        }
        Grantee::Group { uri } => {
            doc.append_attribute(node, "xsi:type", "Group");
            let uri = doc.new_element_with_text("URI", uri.as_str());
            doc.append_child(node, uri);
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_and_group_grants() {
        let req = PutObjectAcl {
            owner: Owner {
                id: "owner-1".to_owned(),
                display_name: None,
            },
            grants: vec![
                Grant {
                    grantee: Grantee::Canonical {
                        id: "user-1".to_owned(),
                        display_name: Some("alice".to_owned()),
                    },
                    permission: "FULL_CONTROL".to_owned(),
                },
                Grant {
                    grantee: Grantee::Group {
                        uri: "http://cam.qcloud.com/groups/global/AllUsers".to_owned(),
                    },
                    permission: "READ".to_owned(),
                },
            ],
        };
        assert_eq!(
            req.request_body().unwrap(),
            "<AccessControlPolicy>\
             <Owner><ID>owner-1</ID></Owner>\
             <AccessControlList>\
             <Grant>\
             <Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:type=\"CanonicalUser\">\
             <ID>user-1</ID><DisplayName>alice</DisplayName>\
             </Grantee>\
             <Permission>FULL_CONTROL</Permission>\
             </Grant>\
             <Grant>\
             <Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:type=\"Group\">\
             <URI>http://cam.qcloud.com/groups/global/AllUsers</URI>\
             </Grantee>\
             <Permission>READ</Permission>\
             </Grant>\
             </AccessControlList>\
             </AccessControlPolicy>"
        );
    }

    #[test]
    fn owner_display_name_when_present() {
        let req = PutObjectAcl {
            owner: Owner {
                id: "owner-1".to_owned(),
                display_name: Some("bob".to_owned()),
            },
            grants: Vec::new(),
        };
        let body = req.request_body().unwrap();
        assert!(body.contains("<Owner><ID>owner-1</ID><DisplayName>bob</DisplayName></Owner>"));
        assert!(body.contains("<AccessControlList/>"));
    }
}
