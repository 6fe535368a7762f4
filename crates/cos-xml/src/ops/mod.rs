//! Request body builders, one module per operation family.

mod acl;
mod delete;
mod multipart;
mod restore;
mod select;

pub use self::acl::{Grant, Grantee, Owner, PutObjectAcl};
pub use self::delete::DeleteObjects;
pub use self::multipart::CompleteMultipartUpload;
pub use self::restore::RestoreObject;
pub use self::select::SelectObjectContent;

use crate::error::BodyError;

/// A request description that serializes itself into an XML request body.
///
/// Each call builds and renders a fresh document, so request values may be
/// rendered concurrently without locking. Validation faults are reported
/// before any document work; on error no partial output exists.
pub trait RequestBody {
    /// Renders the XML request body for this request.
    ///
    /// # Errors
    ///
    /// Returns a [`BodyError`] when the request state fails validation.
    /// Fatal precondition violations (see the request types) panic instead.
    fn request_body(&self) -> Result<String, BodyError>;
}
