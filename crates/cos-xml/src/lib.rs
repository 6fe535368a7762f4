//! XML request bodies for COS-compatible object storage clients.
//!
//! `cos-xml` converts strongly-typed request descriptions into the XML
//! documents an object storage service expects as request bodies:
//! multipart-upload completion, batch object deletion, archive restore,
//! object ACL replacement, and SQL-over-object select queries. The crate is
//! a pure serialization core: it performs no network I/O, builds no headers,
//! signs nothing, and never parses a server response. A transport layer
//! feeds the rendered text to the service.
//!
//! # Rendering model
//!
//! Every request type implements [`RequestBody`]. A call to
//! [`request_body`](RequestBody::request_body) builds one fresh XML
//! document, renders it, and drops it; nothing is shared across calls, so
//! request values may be rendered from multiple threads without locking.
//!
//! Select queries delegate part of the document to caller-owned format
//! descriptors ([`dto::InputFormat`], [`dto::OutputFormat`]), which append
//! their own subtrees without the request builder knowing their concrete
//! shape.
//!
//! # Example
//!
//! ```
//! use cos_xml::ops::{CompleteMultipartUpload, RequestBody};
//!
//! let req = CompleteMultipartUpload {
//!     part_numbers: vec![1, 2],
//!     etags: vec!["\"9a0364b9e99bb480dd25e1f0284c8555\"".to_owned(), "\"fe01ce2a7fbac8fafaed7c982a04e229\"".to_owned()],
//! };
//! let body = req.request_body()?;
//! assert!(body.starts_with("<CompleteMultipartUpload>"));
//! # Ok::<(), cos_xml::BodyError>(())
//! ```
//!
//! A select query borrows its format descriptors:
//!
//! ```
//! use cos_xml::dto::{CsvInputFormat, ExpressionType, JsonOutputFormat};
//! use cos_xml::ops::{RequestBody, SelectObjectContent};
//!
//! let input = CsvInputFormat::default();
//! let output = JsonOutputFormat::default();
//! let req = SelectObjectContent {
//!     expression: "Select * from COSObject".to_owned(),
//!     expression_type: ExpressionType::Sql,
//!     input_format: Some(&input),
//!     output_format: Some(&output),
//!     request_progress: false,
//! };
//! let body = req.request_body()?;
//! assert!(body.contains("<ExpressionType>SQL</ExpressionType>"));
//! # Ok::<(), cos_xml::BodyError>(())
//! ```

mod error;

pub mod dto;
pub mod ops;
pub mod xml;

pub use self::error::BodyError;
pub use self::ops::RequestBody;
