//! Minimal XML document assembly.

mod dom;

pub use self::dom::{Document, NodeId};
