/// Errors reported by request body builders.
///
/// Only caller-recoverable validation faults surface here. Fatal
/// precondition violations (a select request rendered without its format
/// descriptors, a document node attached twice) panic instead; they are
/// programming errors, not request states.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BodyError {
    /// The part-number and ETag sequences have different lengths.
    #[error("BodyError: PartCountMismatch: {part_numbers} part numbers, {etags} etags")]
    PartCountMismatch {
        /// Number of part numbers supplied.
        part_numbers: usize,
        /// Number of ETags supplied.
        etags: usize,
    },
}
