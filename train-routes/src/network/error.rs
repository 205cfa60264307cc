//! Route graph construction errors.

/// Errors raised while turning raw route rows into a graph.
///
/// Row numbers are 1-based positions in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Row does not have exactly three fields
    #[error("row {row}: expected 3 fields (start, end, time), found {found}")]
    FieldCount { row: usize, found: usize },

    /// Travel time is not a non-negative integer
    #[error("row {row}: invalid travel time {value:?}, expected whole minutes")]
    InvalidTime { row: usize, value: String },
}
