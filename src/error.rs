use thiserror::Error;

/// Returned when a string does not name one of the three traversal orders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTraversalError {
    /// The input matched none of the accepted spellings.
    #[error("unknown traversal order {0:?} (expected in-order, pre-order or post-order)")]
    Unknown(String),
}
