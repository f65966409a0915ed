//! Error types for scoring and catalog operations.

use crate::core::{DomainName, StudyDesign};

/// Errors surfaced by the scoring core.
///
/// An empty portfolio is not an error (the aggregator returns a zeroed
/// result), and answer keys unknown to a design's catalog are tolerated by
/// the scorer rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NosError {
    /// A design label from outside the process did not match any of the
    /// three recognized study designs.
    #[error("unknown study design: {0}")]
    UnknownDesign(String),

    /// The requested domain does not exist for the given design.
    #[error("{design} have no {domain} domain")]
    UnknownDomain {
        design: StudyDesign,
        domain: DomainName,
    },

    /// A total star count outside the scorer's output domain was passed to
    /// the classifier. This is a caller bug, not a recoverable condition.
    #[error("invalid total star count: {0}")]
    InvalidScore(i64),

    /// Configuration file errors.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type NosResult<T> = Result<T, NosError>;
