//! Error types for path parsing.

use thiserror::Error;

/// What is wrong with a single `.`-delimited part of a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartDefect {
    /// Different number of `[` and `]`.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,
    /// Text after the last `]`.
    #[error("part must end with ']'")]
    TrailingText,
    /// A `]` that comes before its `[`, or text between two groups.
    #[error("misplaced brackets")]
    MisplacedBrackets,
    /// Bracket content that is not a non-negative integer.
    #[error("invalid index '{0}'")]
    InvalidIndex(String),
}

/// Errors that can occur while parsing a path expression.
///
/// Messages quote the path exactly as it was given, and the offending part
/// after trimming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[error("path can't be empty")]
    Empty,
    /// Two consecutive dots, or a leading/trailing dot.
    #[error("invalid path. path \"{path}\"")]
    EmptyPart { path: String },
    /// A part with malformed brackets or index.
    #[error("invalid path. path \"{path}\". invalid part \"{part}\": {defect}")]
    InvalidPart {
        path: String,
        part: String,
        defect: PartDefect,
    },
}
