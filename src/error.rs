use thiserror::Error;

/// Failures while registering or looking up a rendering style
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("a list style needs at least one bullet or ordinal template")]
    EmptyTemplates,

    #[error("unknown style '{name}' (expected one of: {expected})")]
    UnknownName { name: String, expected: String },
}

/// Failures while reading a tree from an input document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: indented less than the first entry of the outline")]
    OutlineUnderflow { line: usize },

    #[error("invalid JSON tree document: {0}")]
    Json(#[from] serde_json::Error),
}
