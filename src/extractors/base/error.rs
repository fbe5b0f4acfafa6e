// Extraction error taxonomy
//
// None of these escape the public API: the manager turns every one of them
// into a diagnostic and falls through to the next parse tier.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to load tree-sitter language: {0}")]
    Language(String),

    #[error("parsing error at line {line}, column {column}")]
    TreeBuild { line: u32, column: u32 },

    #[error("parser produced no tree")]
    NoTree,

    #[error("could not extract a class definition to re-parse")]
    RecoveryPatternNotFound,

    #[error("failed to parse extracted class {class_name} (line {line}, column {column})")]
    Recovery {
        class_name: String,
        line: u32,
        column: u32,
    },

    #[error("member declaration at line {line} has no resolvable name")]
    MissingMemberName { line: u32 },
}

pub type ExtractResult<T> = Result<T, ExtractError>;
