use thiserror::Error;

/// Code generation is total over a well-formed [`sixc_sem::Program`]; the
/// only failure mode is a bound-checker bug surfacing further down the
/// pipeline than it should have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    #[error("internal code generator error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CodeGenError>;
