use sixc_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemError {
    #[error("undeclared variable '{name}' at {span}")]
    UndeclaredName { name: String, span: Span },

    #[error("variable '{name}' redeclared at {span}")]
    Redeclaration { name: String, span: Span },

    #[error("too many variables: at most 234 zero-page slots are available (at {span})")]
    OutOfSlots { span: Span },
}

impl SemError {
    pub fn span(&self) -> Span {
        match self {
            SemError::UndeclaredName { span, .. } => *span,
            SemError::Redeclaration { span, .. } => *span,
            SemError::OutOfSlots { span } => *span,
        }
    }
}

pub type Result<T> = std::result::Result<T, SemError>;
