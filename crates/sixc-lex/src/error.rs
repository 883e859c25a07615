use sixc_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar { ch: char, span: Span },

    #[error("integer literal '{text}' at {span} is out of range 0..=255")]
    IntLiteralOutOfRange { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } => *span,
            LexError::IntLiteralOutOfRange { span, .. } => *span,
        }
    }
}

pub type Result<T> = std::result::Result<T, LexError>;
