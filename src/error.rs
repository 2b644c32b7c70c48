use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures raised by the computer-algebra backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CasError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("evaluation error: {0}")]
    Evaluation(String),
}

/// Every failure an engine operation can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("malformed input: {0}")]
    Format(String),
    #[error("no rule matches this expression: {0}")]
    UnsupportedPattern(String),
    #[error("undefined operation: {0}")]
    Domain(String),
    #[error("numeric evaluation failed: {0}")]
    Numeric(String),
    #[error("the algebra backend failed: {0}")]
    Delegate(#[from] CasError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Format,
    UnsupportedPattern,
    Domain,
    Numeric,
    Delegate,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Format(_) => ErrorKind::Format,
            EngineError::UnsupportedPattern(_) => ErrorKind::UnsupportedPattern,
            EngineError::Domain(_) => ErrorKind::Domain,
            EngineError::Numeric(_) => ErrorKind::Numeric,
            EngineError::Delegate(_) => ErrorKind::Delegate,
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        EngineError::Format(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        EngineError::UnsupportedPattern(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        EngineError::Domain(msg.into())
    }

    pub(crate) fn numeric(msg: impl Into<String>) -> Self {
        EngineError::Numeric(msg.into())
    }
}
