//! Recoverable interpreter errors.
//!
//! Everything else that can go wrong while interpreting (evaluating an
//! operator, reading an undefined variable, a `break` outside of a loop)
//! is a panic.

use vds_ir::ErrorCode;

use crate::CallbackError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("function `{name}` is not defined")]
    NotFound { name: Box<str> },

    #[error("`{name}` takes {expected} argument(s) but {found} were given")]
    ArityMismatch {
        name: Box<str>,
        expected: usize,
        found: usize,
    },

    #[error("call to `{name}` failed: {source}")]
    CallbackFailed {
        name: Box<str>,
        #[source]
        source: CallbackError,
    },

    #[error("call depth exceeded the limit of {limit}")]
    CallDepthExceeded { limit: usize },

    #[error("out of memory growing the {what}")]
    OutOfMemory { what: &'static str },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::NotFound { .. } => ErrorCode::E7003,
            EvalError::ArityMismatch { .. } => ErrorCode::E7002,
            EvalError::CallbackFailed { .. } => ErrorCode::E6001,
            EvalError::CallDepthExceeded { .. } => ErrorCode::E6002,
            EvalError::OutOfMemory { .. } => ErrorCode::E6003,
        }
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
