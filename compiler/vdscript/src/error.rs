//! Errors of the script context API.

use vds_eval::EvalError;
use vds_ir::ErrorCode;
use vds_parse::ParseError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("function `{name}` is already defined")]
    Duplicate { name: Box<str> },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("function `{name}` is not defined")]
    NotFound { name: Box<str> },
}

impl ScriptError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScriptError::Parse(err) => err.code,
            ScriptError::Eval(err) => err.code(),
            ScriptError::Duplicate { .. } => ErrorCode::E7001,
            ScriptError::InvalidParameter(_) => ErrorCode::E7002,
            ScriptError::NotFound { .. } => ErrorCode::E7003,
        }
    }
}
