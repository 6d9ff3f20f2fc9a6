//! Error codes for all VDScript diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E1xxx: Parser errors
//! - E6xxx: Runtime / interpreter errors
//! - E7xxx: Script context (registration and invocation) errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,
    /// Declarations inside a block are not supported
    E1004,
    /// Invalid character in source
    E1005,

    // Runtime Errors (E6xxx)
    /// Host callback reported failure
    E6001,
    /// Call depth limit exceeded
    E6002,
    /// Interpreter stack allocation failed
    E6003,

    // Context Errors (E7xxx)
    /// Function name already registered
    E7001,
    /// Invalid parameter (argument count mismatch, empty registration)
    E7002,
    /// Function not found
    E7003,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
        }
    }

    /// One-line explanation of the code.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected identifier",
            ErrorCode::E1004 => "declarations are not supported",
            ErrorCode::E1005 => "invalid character in source",
            ErrorCode::E6001 => "host callback failed",
            ErrorCode::E6002 => "call depth limit exceeded",
            ErrorCode::E6003 => "interpreter out of memory",
            ErrorCode::E7001 => "duplicate function name",
            ErrorCode::E7002 => "invalid parameter",
            ErrorCode::E7003 => "function not found",
        }
    }

    pub const fn is_parser_error(self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004 | ErrorCode::E1005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
