//! Runtime values.

use std::fmt;
use std::sync::Arc;

use vds_ir::PrimitiveType;

/// A value on the interpreter's value stack.
///
/// One variant per [`PrimitiveType`]. Numeric literals in scripts always
/// evaluate to [`Value::U64`]; the narrower variants exist for hosts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Void,
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    String(Arc<str>),
    Bool(bool),
    Pointer(usize),
}

impl Value {
    pub fn string(text: &str) -> Self {
        Value::String(Arc::from(text))
    }

    pub fn type_of(&self) -> PrimitiveType {
        match self {
            Value::Void => PrimitiveType::Void,
            Value::U8(_) => PrimitiveType::U8,
            Value::I8(_) => PrimitiveType::I8,
            Value::U16(_) => PrimitiveType::U16,
            Value::I16(_) => PrimitiveType::I16,
            Value::U32(_) => PrimitiveType::U32,
            Value::I32(_) => PrimitiveType::I32,
            Value::U64(_) => PrimitiveType::U64,
            Value::I64(_) => PrimitiveType::I64,
            Value::String(_) => PrimitiveType::String,
            Value::Bool(_) => PrimitiveType::Bool,
            Value::Pointer(_) => PrimitiveType::Pointer,
        }
    }

    /// Truth value of a condition.
    ///
    /// Booleans are taken as is, integers and pointers are true when
    /// non-zero. `void` and strings have no truth value.
    pub fn is_truthy(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            Value::U8(v) => Some(v != 0),
            Value::I8(v) => Some(v != 0),
            Value::U16(v) => Some(v != 0),
            Value::I16(v) => Some(v != 0),
            Value::U32(v) => Some(v != 0),
            Value::I32(v) => Some(v != 0),
            Value::U64(v) => Some(v != 0),
            Value::I64(v) => Some(v != 0),
            Value::Pointer(p) => Some(p != 0),
            Value::Void | Value::String(_) => None,
        }
    }

    /// Unsigned integer view of an integer value; negative values and
    /// non-integers yield `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::U8(v) => Some(u64::from(v)),
            Value::U16(v) => Some(u64::from(v)),
            Value::U32(v) => Some(u64::from(v)),
            Value::U64(v) => Some(v),
            Value::I8(v) => u64::try_from(v).ok(),
            Value::I16(v) => u64::try_from(v).ok(),
            Value::I32(v) => u64::try_from(v).ok(),
            Value::I64(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Pointer(p) => write!(f, "{p:#x}"),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
