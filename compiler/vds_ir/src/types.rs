//! Primitive types shared by host registrations and script signatures.

use std::fmt;

/// The primitive type set visible to both host and script.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Void,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    String,
    Bool,
    Pointer,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order.
    pub const ALL: [PrimitiveType; 12] = [
        PrimitiveType::Void,
        PrimitiveType::U8,
        PrimitiveType::I8,
        PrimitiveType::U16,
        PrimitiveType::I16,
        PrimitiveType::U32,
        PrimitiveType::I32,
        PrimitiveType::U64,
        PrimitiveType::I64,
        PrimitiveType::String,
        PrimitiveType::Bool,
        PrimitiveType::Pointer,
    ];

    /// Spelling of the type in script source.
    pub const fn script_name(self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::U8 => "uint8_t",
            PrimitiveType::I8 => "int8_t",
            PrimitiveType::U16 => "uint16_t",
            PrimitiveType::I16 => "int16_t",
            PrimitiveType::U32 => "uint32_t",
            PrimitiveType::I32 => "int32_t",
            PrimitiveType::U64 => "uint64_t",
            PrimitiveType::I64 => "int64_t",
            PrimitiveType::String => "string",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Pointer => "void*",
        }
    }

    /// Look a script type name up; unknown names yield `None`.
    pub fn from_script_name(name: &str) -> Option<PrimitiveType> {
        Self::ALL.into_iter().find(|ty| ty.script_name() == name)
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            PrimitiveType::U8
                | PrimitiveType::I8
                | PrimitiveType::U16
                | PrimitiveType::I16
                | PrimitiveType::U32
                | PrimitiveType::I32
                | PrimitiveType::U64
                | PrimitiveType::I64
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_names_roundtrip() {
        for ty in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_script_name(ty.script_name()), Some(ty));
        }
        assert_eq!(PrimitiveType::from_script_name("disk"), None);
    }

    #[test]
    fn test_integer_classification() {
        assert!(PrimitiveType::I64.is_integer());
        assert!(!PrimitiveType::Bool.is_integer());
        assert!(!PrimitiveType::Pointer.is_integer());
    }
}
