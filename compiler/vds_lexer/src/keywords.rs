//! Keyword resolution.
//!
//! Identifiers are matched against the reserved words by exact text, so an
//! identifier that merely starts with a keyword (`forever`, `iffy`) stays
//! an identifier. The identifier's length picks the bucket to compare in.

use vds_ir::Keyword;

/// Look up a reserved keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    match text.len() {
        2 => match text {
            "do" => Some(Keyword::Do),
            "if" => Some(Keyword::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(Keyword::For),
            _ => None,
        },
        4 => match text {
            "auto" => Some(Keyword::Auto),
            "case" => Some(Keyword::Case),
            "else" => Some(Keyword::Else),
            "true" => Some(Keyword::True),
            _ => None,
        },
        5 => match text {
            "break" => Some(Keyword::Break),
            "const" => Some(Keyword::Const),
            "false" => Some(Keyword::False),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "extern" => Some(Keyword::Extern),
            "return" => Some(Keyword::Return),
            "static" => Some(Keyword::Static),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "typedef" => Some(Keyword::Typedef),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            "register" => Some(Keyword::Register),
            "restrict" => Some(Keyword::Restrict),
            "volatile" => Some(Keyword::Volatile),
            _ => None,
        },
        _ => None,
    }
}
