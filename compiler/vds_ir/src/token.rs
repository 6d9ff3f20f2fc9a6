//! Token types produced by the tokenizer.
//!
//! Payloads borrow from the source buffer, so a token is only valid while
//! the text it was scanned from is alive.

use crate::SourcePos;
use std::fmt;

/// Coarse token classification.
///
/// The parser's lookahead only ever needs the class of the next token, so
/// this is what `peek_next_class` returns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenClass {
    Identifier,
    NumConst,
    StringConst,
    Operator,
    Keyword,
    Punctuator,
    /// A character that starts no token.
    Invalid,
    Eos,
}

/// A token with its position in the source.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub pos: SourcePos,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind<'src>, pos: SourcePos) -> Self {
        Token { kind, pos }
    }

    #[inline]
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Token payload, one variant per [`TokenClass`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind<'src> {
    Ident(&'src str),
    /// Numeric constant with any size suffix already applied.
    NumConst(u64),
    /// String contents without the surrounding quotes.
    StringConst(&'src str),
    Operator(Operator),
    Keyword(Keyword),
    Punctuator(char),
    Invalid(char),
    Eos,
}

impl TokenKind<'_> {
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Ident(_) => TokenClass::Identifier,
            TokenKind::NumConst(_) => TokenClass::NumConst,
            TokenKind::StringConst(_) => TokenClass::StringConst,
            TokenKind::Operator(_) => TokenClass::Operator,
            TokenKind::Keyword(_) => TokenClass::Keyword,
            TokenKind::Punctuator(_) => TokenClass::Punctuator,
            TokenKind::Invalid(_) => TokenClass::Invalid,
            TokenKind::Eos => TokenClass::Eos,
        }
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::NumConst(value) => write!(f, "number `{value}`"),
            TokenKind::StringConst(text) => write!(f, "string \"{text}\""),
            TokenKind::Operator(op) => write!(f, "`{}`", op.as_str()),
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            TokenKind::Punctuator(c) => write!(f, "`{c}`"),
            TokenKind::Invalid(c) => write!(f, "invalid character {c:?}"),
            TokenKind::Eos => write!(f, "end of input"),
        }
    }
}

/// Reserved words.
///
/// Most of them are reserved for C compatibility and rejected by the
/// parser wherever they appear; only the statement keywords and the
/// boolean literals have a meaning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Auto,
    Break,
    Case,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Extern,
    False,
    For,
    If,
    Register,
    Restrict,
    Return,
    Static,
    Struct,
    Switch,
    True,
    Typedef,
    Volatile,
    While,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Auto => "auto",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Extern => "extern",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::If => "if",
            Keyword::Register => "register",
            Keyword::Restrict => "restrict",
            Keyword::Return => "return",
            Keyword::Static => "static",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::True => "true",
            Keyword::Typedef => "typedef",
            Keyword::Volatile => "volatile",
            Keyword::While => "while",
        }
    }
}

/// Operator tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    /// `>>=`
    ShrAssign,
    /// `<<=`
    ShlAssign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// `->`
    Arrow,
    /// `=`
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pipe,
    Amp,
    Caret,
    Lt,
    Gt,
    Bang,
    Tilde,
    Dot,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::ShrAssign => ">>=",
            Operator::ShlAssign => "<<=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::AndAssign => "&=",
            Operator::OrAssign => "|=",
            Operator::XorAssign => "^=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
            Operator::Arrow => "->",
            Operator::Assign => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Pipe => "|",
            Operator::Amp => "&",
            Operator::Caret => "^",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Bang => "!",
            Operator::Tilde => "~",
            Operator::Dot => ".",
        }
    }
}

#[cfg(test)]
mod tests;
