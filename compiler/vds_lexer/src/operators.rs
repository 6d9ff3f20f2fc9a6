//! Operator and punctuator tables.
//!
//! Operators are matched longest first: every three-character entry
//! precedes every two-character entry, which precede the single-character
//! ones. `>>=` therefore never splits into `>>` and `=`.

use vds_ir::Operator;

const OPERATORS: &[(&[u8], Operator)] = &[
    (b">>=", Operator::ShrAssign),
    (b"<<=", Operator::ShlAssign),
    (b"+=", Operator::AddAssign),
    (b"-=", Operator::SubAssign),
    (b"*=", Operator::MulAssign),
    (b"/=", Operator::DivAssign),
    (b"%=", Operator::ModAssign),
    (b"&=", Operator::AndAssign),
    (b"|=", Operator::OrAssign),
    (b"^=", Operator::XorAssign),
    (b"&&", Operator::AndAnd),
    (b"||", Operator::OrOr),
    (b"<<", Operator::Shl),
    (b">>", Operator::Shr),
    (b"++", Operator::PlusPlus),
    (b"--", Operator::MinusMinus),
    (b"==", Operator::EqEq),
    (b"!=", Operator::NotEq),
    (b">=", Operator::GtEq),
    (b"<=", Operator::LtEq),
    (b"->", Operator::Arrow),
    (b"=", Operator::Assign),
    (b"+", Operator::Plus),
    (b"-", Operator::Minus),
    (b"*", Operator::Star),
    (b"/", Operator::Slash),
    (b"%", Operator::Percent),
    (b"|", Operator::Pipe),
    (b"&", Operator::Amp),
    (b"^", Operator::Caret),
    (b"<", Operator::Lt),
    (b">", Operator::Gt),
    (b"!", Operator::Bang),
    (b"~", Operator::Tilde),
    (b".", Operator::Dot),
];

/// Punctuator characters.
pub(crate) const PUNCTUATORS: &[u8] = b"(){},;:";

/// Longest operator at the start of `rest`, with its length in bytes.
pub(crate) fn match_operator(rest: &[u8]) -> Option<(Operator, usize)> {
    OPERATORS
        .iter()
        .find(|(text, _)| rest.starts_with(text))
        .map(|&(text, op)| (op, text.len()))
}
