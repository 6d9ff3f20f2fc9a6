use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_class_matches_kind() {
    assert_eq!(TokenKind::Ident("x").class(), TokenClass::Identifier);
    assert_eq!(TokenKind::NumConst(1).class(), TokenClass::NumConst);
    assert_eq!(TokenKind::StringConst("s").class(), TokenClass::StringConst);
    assert_eq!(TokenKind::Operator(Operator::Plus).class(), TokenClass::Operator);
    assert_eq!(TokenKind::Keyword(Keyword::If).class(), TokenClass::Keyword);
    assert_eq!(TokenKind::Punctuator(';').class(), TokenClass::Punctuator);
    assert_eq!(TokenKind::Invalid('@').class(), TokenClass::Invalid);
    assert_eq!(TokenKind::Eos.class(), TokenClass::Eos);
}

#[test]
fn test_display_for_diagnostics() {
    assert_eq!(TokenKind::Ident("main").to_string(), "identifier `main`");
    assert_eq!(TokenKind::Operator(Operator::ShrAssign).to_string(), "`>>=`");
    assert_eq!(TokenKind::Keyword(Keyword::While).to_string(), "keyword `while`");
    assert_eq!(TokenKind::Punctuator('{').to_string(), "`{`");
    assert_eq!(TokenKind::Eos.to_string(), "end of input");
}

#[test]
fn test_compound_assignment_spelling() {
    for (op, text) in [
        (Operator::MulAssign, "*="),
        (Operator::ShlAssign, "<<="),
        (Operator::XorAssign, "^="),
        (Operator::Arrow, "->"),
    ] {
        assert_eq!(op.as_str(), text);
    }
}
