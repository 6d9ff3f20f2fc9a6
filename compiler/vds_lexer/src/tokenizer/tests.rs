#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

// === Classification ===

#[test]
fn test_size_suffixed_numbers() {
    assert_eq!(
        kinds("123K 45M 1G 7T"),
        vec![
            TokenKind::NumConst(123 * 1024),
            TokenKind::NumConst(45 * 1024 * 1024),
            TokenKind::NumConst(1024 * 1024 * 1024),
            TokenKind::NumConst(7 * 1024 * 1024 * 1024 * 1024),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_shift_assign_is_one_token() {
    assert_eq!(
        kinds(">>="),
        vec![TokenKind::Operator(Operator::ShrAssign), TokenKind::Eos]
    );
    assert_eq!(
        kinds("a >>= 2"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Operator(Operator::ShrAssign),
            TokenKind::NumConst(2),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(kinds("forever"), vec![TokenKind::Ident("forever"), TokenKind::Eos]);
    assert_eq!(
        kinds("for ever"),
        vec![
            TokenKind::Keyword(Keyword::For),
            TokenKind::Ident("ever"),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_string_without_escapes() {
    assert_eq!(
        kinds(r#"print("a\n b");"#),
        vec![
            TokenKind::Ident("print"),
            TokenKind::Punctuator('('),
            TokenKind::StringConst(r"a\n b"),
            TokenKind::Punctuator(')'),
            TokenKind::Punctuator(';'),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(
        kinds("x = \"open"),
        vec![
            TokenKind::Ident("x"),
            TokenKind::Operator(Operator::Assign),
            TokenKind::StringConst("open"),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a /* b * / c */ d /* tail"),
        vec![TokenKind::Ident("a"), TokenKind::Ident("d"), TokenKind::Eos]
    );
}

#[test]
fn test_no_line_comments() {
    assert_eq!(
        kinds("// x"),
        vec![
            TokenKind::Operator(Operator::Slash),
            TokenKind::Operator(Operator::Slash),
            TokenKind::Ident("x"),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_punctuators_and_invalid() {
    assert_eq!(
        kinds("{ ( ) } , ; : @ é"),
        vec![
            TokenKind::Punctuator('{'),
            TokenKind::Punctuator('('),
            TokenKind::Punctuator(')'),
            TokenKind::Punctuator('}'),
            TokenKind::Punctuator(','),
            TokenKind::Punctuator(';'),
            TokenKind::Punctuator(':'),
            TokenKind::Invalid('@'),
            TokenKind::Invalid('é'),
            TokenKind::Eos,
        ]
    );
}

#[test]
fn test_operator_sequence() {
    assert_eq!(
        kinds("a->b.c++ != --d"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Operator(Operator::Arrow),
            TokenKind::Ident("b"),
            TokenKind::Operator(Operator::Dot),
            TokenKind::Ident("c"),
            TokenKind::Operator(Operator::PlusPlus),
            TokenKind::Operator(Operator::NotEq),
            TokenKind::Operator(Operator::MinusMinus),
            TokenKind::Ident("d"),
            TokenKind::Eos,
        ]
    );
}

// === Positions ===

#[test]
fn test_positions_are_one_based() {
    let tokens = tokenize("void main()\n{\r\n  sleep(10);\n}");
    let pos: Vec<_> = tokens.iter().map(|t| (t.pos.line, t.pos.start_col, t.pos.end_col)).collect();
    assert_eq!(
        pos,
        vec![
            (1, 1, 4),   // void
            (1, 6, 9),   // main
            (1, 10, 10), // (
            (1, 11, 11), // )
            (2, 1, 1),   // {
            (3, 3, 7),   // sleep
            (3, 8, 8),   // (
            (3, 9, 10),  // 10
            (3, 11, 11), // )
            (3, 12, 12), // ;
            (4, 1, 1),   // }
            (4, 2, 2),   // eos
        ]
    );
}

#[test]
fn test_comment_newlines_advance_lines() {
    let tokens = tokenize("/* one\ntwo\n*/ x");
    assert_eq!(tokens[0].pos, SourcePos::new(3, 4, 4));
}

// === Lookahead contract ===

#[test]
fn test_current_and_next() {
    let mut tokenizer = Tokenizer::new("uint8_t a, b");
    assert_eq!(tokenizer.current_token().kind, TokenKind::Ident("uint8_t"));
    assert_eq!(tokenizer.peek_next_class(), TokenClass::Identifier);
    tokenizer.consume();
    assert_eq!(tokenizer.peek_next_class(), TokenClass::Punctuator);
    tokenizer.consume();
    assert!(tokenizer.skip_if_punctuator(','));
    assert!(!tokenizer.skip_if_punctuator(','));
    assert_eq!(tokenizer.current_token().kind, TokenKind::Ident("b"));
    assert_eq!(tokenizer.peek_next_class(), TokenClass::Eos);
}

#[test]
fn test_consume_at_end_stays_at_end() {
    let mut tokenizer = Tokenizer::new("");
    assert!(tokenizer.is_eos());
    tokenizer.consume();
    tokenizer.consume();
    assert!(tokenizer.is_eos());
    assert_eq!(tokenizer.peek_next_class(), TokenClass::Eos);
}

#[test]
fn test_skip_if_keyword_and_operator() {
    let mut tokenizer = Tokenizer::new("return += x");
    assert!(!tokenizer.skip_if_keyword(Keyword::Break));
    assert!(tokenizer.skip_if_keyword(Keyword::Return));
    assert!(!tokenizer.skip_if_operator(Operator::Plus));
    assert!(tokenizer.skip_if_operator(Operator::AddAssign));
    assert!(tokenizer.current_token().kind == TokenKind::Ident("x"));
}

// === Properties ===

proptest! {
    #[test]
    fn prop_identifiers_scan_whole(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let tokens = tokenize(&name);
        prop_assert_eq!(tokens.len(), 2);
        match tokens[0].kind {
            TokenKind::Ident(text) => prop_assert_eq!(text, name.as_str()),
            TokenKind::Keyword(kw) => prop_assert_eq!(kw.as_str(), name.as_str()),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn prop_decimal_with_suffix(value in 1u64..1_000_000, suffix in 0usize..5) {
        let (text, multiplier) = match suffix {
            0 => (String::new(), 1),
            1 => ("K".to_owned(), 1 << 10),
            2 => ("M".to_owned(), 1 << 20),
            3 => ("G".to_owned(), 1 << 30),
            _ => ("T".to_owned(), 1u64 << 40),
        };
        let source = format!("{value}{text}");
        prop_assert_eq!(
            kinds(&source),
            vec![TokenKind::NumConst(value.wrapping_mul(multiplier)), TokenKind::Eos]
        );
    }

    #[test]
    fn prop_tokenizer_always_terminates(source in "\\PC{0,64}") {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eos));
    }
}
