use super::{body, parse_err, parse_fn};
use crate::{parse_all, ErrorContext, Parser};
use pretty_assertions::assert_eq;
use vds_ir::{AstArena, ErrorCode, SourcePos};

#[test]
fn test_function_signature() {
    let (arena, id) = parse_fn("void f(uint8_t a, string b) { }");
    let function = arena.get_function(id);
    assert_eq!(arena.ident_name(function.ret_type), "void");
    assert_eq!(arena.function_name(id), "f");
    assert_eq!(arena.function_arity(id), 2);

    let args: Vec<_> = arena
        .get_args(function.args)
        .iter()
        .map(|a| (arena.ident_name(a.ty), arena.ident_name(a.name)))
        .collect();
    assert_eq!(args, vec![("uint8_t", "a"), ("string", "b")]);
    assert!(body(&arena, id).is_empty());
}

#[test]
fn test_no_arguments() {
    let (arena, id) = parse_fn("void main() { }");
    assert_eq!(arena.function_arity(id), 0);
    assert_eq!(arena.get_function(id).pos, SourcePos::new(1, 1, 4));
}

#[test]
fn test_trailing_comma_in_arguments() {
    let (arena, id) = parse_fn("void f(uint8_t a,) { }");
    assert_eq!(arena.function_arity(id), 1);
}

#[test]
fn test_argument_needs_name() {
    let (arena, err) = parse_err("void f(uint8_t) { }");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.context, Some(ErrorContext::ArgumentList));
    assert!(arena.is_empty());
}

#[test]
fn test_missing_separator_between_arguments() {
    let (_, err) = parse_err("void f(uint8_t a uint8_t b) { }");
    assert_eq!(err.message, "expected `,` or `)`, found identifier `uint8_t`");
}

#[test]
fn test_function_needs_body() {
    let (_, err) = parse_err("void f();");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::Block));
}

#[test]
fn test_keyword_as_name() {
    let (_, err) = parse_err("void while() { }");
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.context, Some(ErrorContext::FunctionDef));
}

#[test]
fn test_parse_all_in_order() {
    let mut arena = AstArena::new();
    let (functions, err) = parse_all("void a() { } void b() { } void c() { }", &mut arena);
    assert_eq!(err, None);
    let names: Vec<_> = functions.iter().map(|&f| arena.function_name(f)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_parse_all_keeps_functions_before_error() {
    let mut arena = AstArena::new();
    let (functions, err) = parse_all("void a() { x; }\nvoid b() { y }", &mut arena);
    assert_eq!(functions.len(), 1);
    assert_eq!(arena.function_count(), 1);
    assert_eq!(arena.function_name(functions[0]), "a");
    let err = err.unwrap();
    assert_eq!(err.pos.line, 2);
}

#[test]
fn test_failed_function_leaves_arena_unchanged() {
    let mut arena = AstArena::new();
    let mut parser = Parser::new("void a() { 1 + 2; } void b() { f(1, 2 + ; }", &mut arena);
    parser.parse_function().unwrap();
    let before = parser.checkpoint();
    assert!(parser.parse_function().is_err());
    assert_eq!(parser.checkpoint(), before);
}

#[test]
fn test_explicit_rollback() {
    let mut arena = AstArena::new();
    let mut parser = Parser::new("void a() { } void a() { x; }", &mut arena);
    parser.parse_function().unwrap();
    let checkpoint = parser.checkpoint();
    parser.parse_function().unwrap();
    parser.rollback(checkpoint);
    assert!(parser.is_at_end());
    assert_eq!(parser.arena().function_count(), 1);
}

#[test]
fn test_empty_source() {
    let mut arena = AstArena::new();
    let (functions, err) = parse_all("  /* nothing */  ", &mut arena);
    assert!(functions.is_empty());
    assert_eq!(err, None);
}
