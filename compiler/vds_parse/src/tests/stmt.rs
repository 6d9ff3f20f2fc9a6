use super::{body, parse_err, parse_fn};
use crate::ErrorContext;
use pretty_assertions::assert_eq;
use vds_ir::{ErrorCode, ExprKind, LoopKind, SourcePos, StmtKind};

fn kinds(source: &str) -> Vec<&'static str> {
    let (arena, id) = parse_fn(source);
    body(&arena, id)
        .into_iter()
        .map(|s| arena.get_stmt(s).kind.describe())
        .collect()
}

#[test]
fn test_every_statement_kind() {
    let source = "void f() {
        x;
        { }
        if (a) b; else c;
        switch (v) { case 1: x; default: y; }
        while (a) b;
        do b; while (a);
        for (i = 0; i < 3; i++) x;
        continue;
        break;
        return;
        return x;
    }";
    assert_eq!(
        kinds(source),
        vec![
            "expression statement",
            "compound",
            "if",
            "switch",
            "while",
            "do-while",
            "for",
            "continue",
            "break",
            "return",
            "return",
        ]
    );
}

#[test]
fn test_if_without_else() {
    let (arena, id) = parse_fn("void f() { if (a) b; }");
    let stmts = body(&arena, id);
    let StmtKind::If { else_branch, .. } = arena.get_stmt(stmts[0]).kind else {
        panic!("expected if");
    };
    assert_eq!(else_branch, None);
}

#[test]
fn test_dangling_else_binds_inner_if() {
    let (arena, id) = parse_fn("void f() { if (a) if (b) x; else y; }");
    let stmts = body(&arena, id);
    let StmtKind::If {
        then_branch,
        else_branch,
        ..
    } = arena.get_stmt(stmts[0]).kind
    else {
        panic!("expected if");
    };
    assert_eq!(else_branch, None);
    assert!(matches!(
        arena.get_stmt(then_branch).kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn test_do_while_kind_and_order() {
    let (arena, id) = parse_fn("void f() { do { x; } while (y); }");
    let stmts = body(&arena, id);
    let StmtKind::While { kind, cond, body } = arena.get_stmt(stmts[0]).kind else {
        panic!("expected loop");
    };
    assert_eq!(kind, LoopKind::DoWhile);
    assert!(matches!(arena.get_expr(cond).kind, ExprKind::Ident(_)));
    assert!(matches!(arena.get_stmt(body).kind, StmtKind::Compound(_)));
}

#[test]
fn test_for_clauses() {
    let (arena, id) = parse_fn("void f() { for (i = 0, j = 1; i < 10; i++) { } }");
    let stmts = body(&arena, id);
    let StmtKind::For {
        init, cond, step, ..
    } = arena.get_stmt(stmts[0]).kind
    else {
        panic!("expected for");
    };
    assert!(matches!(arena.get_expr(init).kind, ExprKind::AssignmentList(_)));
    assert!(matches!(arena.get_expr(cond).kind, ExprKind::Binary { .. }));
    assert!(matches!(arena.get_expr(step).kind, ExprKind::Postfix { .. }));
}

#[test]
fn test_for_requires_all_clauses() {
    let (_, err) = parse_err("void f() { for (;;) x; }");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.context, Some(ErrorContext::ForLoop));
}

#[test]
fn test_case_and_default_labels() {
    let (arena, id) = parse_fn("void f() { switch (x) { case 1 + 1: a; default: b; } }");
    let stmts = body(&arena, id);
    let StmtKind::Switch { body: block, .. } = arena.get_stmt(stmts[0]).kind else {
        panic!("expected switch");
    };
    let StmtKind::Compound(list) = arena.get_stmt(block).kind else {
        panic!("expected block");
    };
    let labels = arena.get_stmt_list(list);
    assert_eq!(labels.len(), 2);
    let StmtKind::Case { value, .. } = arena.get_stmt(labels[0]).kind else {
        panic!("expected case");
    };
    assert!(matches!(arena.get_expr(value).kind, ExprKind::Binary { .. }));
    assert!(matches!(arena.get_stmt(labels[1]).kind, StmtKind::Default(_)));
}

#[test]
fn test_case_requires_colon() {
    let (_, err) = parse_err("void f() { switch (x) { case 1 a; } }");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::CaseLabel));
}

#[test]
fn test_return_value() {
    let (arena, id) = parse_fn("void f() { return 1 + 2; }");
    let stmts = body(&arena, id);
    assert!(matches!(arena.get_stmt(stmts[0]).kind, StmtKind::Return(Some(_))));
}

#[test]
fn test_statement_position() {
    let (arena, id) = parse_fn("void f() {\n    while (a) b;\n}");
    let stmts = body(&arena, id);
    assert_eq!(arena.get_stmt(stmts[0]).pos, SourcePos::new(2, 5, 9));
}

// === Errors ===

#[test]
fn test_declaration_is_rejected() {
    let (arena, err) = parse_err("void f() {\n  uint8_t x;\n}");
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.pos.line, 2);
    assert_eq!(err.pos.start_col, 3);
    assert_eq!(err.context, Some(ErrorContext::Block));
    assert!(arena.is_empty());
}

#[test]
fn test_missing_semicolon() {
    let (_, err) = parse_err("void f() { x }");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `;`, found `}`");
    assert_eq!(err.pos, SourcePos::new(1, 14, 14));
    assert_eq!(err.context, Some(ErrorContext::ExpressionStatement));
}

#[test]
fn test_unterminated_block() {
    let (_, err) = parse_err("void f() { x;");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.context, Some(ErrorContext::Block));
    assert!(err.message.ends_with("found end of input"), "{}", err.message);
}

#[test]
fn test_innermost_context_wins() {
    let (_, err) = parse_err("void f() { if (a) { while (b) c } }");
    assert_eq!(err.context, Some(ErrorContext::ExpressionStatement));
    assert_eq!(
        err.full_message(),
        "expected `;`, found `}` (while parsing an expression statement)"
    );
}

#[test]
fn test_invalid_character() {
    let (_, err) = parse_err("void f() { x = @; }");
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.pos, SourcePos::new(1, 16, 16));
}
