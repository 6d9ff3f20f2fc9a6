#![allow(clippy::unwrap_used, clippy::expect_used)]

mod item;
mod stmt;

use crate::{parse_all, ParseError, Parser};
use vds_ir::{AstArena, ExprId, FunctionId, StmtId, StmtKind};

/// Parse `source` as a single function, panicking on error.
fn parse_fn(source: &str) -> (AstArena, FunctionId) {
    let mut arena = AstArena::new();
    let id = Parser::new(source, &mut arena)
        .parse_function()
        .unwrap_or_else(|e| panic!("parse failed: {e}"));
    (arena, id)
}

/// Parse `source` as a single function and return its error.
fn parse_err(source: &str) -> (AstArena, ParseError) {
    let mut arena = AstArena::new();
    let (functions, err) = parse_all(source, &mut arena);
    let err = err.unwrap_or_else(|| panic!("expected error, parsed {functions:?}"));
    (arena, err)
}

/// Statements of the body of the parsed function.
fn body(arena: &AstArena, id: FunctionId) -> Vec<StmtId> {
    let StmtKind::Compound(list) = arena.get_stmt(arena.get_function(id).body).kind else {
        panic!("body is not a compound statement");
    };
    arena.get_stmt_list(list).to_vec()
}

/// Parse `expr` inside `void f() { expr; }` and return the expression.
fn parse_expr(expr: &str) -> (AstArena, ExprId) {
    let (arena, id) = parse_fn(&format!("void f() {{ {expr}; }}"));
    let stmts = body(&arena, id);
    assert_eq!(stmts.len(), 1);
    let StmtKind::Expr(e) = arena.get_stmt(stmts[0]).kind else {
        panic!("not an expression statement");
    };
    (arena, e)
}
