//! AST node types.
//!
//! All nodes live in an [`AstArena`](crate::AstArena) and refer to each
//! other by index. Every node carries the source position it was parsed
//! from.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
pub use stmt::{LoopKind, Stmt, StmtKind};

use crate::{ArgRange, IdentId, SourcePos, StmtId};

/// Identifier node owning its text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Ident {
    pub name: Box<str>,
    pub pos: SourcePos,
}

/// Top-level function definition:
/// `ret_type name ( [type name [, ...]] ) { body }`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Function {
    pub ret_type: IdentId,
    pub name: IdentId,
    pub args: ArgRange,
    /// Always a compound statement.
    pub body: StmtId,
    pub pos: SourcePos,
}

/// One declared function argument: `type name`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionArg {
    pub ty: IdentId,
    pub name: IdentId,
    pub pos: SourcePos,
}
