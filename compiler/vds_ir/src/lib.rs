//! Shared data types for VDScript.
//!
//! - source positions and tokens
//! - the flat, index-based AST and its arena
//! - primitive types and error codes used across phases
//!
//! # Design
//!
//! AST nodes never own children through pointers. Every node class lives
//! in one `Vec` inside [`AstArena`] and links to its children by typed
//! `u32` index, so destroying a tree of any depth is dropping a handful of
//! vectors. Traversals that need to visit a subtree use the explicit
//! work-list in [`walk`] instead of native recursion.

mod arena;
pub mod ast;
mod error_code;
mod ids;
mod pos;
mod token;
mod types;
pub mod walk;

pub use arena::{AstArena, Checkpoint};
pub use ast::{
    AssignOp, BinaryOp, Expr, ExprKind, Function, FunctionArg, Ident, LoopKind, PostfixOp, Stmt,
    StmtKind, UnaryOp,
};
pub use error_code::ErrorCode;
pub use ids::{ArgId, ArgRange, ExprId, ExprRange, FunctionId, IdentId, StmtId, StmtRange};
pub use pos::SourcePos;
pub use token::{Keyword, Operator, Token, TokenClass, TokenKind};
pub use types::PrimitiveType;
pub use walk::{NodeId, Subtree, Visit};
