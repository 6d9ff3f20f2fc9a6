//! Expression nodes.

use std::fmt;

use super::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
use crate::{ExprId, ExprRange, IdentId, SourcePos};

/// Expression node.
#[derive(Clone, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: SourcePos,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: SourcePos) -> Self {
        Expr { kind, pos }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    // Primary
    Ident(IdentId),
    NumConst(u64),
    StringConst(Box<str>),
    Bool(bool),

    /// `a, b, c`; only built when a comma was actually present.
    AssignmentList(ExprRange),

    // Postfix
    Postfix {
        op: PostfixOp,
        operand: ExprId,
    },
    Call {
        callee: ExprId,
        args: ExprRange,
    },
    /// `base->member`
    Arrow {
        base: ExprId,
        member: IdentId,
    },
    /// `base.member`
    Dot {
        base: ExprId,
        member: IdentId,
    },

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },
    /// `(type) expr`. The parser does not produce casts yet; the grammar
    /// level exists and falls through to unary expressions.
    Cast {
        ty: IdentId,
        operand: ExprId,
    },
}

impl ExprKind {
    /// Short name of the node kind for dumps and diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            ExprKind::Ident(_) => "identifier",
            ExprKind::NumConst(_) => "numeric constant",
            ExprKind::StringConst(_) => "string constant",
            ExprKind::Bool(_) => "boolean constant",
            ExprKind::AssignmentList(_) => "assignment list",
            ExprKind::Postfix { .. } => "postfix expression",
            ExprKind::Call { .. } => "call",
            ExprKind::Arrow { .. } => "member access `->`",
            ExprKind::Dot { .. } => "member access `.`",
            ExprKind::Unary { .. } => "unary expression",
            ExprKind::Binary { .. } => "binary expression",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Cast { .. } => "cast",
        }
    }
}
