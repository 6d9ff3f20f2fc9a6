//! Statement nodes.

use std::fmt;

use crate::{ExprId, SourcePos, StmtId, StmtRange};

/// Statement node.
#[derive(Clone, Eq, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub pos: SourcePos,
}

impl Stmt {
    pub fn new(kind: StmtKind, pos: SourcePos) -> Self {
        Stmt { kind, pos }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.pos)
    }
}

/// Which flavour of loop a [`StmtKind::While`] node is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LoopKind {
    While,
    DoWhile,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// `{ stmts* }`
    Compound(StmtRange),
    /// `expr;`
    Expr(ExprId),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    Switch {
        cond: ExprId,
        body: StmtId,
    },
    /// `while (cond) body` and `do body while (cond);`
    While {
        kind: LoopKind,
        cond: ExprId,
        body: StmtId,
    },
    For {
        init: ExprId,
        cond: ExprId,
        step: ExprId,
        body: StmtId,
    },
    Continue,
    Break,
    Return(Option<ExprId>),
    Case {
        value: ExprId,
        body: StmtId,
    },
    Default(StmtId),
}

impl StmtKind {
    /// Short name of the node kind for dumps and diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            StmtKind::Compound(_) => "compound",
            StmtKind::Expr(_) => "expression statement",
            StmtKind::If { .. } => "if",
            StmtKind::Switch { .. } => "switch",
            StmtKind::While {
                kind: LoopKind::While,
                ..
            } => "while",
            StmtKind::While {
                kind: LoopKind::DoWhile,
                ..
            } => "do-while",
            StmtKind::For { .. } => "for",
            StmtKind::Continue => "continue",
            StmtKind::Break => "break",
            StmtKind::Return(_) => "return",
            StmtKind::Case { .. } => "case",
            StmtKind::Default(_) => "default",
        }
    }
}
