//! Control-stack entries.

use std::fmt;

use vds_ir::{ExprId, StmtId};

use crate::FnDescriptor;

/// One pending unit of work.
///
/// Markers refer to statements by index into the arena and never own
/// them.
#[derive(Clone, Copy)]
pub(crate) enum Control<'a> {
    /// Execute a statement.
    Stmt(StmtId),
    /// Evaluate an expression, pushing its value.
    Expr(ExprId),
    /// Arguments are on the value stack; invoke the function.
    Call(&'a FnDescriptor),
    /// Leave the current call frame.
    CallCleanup,
    /// The condition is on the value stack; pick a branch.
    If(StmtId),
    /// The condition is on the value stack; run another iteration or stop.
    Loop {
        stmt: StmtId,
        /// Height of the value stack below the loop's own values.
        value_base: usize,
    },
    /// Run the statement at `cursor` of a compound block.
    Compound {
        stmt: StmtId,
        cursor: u32,
        value_base: usize,
    },
}

impl fmt::Debug for Control<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Stmt(id) => write!(f, "Stmt({id:?})"),
            Control::Expr(id) => write!(f, "Expr({id:?})"),
            Control::Call(function) => write!(f, "Call({})", function.name),
            Control::CallCleanup => f.write_str("CallCleanup"),
            Control::If(id) => write!(f, "If({id:?})"),
            Control::Loop { stmt, .. } => write!(f, "Loop({stmt:?})"),
            Control::Compound { stmt, cursor, .. } => write!(f, "Compound({stmt:?}@{cursor})"),
        }
    }
}
