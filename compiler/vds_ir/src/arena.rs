//! Flat storage for every AST node of a script context.
//!
//! Each node class lives in its own `Vec` and children are referenced by
//! typed index. Tearing the tree down is dropping the vectors: no node
//! destructor ever recurses into its children, so arbitrarily deep trees
//! free in constant stack space.
//!
//! Allocation is append-only. A [`Checkpoint`] records the length of every
//! table; [`AstArena::rollback`] truncates back to it, which discards
//! exactly the nodes a failed production allocated.

use crate::ast::{Expr, Function, FunctionArg, Ident, Stmt};
use crate::{ArgId, ArgRange, ExprId, ExprRange, FunctionId, IdentId, SourcePos, StmtId, StmtRange};

/// Converts a table length into the next index.
#[expect(
    clippy::cast_possible_truncation,
    reason = "arena tables stay far below u32::MAX entries"
)]
#[inline]
fn next_index(len: usize) -> u32 {
    len as u32
}

/// Contiguous storage for the AST of all loaded scripts.
#[derive(Clone, Default, Debug)]
pub struct AstArena {
    idents: Vec<Ident>,
    exprs: Vec<Expr>,
    /// Flattened expression lists (call arguments, assignment lists).
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    /// Flattened statement lists of compound blocks.
    stmt_lists: Vec<StmtId>,
    args: Vec<FunctionArg>,
    functions: Vec<Function>,
}

/// Table lengths at one point of parsing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Checkpoint {
    idents: usize,
    exprs: usize,
    expr_lists: usize,
    stmts: usize,
    stmt_lists: usize,
    args: usize,
    functions: usize,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from the source length.
    /// Heuristic: about one expression per 8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        AstArena {
            idents: Vec::with_capacity(estimated_exprs / 2),
            exprs: Vec::with_capacity(estimated_exprs),
            expr_lists: Vec::with_capacity(estimated_exprs / 4),
            stmts: Vec::with_capacity(estimated_exprs / 4),
            stmt_lists: Vec::with_capacity(estimated_exprs / 4),
            args: Vec::with_capacity(estimated_exprs / 16),
            functions: Vec::with_capacity(estimated_exprs / 64),
        }
    }

    // ===== Rollback =====

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            idents: self.idents.len(),
            exprs: self.exprs.len(),
            expr_lists: self.expr_lists.len(),
            stmts: self.stmts.len(),
            stmt_lists: self.stmt_lists.len(),
            args: self.args.len(),
            functions: self.functions.len(),
        }
    }

    /// Discard every node allocated after `checkpoint` was taken.
    ///
    /// Rolling back to a checkpoint newer than the current state is a no-op,
    /// so nested productions may each roll back on the same failure.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.idents.truncate(checkpoint.idents);
        self.exprs.truncate(checkpoint.exprs);
        self.expr_lists.truncate(checkpoint.expr_lists);
        self.stmts.truncate(checkpoint.stmts);
        self.stmt_lists.truncate(checkpoint.stmt_lists);
        self.args.truncate(checkpoint.args);
        self.functions.truncate(checkpoint.functions);
    }

    // ===== Identifiers =====

    pub fn alloc_ident(&mut self, name: &str, pos: SourcePos) -> IdentId {
        let id = IdentId::new(next_index(self.idents.len()));
        self.idents.push(Ident {
            name: name.into(),
            pos,
        });
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_ident(&self, id: IdentId) -> &Ident {
        &self.idents[id.index()]
    }

    /// Text of an identifier node.
    #[inline]
    #[track_caller]
    pub fn ident_name(&self, id: IdentId) -> &str {
        &self.idents[id.index()].name
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        ExprRange::new(next_index(start), next_index(self.expr_lists.len() - start))
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(stmts);
        StmtRange::new(next_index(start), next_index(self.stmt_lists.len() - start))
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    // ===== Function arguments =====

    pub fn alloc_args(&mut self, args: impl IntoIterator<Item = FunctionArg>) -> ArgRange {
        let start = self.args.len();
        self.args.extend(args);
        ArgRange::new(next_index(start), next_index(self.args.len() - start))
    }

    #[inline]
    pub fn get_args(&self, range: ArgRange) -> &[FunctionArg] {
        let start = range.start as usize;
        &self.args[start..start + range.len()]
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_arg(&self, id: ArgId) -> &FunctionArg {
        &self.args[id.index()]
    }

    // ===== Functions =====

    pub fn alloc_function(&mut self, function: Function) -> FunctionId {
        let id = FunctionId::new(next_index(self.functions.len()));
        self.functions.push(function);
        id
    }

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    /// Name of a function definition.
    pub fn function_name(&self, id: FunctionId) -> &str {
        self.ident_name(self.get_function(id).name)
    }

    /// Number of declared arguments of a function definition.
    pub fn function_arity(&self, id: FunctionId) -> usize {
        self.get_function(id).args.len()
    }

    // ===== Statistics =====

    pub fn ident_count(&self) -> usize {
        self.idents.len()
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Total number of nodes of every class.
    pub fn node_count(&self) -> usize {
        self.idents.len() + self.exprs.len() + self.stmts.len() + self.args.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
