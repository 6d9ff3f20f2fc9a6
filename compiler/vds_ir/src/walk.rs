//! Non-recursive subtree traversal.
//!
//! [`Subtree`] keeps one explicit work-list seeded with the root: each step
//! pops a node, pushes its children and yields the node. Stack usage is
//! independent of how deep or wide the tree is.

use crate::ast::{ExprKind, StmtKind};
use crate::{ArgId, AstArena, ExprId, FunctionId, IdentId, StmtId};

/// Reference to a node of any class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeId {
    Function(FunctionId),
    Arg(ArgId),
    Ident(IdentId),
    Stmt(StmtId),
    Expr(ExprId),
}

/// A node yielded by [`Subtree`] together with its depth below the root.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Visit {
    pub node: NodeId,
    pub depth: usize,
}

/// Pre-order iterator over a subtree, children in source order.
pub struct Subtree<'a> {
    arena: &'a AstArena,
    work: Vec<Visit>,
    children: Vec<NodeId>,
}

impl Iterator for Subtree<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = self.work.pop()?;
        self.children.clear();
        self.arena.push_children(visit.node, &mut self.children);
        // Reversed so the first child is popped first.
        self.work.extend(self.children.iter().rev().map(|&node| Visit {
            node,
            depth: visit.depth + 1,
        }));
        Some(visit)
    }
}

impl AstArena {
    /// Iterate over `root` and everything below it.
    pub fn subtree(&self, root: NodeId) -> Subtree<'_> {
        Subtree {
            arena: self,
            work: vec![Visit {
                node: root,
                depth: 0,
            }],
            children: Vec::new(),
        }
    }

    /// Append the direct children of `node` to `out`, in source order.
    pub fn push_children(&self, node: NodeId, out: &mut Vec<NodeId>) {
        match node {
            NodeId::Function(id) => {
                let function = self.get_function(id);
                out.push(NodeId::Ident(function.ret_type));
                out.push(NodeId::Ident(function.name));
                let start = function.args.start;
                out.extend((start..start + function.args.len).map(|i| NodeId::Arg(ArgId::new(i))));
                out.push(NodeId::Stmt(function.body));
            }
            NodeId::Arg(id) => {
                let arg = self.get_arg(id);
                out.push(NodeId::Ident(arg.ty));
                out.push(NodeId::Ident(arg.name));
            }
            NodeId::Ident(_) => {}
            NodeId::Stmt(id) => self.push_stmt_children(id, out),
            NodeId::Expr(id) => self.push_expr_children(id, out),
        }
    }

    fn push_stmt_children(&self, id: StmtId, out: &mut Vec<NodeId>) {
        match self.get_stmt(id).kind {
            StmtKind::Compound(list) => {
                out.extend(self.get_stmt_list(list).iter().map(|&s| NodeId::Stmt(s)));
            }
            StmtKind::Expr(expr) | StmtKind::Return(Some(expr)) => out.push(NodeId::Expr(expr)),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push(NodeId::Expr(cond));
                out.push(NodeId::Stmt(then_branch));
                out.extend(else_branch.map(NodeId::Stmt));
            }
            StmtKind::Switch { cond, body } | StmtKind::While { cond, body, .. } => {
                out.push(NodeId::Expr(cond));
                out.push(NodeId::Stmt(body));
            }
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => {
                out.push(NodeId::Expr(init));
                out.push(NodeId::Expr(cond));
                out.push(NodeId::Expr(step));
                out.push(NodeId::Stmt(body));
            }
            StmtKind::Case { value, body } => {
                out.push(NodeId::Expr(value));
                out.push(NodeId::Stmt(body));
            }
            StmtKind::Default(body) => out.push(NodeId::Stmt(body)),
            StmtKind::Continue | StmtKind::Break | StmtKind::Return(None) => {}
        }
    }

    fn push_expr_children(&self, id: ExprId, out: &mut Vec<NodeId>) {
        match &self.get_expr(id).kind {
            ExprKind::Ident(ident) => out.push(NodeId::Ident(*ident)),
            ExprKind::NumConst(_) | ExprKind::StringConst(_) | ExprKind::Bool(_) => {}
            ExprKind::AssignmentList(list) => {
                out.extend(self.get_expr_list(*list).iter().map(|&e| NodeId::Expr(e)));
            }
            ExprKind::Postfix { operand, .. } | ExprKind::Unary { operand, .. } => {
                out.push(NodeId::Expr(*operand));
            }
            ExprKind::Call { callee, args } => {
                out.push(NodeId::Expr(*callee));
                out.extend(self.get_expr_list(*args).iter().map(|&e| NodeId::Expr(e)));
            }
            ExprKind::Arrow { base, member } | ExprKind::Dot { base, member } => {
                out.push(NodeId::Expr(*base));
                out.push(NodeId::Ident(*member));
            }
            ExprKind::Binary { left, right, .. } => {
                out.push(NodeId::Expr(*left));
                out.push(NodeId::Expr(*right));
            }
            ExprKind::Assign { target, value, .. } => {
                out.push(NodeId::Expr(*target));
                out.push(NodeId::Expr(*value));
            }
            ExprKind::Cast { ty, operand } => {
                out.push(NodeId::Ident(*ty));
                out.push(NodeId::Expr(*operand));
            }
        }
    }

    /// One-line description of a node for dumps.
    pub fn node_label(&self, node: NodeId) -> String {
        match node {
            NodeId::Function(id) => format!("function {}", self.function_name(id)),
            NodeId::Arg(_) => "argument".to_owned(),
            NodeId::Ident(id) => format!("ident {}", self.ident_name(id)),
            NodeId::Stmt(id) => self.get_stmt(id).kind.describe().to_owned(),
            NodeId::Expr(id) => match &self.get_expr(id).kind {
                ExprKind::NumConst(value) => format!("number {value}"),
                ExprKind::StringConst(text) => format!("string \"{text}\""),
                ExprKind::Bool(value) => format!("bool {value}"),
                ExprKind::Postfix { op, .. } => format!("postfix {}", op.as_symbol()),
                ExprKind::Unary { op, .. } => format!("unary {}", op.as_symbol()),
                ExprKind::Binary { op, .. } => format!("binary {}", op.as_symbol()),
                ExprKind::Assign { op, .. } => format!("assign {}", op.as_symbol()),
                other => other.describe().to_owned(),
            },
        }
    }
}
