//! The two-stack interpreter.
//!
//! One loop pops the control stack and runs the entry: statements and
//! expressions schedule more entries, markers perform the transition they
//! stand for. Native recursion is never used, so script nesting depth is
//! bounded by heap memory and [`EvalConfig::max_call_depth`] only.
//!
//! Value stack discipline: an expression pushes exactly one value. A
//! compound block truncates the value stack back to its base before each
//! statement, and a loop does the same before each iteration, which
//! discards the values of expression statements and `for` clauses.

use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};
use vds_ir::{AstArena, ExprId, ExprKind, ExprRange, LoopKind, SourcePos, StmtId, StmtKind};

use crate::control::Control;
use crate::environment::Environment;
use crate::{EvalConfig, EvalError, EvalResult, FnDescriptor, FnKind, FunctionTable, Value};

/// Interprets calls against one arena and function table.
pub struct Interpreter<'a> {
    arena: &'a AstArena,
    functions: &'a FunctionTable,
    config: EvalConfig,
    values: Vec<Value>,
    control: Vec<Control<'a>>,
    env: Environment<'a>,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a AstArena, functions: &'a FunctionTable, config: EvalConfig) -> Self {
        Interpreter {
            arena,
            functions,
            config,
            values: Vec::new(),
            control: Vec::new(),
            env: Environment::new(),
        }
    }

    /// Call `function` with `args` and run until the call completes.
    ///
    /// `args` must match the declared arity; a mismatch is reported before
    /// anything runs.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.name))]
    pub fn call(&mut self, function: &'a FnDescriptor, args: &[Value]) -> EvalResult<()> {
        if args.len() != function.arity {
            return Err(EvalError::ArityMismatch {
                name: function.name.clone(),
                expected: function.arity,
                found: args.len(),
            });
        }
        self.reset();
        self.values
            .try_reserve(args.len())
            .map_err(|_| EvalError::OutOfMemory {
                what: "value stack",
            })?;
        self.values.extend_from_slice(args);
        self.push_control(Control::Call(function))?;

        let result = self.run();
        self.reset();
        result
    }

    fn reset(&mut self) {
        self.values.clear();
        self.control.clear();
        while self.env.pop_frame().is_some() {}
    }

    fn run(&mut self) -> EvalResult<()> {
        let mut steps: u64 = 0;
        while let Some(entry) = self.control.pop() {
            trace!(
                ?entry,
                values = self.values.len(),
                scopes = self.env.scope_count(),
                "step"
            );
            steps += 1;
            match entry {
                Control::Stmt(id) => self.exec_stmt(id)?,
                Control::Expr(id) => self.eval_expr(id)?,
                Control::Call(function) => self.enter_call(function)?,
                Control::CallCleanup => self.leave_call()?,
                Control::If(id) => self.branch(id)?,
                Control::Loop { stmt, value_base } => self.iterate(stmt, value_base)?,
                Control::Compound {
                    stmt,
                    cursor,
                    value_base,
                } => self.step_compound(stmt, cursor, value_base)?,
            }
        }
        debug!(steps, "call completed");
        Ok(())
    }

    // ===== Statements =====

    fn exec_stmt(&mut self, id: StmtId) -> EvalResult<()> {
        let arena = self.arena;
        let stmt = arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Compound(_) => {
                self.env.push_scope()?;
                let value_base = self.values.len();
                self.push_control(Control::Compound {
                    stmt: id,
                    cursor: 0,
                    value_base,
                })
            }
            StmtKind::Expr(expr) => self.push_control(Control::Expr(expr)),
            StmtKind::If { cond, .. } => {
                self.push_control(Control::If(id))?;
                self.push_control(Control::Expr(cond))
            }
            StmtKind::While { kind, cond, body } => {
                self.push_loop(id)?;
                self.push_control(Control::Expr(cond))?;
                if kind == LoopKind::DoWhile {
                    self.push_control(Control::Stmt(body))?;
                }
                Ok(())
            }
            StmtKind::For { init, cond, .. } => {
                self.push_loop(id)?;
                self.push_control(Control::Expr(cond))?;
                self.push_control(Control::Expr(init))
            }
            StmtKind::Continue => {
                let stmt = self.unwind_to_loop(stmt.pos, "continue");
                self.schedule_retest(stmt)
            }
            StmtKind::Break => {
                self.unwind_to_loop(stmt.pos, "break");
                self.control.pop();
                Ok(())
            }
            StmtKind::Return(value) => {
                self.unwind_to_call(stmt.pos);
                match value {
                    Some(expr) => self.push_control(Control::Expr(expr)),
                    None => Ok(()),
                }
            }
            StmtKind::Switch { .. } | StmtKind::Case { .. } | StmtKind::Default(_) => fatal(
                stmt.pos,
                format_args!("`{}` is not supported at runtime", stmt.kind.describe()),
            ),
        }
    }

    fn push_loop(&mut self, stmt: StmtId) -> EvalResult<()> {
        let value_base = self.values.len();
        self.push_control(Control::Loop { stmt, value_base })
    }

    /// The condition of `if` statement `id` is on the value stack.
    fn branch(&mut self, id: StmtId) -> EvalResult<()> {
        let arena = self.arena;
        let stmt = arena.get_stmt(id);
        let StmtKind::If {
            then_branch,
            else_branch,
            ..
        } = stmt.kind
        else {
            fatal(stmt.pos, "if marker on a non-if statement");
        };
        if self.pop_condition(stmt.pos) {
            self.push_control(Control::Stmt(then_branch))
        } else if let Some(else_branch) = else_branch {
            self.push_control(Control::Stmt(else_branch))
        } else {
            Ok(())
        }
    }

    /// The condition of loop `id` is on the value stack.
    fn iterate(&mut self, id: StmtId, value_base: usize) -> EvalResult<()> {
        let pos = self.arena.get_stmt(id).pos;
        let go = self.pop_condition(pos);
        self.values.truncate(value_base);
        if !go {
            return Ok(());
        }
        self.push_control(Control::Loop {
            stmt: id,
            value_base,
        })?;
        self.schedule_retest(id)?;
        let body = match self.arena.get_stmt(id).kind {
            StmtKind::While { body, .. } | StmtKind::For { body, .. } => body,
            _ => fatal(pos, "loop marker on a non-loop statement"),
        };
        self.push_control(Control::Stmt(body))
    }

    /// Schedule the next condition test of loop `id`, preceded by the step
    /// expression of a `for` loop.
    fn schedule_retest(&mut self, id: StmtId) -> EvalResult<()> {
        let arena = self.arena;
        let stmt = arena.get_stmt(id);
        match stmt.kind {
            StmtKind::While { cond, .. } => self.push_control(Control::Expr(cond)),
            StmtKind::For { cond, step, .. } => {
                self.push_control(Control::Expr(cond))?;
                self.push_control(Control::Expr(step))
            }
            _ => fatal(stmt.pos, "loop marker on a non-loop statement"),
        }
    }

    fn step_compound(&mut self, id: StmtId, cursor: u32, value_base: usize) -> EvalResult<()> {
        self.values.truncate(value_base);
        let arena = self.arena;
        let stmt = arena.get_stmt(id);
        let StmtKind::Compound(list) = stmt.kind else {
            fatal(stmt.pos, "compound marker on a non-compound statement");
        };
        match arena.get_stmt_list(list).get(cursor as usize) {
            Some(&next) => {
                self.push_control(Control::Compound {
                    stmt: id,
                    cursor: cursor + 1,
                    value_base,
                })?;
                self.push_control(Control::Stmt(next))
            }
            None => {
                self.env.pop_scope();
                Ok(())
            }
        }
    }

    // ===== Unwinding =====

    /// Pop entries down to the innermost loop marker, which stays on the
    /// stack. Returns the loop statement.
    fn unwind_to_loop(&mut self, pos: SourcePos, keyword: &str) -> StmtId {
        loop {
            match self.control.last().copied() {
                Some(Control::Loop { stmt, .. }) => return stmt,
                Some(Control::CallCleanup) | None => {
                    fatal(pos, format_args!("`{keyword}` outside of a loop"));
                }
                Some(_) => self.discard_top(),
            }
        }
    }

    /// Pop entries down to the cleanup marker of the current call.
    fn unwind_to_call(&mut self, pos: SourcePos) {
        loop {
            match self.control.last().copied() {
                Some(Control::CallCleanup) => return,
                None => fatal(pos, "`return` outside of a function"),
                Some(_) => self.discard_top(),
            }
        }
    }

    fn discard_top(&mut self) {
        if let Some(entry) = self.control.pop() {
            if matches!(entry, Control::Compound { .. }) {
                self.env.pop_scope();
            }
            trace!(?entry, "unwound");
        }
    }

    // ===== Calls =====

    fn enter_call(&mut self, function: &'a FnDescriptor) -> EvalResult<()> {
        let Some(base) = self.values.len().checked_sub(function.arity) else {
            fatal(
                SourcePos::DUMMY,
                format_args!("missing arguments for `{}`", function.name),
            );
        };
        match &function.kind {
            FnKind::Internal(id) => {
                if let Some(limit) = self.config.max_call_depth {
                    if self.env.depth() >= limit {
                        return Err(EvalError::CallDepthExceeded { limit });
                    }
                }
                let arena = self.arena;
                let definition = arena.get_function(*id);
                self.push_control(Control::CallCleanup)?;
                self.env.push_frame(base)?;
                let params = arena.get_args(definition.args);
                let args = self.values.split_off(base);
                for (param, value) in params.iter().zip(args) {
                    self.env.define(arena.ident_name(param.name), value);
                }
                self.push_control(Control::Stmt(definition.body))
            }
            FnKind::External(external) => {
                let args: SmallVec<[Value; 8]> = self.values.drain(base..).collect();
                trace!(function = %function.name, args = args.len(), "callback");
                (external.func)(&args, &external.user).map_err(|source| {
                    EvalError::CallbackFailed {
                        name: function.name.clone(),
                        source,
                    }
                })?;
                self.push_value(Value::Void)
            }
        }
    }

    fn leave_call(&mut self) -> EvalResult<()> {
        let Some(frame) = self.env.pop_frame() else {
            fatal(SourcePos::DUMMY, "call cleanup without an active frame");
        };
        self.values.truncate(frame.value_base);
        self.push_value(Value::Void)
    }

    /// Resolve the callee and schedule argument evaluation ahead of the
    /// call marker, first argument on top.
    fn schedule_call(&mut self, callee: ExprId, args: ExprRange) -> EvalResult<()> {
        let arena = self.arena;
        let functions = self.functions;
        let callee = arena.get_expr(callee);
        let ExprKind::Ident(name) = callee.kind else {
            fatal(
                callee.pos,
                format_args!("cannot call a {}", callee.kind.describe()),
            );
        };
        let name = arena.ident_name(name);
        let Some(function) = functions.get(name) else {
            return Err(EvalError::NotFound { name: name.into() });
        };
        let args = arena.get_expr_list(args);
        if args.len() != function.arity {
            return Err(EvalError::ArityMismatch {
                name: name.into(),
                expected: function.arity,
                found: args.len(),
            });
        }

        self.control
            .try_reserve(args.len() + 1)
            .map_err(|_| EvalError::OutOfMemory {
                what: "control stack",
            })?;
        self.control.push(Control::Call(function));
        self.control
            .extend(args.iter().rev().map(|&arg| Control::Expr(arg)));
        Ok(())
    }

    // ===== Expressions =====

    fn eval_expr(&mut self, id: ExprId) -> EvalResult<()> {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        match &expr.kind {
            ExprKind::NumConst(value) => self.push_value(Value::U64(*value)),
            ExprKind::StringConst(text) => self.push_value(Value::string(text)),
            ExprKind::Bool(b) => self.push_value(Value::Bool(*b)),
            ExprKind::Ident(ident) => {
                let name = arena.ident_name(*ident);
                let Some(value) = self.env.lookup(name).cloned() else {
                    fatal(expr.pos, format_args!("`{name}` is not defined"));
                };
                self.push_value(value)
            }
            ExprKind::Call { callee, args } => self.schedule_call(*callee, *args),
            other => fatal(
                expr.pos,
                format_args!("evaluating a {} is not supported", other.describe()),
            ),
        }
    }

    // ===== Stacks =====

    fn push_value(&mut self, value: Value) -> EvalResult<()> {
        self.values.try_reserve(1).map_err(|_| EvalError::OutOfMemory {
            what: "value stack",
        })?;
        self.values.push(value);
        Ok(())
    }

    fn push_control(&mut self, entry: Control<'a>) -> EvalResult<()> {
        self.control.try_reserve(1).map_err(|_| EvalError::OutOfMemory {
            what: "control stack",
        })?;
        self.control.push(entry);
        Ok(())
    }

    fn pop_condition(&mut self, pos: SourcePos) -> bool {
        let Some(value) = self.values.pop() else {
            fatal(pos, "condition missing from the value stack");
        };
        match value.is_truthy() {
            Some(truth) => truth,
            None => fatal(
                pos,
                format_args!("a {} value has no truth value", value.type_of()),
            ),
        }
    }
}

/// Abort on a condition the interpreter does not support.
#[cold]
#[track_caller]
fn fatal(pos: SourcePos, message: impl fmt::Display) -> ! {
    panic!("{pos}: {message}")
}
