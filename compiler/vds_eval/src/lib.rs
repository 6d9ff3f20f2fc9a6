//! Two-stack interpreter for VDScript.
//!
//! Evaluates one function call at a time with an explicit value stack and
//! an explicit control stack instead of native recursion:
//!
//! - [`Value`]: tagged runtime values
//! - [`FnDescriptor`]: script and host functions sharing one namespace
//! - [`Environment`]: scope chain and call frames
//! - [`Interpreter`]: the control loop
//!
//! Only literals, identifiers and calls are evaluated. Operators, `switch`
//! and misplaced `break`/`continue` are parsed but abort interpretation
//! with a panic.

mod config;
mod control;
mod environment;
mod error;
mod function;
mod interpreter;
mod value;

#[cfg(test)]
mod tests;

pub use config::EvalConfig;
pub use environment::{CallFrame, Environment, Scope, Variable};
pub use error::{EvalError, EvalResult};
pub use function::{CallbackError, ExternalFn, FnDescriptor, FnKind, FunctionTable, NativeFn, UserData};
pub use interpreter::Interpreter;
pub use value::Value;

use vds_ir::AstArena;

/// Run `function` to completion on a fresh interpreter.
pub fn call_function(
    arena: &AstArena,
    functions: &FunctionTable,
    config: EvalConfig,
    function: &FnDescriptor,
    args: &[Value],
) -> EvalResult<()> {
    Interpreter::new(arena, functions, config).call(function, args)
}
