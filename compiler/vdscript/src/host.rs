//! Generic host actions the `vds` runner registers.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use vds_eval::{CallbackError, UserData, Value};
use vds_ir::PrimitiveType;

use crate::{Callback, ScriptContext, ScriptError};

pub const RUNNER_CALLBACKS: &[Callback<'static>] = &[
    Callback {
        name: "print",
        ret: PrimitiveType::Void,
        args: &[PrimitiveType::String],
        func: print,
    },
    Callback {
        name: "sleep",
        ret: PrimitiveType::Void,
        args: &[PrimitiveType::U64],
        func: sleep,
    },
];

/// Register [`RUNNER_CALLBACKS`] with `ctx`.
pub fn register_runner_callbacks(ctx: &mut ScriptContext) -> Result<(), ScriptError> {
    ctx.register_callbacks(RUNNER_CALLBACKS, Arc::new(()))
}

/// `print(string msg)`: write the message and a newline to stdout.
/// Non-string arguments are printed in their display form.
fn print(args: &[Value], _: &UserData) -> Result<(), CallbackError> {
    let line = match args {
        [Value::String(text)] => text.to_string(),
        [other] => other.to_string(),
        _ => return Err(CallbackError::new("print takes one argument")),
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").map_err(|e| CallbackError::new(format!("cannot write output: {e}")))
}

/// `sleep(uint64_t ms)`.
fn sleep(args: &[Value], _: &UserData) -> Result<(), CallbackError> {
    let Some(ms) = args.first().and_then(Value::as_u64) else {
        return Err(CallbackError::new("sleep takes a millisecond count"));
    };
    std::thread::sleep(Duration::from_millis(ms));
    Ok(())
}
