//! `vds run`: load a script and call its entry function.

use tracing::warn;
use vds_eval::EvalConfig;

use super::read_file;
use crate::host::register_runner_callbacks;
use crate::reporting::render_error;
use crate::ScriptContext;

/// Environment variable limiting script call depth.
pub const MAX_CALL_DEPTH_VAR: &str = "VDS_MAX_CALL_DEPTH";

/// Interpreter settings from the environment.
pub fn config_from_env() -> EvalConfig {
    let mut config = EvalConfig::default();
    if let Ok(value) = std::env::var(MAX_CALL_DEPTH_VAR) {
        match value.trim().parse::<usize>() {
            Ok(depth) => config.max_call_depth = Some(depth),
            Err(_) => warn!(%value, "ignoring invalid {MAX_CALL_DEPTH_VAR}"),
        }
    }
    config
}

/// Run `entry` of the script at `path`, exiting non-zero on any error.
pub fn run_file(path: &str, entry: &str) {
    let source = read_file(path);
    let mut ctx = ScriptContext::with_config(config_from_env());

    let result = register_runner_callbacks(&mut ctx)
        .and_then(|()| ctx.load_script(&source))
        .and_then(|()| ctx.call_fn(entry, &[]));
    if let Err(err) = result {
        eprint!("{}", render_error(&source, path, &err));
        std::process::exit(1);
    }
}
