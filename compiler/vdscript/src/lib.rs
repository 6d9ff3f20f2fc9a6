//! VDScript: an embedded scripting engine for driving host actions.
//!
//! A [`ScriptContext`] holds one namespace of functions. Hosts register
//! native callbacks, load script source defining more functions, and call
//! any of them by name:
//!
//! ```
//! use std::sync::Arc;
//! use vdscript::{Callback, ScriptContext};
//! use vdscript::eval::{CallbackError, UserData, Value};
//! use vdscript::ir::PrimitiveType;
//!
//! fn ping(_: &[Value], _: &UserData) -> Result<(), CallbackError> {
//!     Ok(())
//! }
//!
//! let mut ctx = ScriptContext::new();
//! ctx.register_callbacks(
//!     &[Callback { name: "ping", ret: PrimitiveType::Void, args: &[], func: ping }],
//!     Arc::new(()),
//! )?;
//! ctx.load_script("void main() { ping(); }")?;
//! ctx.call_fn("main", &[])?;
//! # Ok::<(), vdscript::ScriptError>(())
//! ```
//!
//! The pipeline is split over the `vds_*` crates: `vds_lexer` tokenizes,
//! `vds_parse` builds the AST in a `vds_ir::AstArena`, and `vds_eval`
//! interprets calls with explicit value and control stacks.

mod context;
mod error;
pub mod commands;
pub mod host;
pub mod reporting;

pub use context::{Callback, ScriptContext};
pub use error::ScriptError;

pub use vds_eval as eval;
pub use vds_ir as ir;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, if `RUST_LOG` is set.
///
/// `RUST_LOG=vds_eval=trace` shows every interpreter step,
/// `RUST_LOG=debug` shows registration, loading and call frames.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
