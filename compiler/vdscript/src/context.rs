//! The script context: one namespace of script and host functions.

use rustc_hash::FxHashSet;
use tracing::debug;
use vds_eval::{
    call_function, EvalConfig, ExternalFn, FnDescriptor, FunctionTable, NativeFn, UserData, Value,
};
use vds_ir::{AstArena, FunctionId, PrimitiveType};
use vds_parse::Parser;

use crate::ScriptError;

/// A host function to register.
///
/// Name and argument types are borrowed only for the duration of
/// [`ScriptContext::register_callbacks`], so tables can be static or built
/// at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Callback<'a> {
    pub name: &'a str,
    pub ret: PrimitiveType,
    pub args: &'a [PrimitiveType],
    pub func: NativeFn,
}

/// Owns every parsed function AST and the name to function mapping.
///
/// Registration and loading take `&mut self`, calls take `&self`, so the
/// namespace cannot change while a call is running.
#[derive(Default)]
pub struct ScriptContext {
    arena: AstArena,
    functions: FunctionTable,
    /// Script functions in load order.
    scripts: Vec<FunctionId>,
    config: EvalConfig,
}

impl ScriptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        ScriptContext {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Register a batch of host functions sharing one user value.
    ///
    /// Fails on an empty batch and on a name that is already taken, by an
    /// earlier registration or within the batch. A failed batch registers
    /// nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(count = callbacks.len()))]
    pub fn register_callbacks(
        &mut self,
        callbacks: &[Callback<'_>],
        user: UserData,
    ) -> Result<(), ScriptError> {
        if callbacks.is_empty() {
            return Err(ScriptError::InvalidParameter(
                "no callbacks to register".to_owned(),
            ));
        }

        let mut batch = FxHashSet::default();
        for callback in callbacks {
            if self.functions.contains_key(callback.name) || !batch.insert(callback.name) {
                return Err(ScriptError::Duplicate {
                    name: callback.name.into(),
                });
            }
        }

        self.functions.reserve(callbacks.len());
        for callback in callbacks {
            let external = ExternalFn {
                ret: callback.ret,
                args: callback.args.into(),
                func: callback.func,
                user: UserData::clone(&user),
            };
            self.functions
                .insert(callback.name.into(), FnDescriptor::external(callback.name, external));
            debug!(name = callback.name, args = callback.args.len(), "registered callback");
        }
        Ok(())
    }

    /// Parse `source` and register every function it defines.
    ///
    /// Loading stops at the first error. Functions parsed before it stay
    /// registered; the failing function leaves nothing behind. A function
    /// whose name is already taken is a [`ScriptError::Duplicate`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn load_script(&mut self, source: &str) -> Result<(), ScriptError> {
        let mut parser = Parser::new(source, &mut self.arena);
        while !parser.is_at_end() {
            let checkpoint = parser.checkpoint();
            let id = parser.parse_function()?;
            let name: Box<str> = parser.arena().function_name(id).into();
            if self.functions.contains_key(&name) {
                parser.rollback(checkpoint);
                return Err(ScriptError::Duplicate { name });
            }
            let arity = parser.arena().function_arity(id);
            debug!(name = &*name, arity, "loaded function");
            self.functions
                .insert(name.clone(), FnDescriptor::internal(&name, arity, id));
            self.scripts.push(id);
        }
        Ok(())
    }

    /// Call the function `name` with `args`.
    ///
    /// The argument count must match the declared arity; argument types
    /// are not checked.
    #[tracing::instrument(level = "debug", skip(self, args), fields(args = args.len()))]
    pub fn call_fn(&self, name: &str, args: &[Value]) -> Result<(), ScriptError> {
        let Some(function) = self.functions.get(name) else {
            return Err(ScriptError::NotFound { name: name.into() });
        };
        if args.len() != function.arity {
            return Err(ScriptError::InvalidParameter(format!(
                "`{name}` takes {} argument(s) but {} were given",
                function.arity,
                args.len()
            )));
        }
        call_function(&self.arena, &self.functions, self.config, function, args)?;
        Ok(())
    }

    // ===== Introspection =====

    pub fn contains_fn(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn get_fn(&self, name: &str) -> Option<&FnDescriptor> {
        self.functions.get(name)
    }

    /// Names of all registered functions, in no particular order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.functions.keys().map(|name| &**name)
    }

    pub fn script_function_count(&self) -> usize {
        self.scripts.len()
    }

    pub fn arena(&self) -> &AstArena {
        &self.arena
    }
}
