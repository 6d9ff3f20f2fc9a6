#![allow(clippy::unwrap_used, clippy::expect_used)]

mod calls;

use std::sync::Arc;

use parking_lot::Mutex;
use vds_ir::{AstArena, PrimitiveType};
use vds_parse::parse_all;

use crate::{
    call_function, CallbackError, EvalConfig, EvalResult, ExternalFn, FnDescriptor, FunctionTable,
    NativeFn, UserData, Value,
};

type Log = Mutex<Vec<String>>;

/// A parsed script plus recording host functions.
struct Harness {
    arena: AstArena,
    functions: FunctionTable,
    log: Arc<Log>,
    config: EvalConfig,
}

fn append(user: &UserData, line: String) -> Result<(), CallbackError> {
    let log = user
        .downcast_ref::<Log>()
        .ok_or_else(|| CallbackError::new("unexpected user data"))?;
    log.lock().push(line);
    Ok(())
}

fn joined(args: &[Value]) -> String {
    args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn emit(args: &[Value], user: &UserData) -> Result<(), CallbackError> {
    append(user, joined(args))
}

fn pair(args: &[Value], user: &UserData) -> Result<(), CallbackError> {
    append(user, format!("pair {}", joined(args)))
}

fn tick(_: &[Value], user: &UserData) -> Result<(), CallbackError> {
    append(user, "tick".to_owned())
}

fn fail(_: &[Value], _: &UserData) -> Result<(), CallbackError> {
    Err(CallbackError::new("boom"))
}

impl Harness {
    fn new(source: &str) -> Self {
        let mut arena = AstArena::new();
        let (ids, err) = parse_all(source, &mut arena);
        if let Some(err) = err {
            panic!("parse failed: {err}");
        }

        let mut functions = FunctionTable::default();
        for id in ids {
            let name = arena.function_name(id);
            functions.insert(
                name.into(),
                FnDescriptor::internal(name, arena.function_arity(id), id),
            );
        }

        let log: Arc<Log> = Arc::new(Mutex::new(Vec::new()));
        let user: UserData = log.clone();
        let host: [(&str, &[PrimitiveType], NativeFn); 4] = [
            ("emit", &[PrimitiveType::U64], emit),
            ("pair", &[PrimitiveType::U64, PrimitiveType::U64], pair),
            ("tick", &[], tick),
            ("fail", &[], fail),
        ];
        for (name, args, func) in host {
            functions.insert(
                name.into(),
                FnDescriptor::external(
                    name,
                    ExternalFn {
                        ret: PrimitiveType::Void,
                        args: args.into(),
                        func,
                        user: Arc::clone(&user),
                    },
                ),
            );
        }

        Harness {
            arena,
            functions,
            log,
            config: EvalConfig::default(),
        }
    }

    fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    fn call(&self, name: &str, args: &[Value]) -> EvalResult<()> {
        let function = &self.functions[name];
        call_function(&self.arena, &self.functions, self.config, function, args)
    }

    fn run(&self) -> EvalResult<()> {
        self.call("main", &[])
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

/// Run `main` of `source` and return what the host functions recorded.
fn run_main(source: &str) -> Vec<String> {
    let harness = Harness::new(source);
    harness.run().unwrap();
    harness.log()
}
