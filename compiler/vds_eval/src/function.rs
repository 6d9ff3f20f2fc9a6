//! Function descriptors: the entries of a script context's namespace.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use vds_ir::{FunctionId, PrimitiveType};

use crate::Value;

/// Opaque host value handed back to every callback of one registration
/// batch.
pub type UserData = Arc<dyn Any + Send + Sync>;

/// Host callback. Receives the arguments in declaration order.
pub type NativeFn = fn(&[Value], &UserData) -> Result<(), CallbackError>;

/// Failure reported by a host callback.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        CallbackError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A host function as registered.
#[derive(Clone)]
pub struct ExternalFn {
    pub ret: PrimitiveType,
    pub args: Box<[PrimitiveType]>,
    pub func: NativeFn,
    pub user: UserData,
}

impl fmt::Debug for ExternalFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalFn")
            .field("ret", &self.ret)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Whether a function is defined by a script or by the host.
#[derive(Clone, Debug)]
pub enum FnKind {
    /// Script function; the AST stays in the context's arena.
    Internal(FunctionId),
    External(ExternalFn),
}

/// One callable name.
#[derive(Clone, Debug)]
pub struct FnDescriptor {
    pub name: Box<str>,
    /// Declared number of arguments.
    pub arity: usize,
    pub kind: FnKind,
}

impl FnDescriptor {
    pub fn internal(name: &str, arity: usize, function: FunctionId) -> Self {
        FnDescriptor {
            name: name.into(),
            arity,
            kind: FnKind::Internal(function),
        }
    }

    pub fn external(name: &str, external: ExternalFn) -> Self {
        FnDescriptor {
            name: name.into(),
            arity: external.args.len(),
            kind: FnKind::External(external),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.kind, FnKind::External(_))
    }
}

/// Name to function mapping shared by script and host functions.
pub type FunctionTable = FxHashMap<Box<str>, FnDescriptor>;
