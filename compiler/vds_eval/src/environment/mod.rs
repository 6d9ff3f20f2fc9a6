//! Scopes and call frames.
//!
//! Scopes live in one stack-ordered `Vec`: a compound statement pushes a
//! scope on entry and pops it on exit, a call pushes a frame whose root
//! scope holds the arguments. Each scope links to its parent by index, and
//! a frame's root scope has no parent, so a function never sees its
//! caller's variables.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{EvalError, EvalResult, Value};

/// A named value in a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub value: Value,
}

/// One lexical block's variables.
#[derive(Debug)]
pub struct Scope<'a> {
    vars: FxHashMap<&'a str, Variable>,
    parent: Option<usize>,
}

impl<'a> Scope<'a> {
    fn new(parent: Option<usize>) -> Self {
        Scope {
            vars: FxHashMap::default(),
            parent,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }
}

/// Runtime state of one active script function call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Index of the root scope holding the arguments.
    pub root: usize,
    /// Innermost scope currently in effect.
    pub current: usize,
    /// Frame of the calling script function, if any.
    pub caller: Option<usize>,
    /// Height of the value stack when the frame was entered.
    pub value_base: usize,
}

/// The scope stack and the call stack of one interpreter run.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    scopes: Vec<Scope<'a>>,
    frames: Vec<CallFrame>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Environment {
            scopes: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Number of active call frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    // ===== Frames =====

    /// Enter a call: a new frame with an empty root scope becomes current.
    pub fn push_frame(&mut self, value_base: usize) -> EvalResult<()> {
        self.scopes.try_reserve(1).map_err(|_| EvalError::OutOfMemory {
            what: "scope stack",
        })?;
        self.frames.try_reserve(1).map_err(|_| EvalError::OutOfMemory {
            what: "call stack",
        })?;
        let root = self.scopes.len();
        self.scopes.push(Scope::new(None));
        let caller = self.frames.len().checked_sub(1);
        self.frames.push(CallFrame {
            root,
            current: root,
            caller,
            value_base,
        });
        debug!(depth = self.frames.len(), "enter frame");
        Ok(())
    }

    /// Leave the current call, destroying every scope it still owns.
    /// Returns the left frame.
    pub fn pop_frame(&mut self) -> Option<CallFrame> {
        let frame = self.frames.pop()?;
        self.scopes.truncate(frame.root);
        debug!(depth = self.frames.len(), "leave frame");
        Some(frame)
    }

    // ===== Scopes =====

    /// Open a block scope nested in the current one.
    ///
    /// # Panics
    /// Panics when no call frame is active.
    pub fn push_scope(&mut self) -> EvalResult<()> {
        self.scopes.try_reserve(1).map_err(|_| EvalError::OutOfMemory {
            what: "scope stack",
        })?;
        let index = self.scopes.len();
        let frame = self.frame_mut();
        let parent = frame.current;
        frame.current = index;
        self.scopes.push(Scope::new(Some(parent)));
        Ok(())
    }

    /// Close the current block scope.
    ///
    /// # Panics
    /// Panics when the current scope is a frame's root scope.
    pub fn pop_scope(&mut self) {
        let frame = self.frame_mut();
        assert!(
            frame.current != frame.root,
            "attempt to close the root scope of a call frame"
        );
        let current = frame.current;
        let Some(scope) = self.scopes.pop() else {
            unreachable!("frame refers to a scope that does not exist");
        };
        debug_assert_eq!(current, self.scopes.len());
        if let Some(parent) = scope.parent {
            self.frame_mut().current = parent;
        }
    }

    // ===== Variables =====

    /// Bind `name` in the current scope, replacing an existing binding.
    pub fn define(&mut self, name: &'a str, value: Value) {
        let current = self.frame_mut().current;
        self.scopes[current].vars.insert(name, Variable { value });
    }

    /// Resolve `name` from the current scope outward to the frame's root.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut scope = Some(self.frames.last()?.current);
        while let Some(index) = scope {
            let s = &self.scopes[index];
            if let Some(var) = s.get(name) {
                return Some(&var.value);
            }
            scope = s.parent;
        }
        None
    }

    fn frame_mut(&mut self) -> &mut CallFrame {
        let Some(frame) = self.frames.last_mut() else {
            panic!("no active call frame");
        };
        frame
    }
}
