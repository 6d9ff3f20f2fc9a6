//! Interpreter limits.

/// Settings for one script context's calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested script function frames. `None` leaves
    /// recursion bounded only by memory.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }
}
