//! Recursive-descent parser for VDScript.
//!
//! One function per grammar level, reading from a [`Tokenizer`] and
//! allocating nodes into a caller-owned [`AstArena`]. The parser yields one
//! function definition at a time so the caller can register each as soon as
//! it is complete.
//!
//! Parsing aborts at the first error. Productions run through
//! [`Parser::in_error_context`], which rolls the arena back to where the
//! production started, so a failure leaves no orphaned nodes behind.

mod error;
mod grammar;

#[cfg(test)]
mod tests;

pub use error::{ErrorContext, ParseError, ParseResult};

use vds_ir::{AstArena, Checkpoint, FunctionId, Keyword, Operator, SourcePos, Token, TokenKind};
use vds_lexer::Tokenizer;
use vds_stack::ensure_sufficient_stack;

/// Parser state.
pub struct Parser<'src, 'a> {
    tokenizer: Tokenizer<'src>,
    arena: &'a mut AstArena,
}

impl<'src, 'a> Parser<'src, 'a> {
    pub fn new(source: &'src str, arena: &'a mut AstArena) -> Self {
        Parser {
            tokenizer: Tokenizer::new(source),
            arena,
        }
    }

    /// Whether all input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.tokenizer.is_eos()
    }

    /// Parse the next top-level function definition.
    pub fn parse_function(&mut self) -> ParseResult<FunctionId> {
        self.parse_function_def()
    }

    /// Read-only view of the arena being filled.
    pub fn arena(&self) -> &AstArena {
        self.arena
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.arena.checkpoint()
    }

    /// Discard nodes allocated since `checkpoint`, e.g. a function whose
    /// name turned out to be taken.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.arena.rollback(checkpoint);
    }

    // Tokenizer delegation

    #[inline]
    fn current(&self) -> &Token<'src> {
        self.tokenizer.current_token()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind<'src> {
        self.tokenizer.current_token().kind
    }

    #[inline]
    fn current_pos(&self) -> SourcePos {
        self.tokenizer.current_token().pos
    }

    #[inline]
    fn advance(&mut self) {
        self.tokenizer.consume();
    }

    #[inline]
    fn check_punct(&self, c: char) -> bool {
        self.tokenizer.is_punctuator(c)
    }

    #[inline]
    fn eat_punct(&mut self, c: char) -> bool {
        self.tokenizer.skip_if_punctuator(c)
    }

    #[inline]
    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.tokenizer.skip_if_keyword(keyword)
    }

    #[inline]
    fn eat_operator(&mut self, op: Operator) -> bool {
        self.tokenizer.skip_if_operator(op)
    }

    /// Consume punctuator `c` or fail with "expected `c`".
    fn expect_punct(&mut self, c: char) -> ParseResult<()> {
        if self.eat_punct(c) {
            Ok(())
        } else {
            Err(ParseError::expected(&format!("`{c}`"), self.current()))
        }
    }

    /// Consume keyword `keyword` or fail.
    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(ParseError::expected(
                &format!("keyword `{}`", keyword.as_str()),
                self.current(),
            ))
        }
    }

    /// Run a production with stack growth and rollback on failure.
    ///
    /// On error the arena is truncated to its state on entry and the error
    /// is tagged with `context` unless an inner production already did.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        production: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let checkpoint = self.arena.checkpoint();
        match ensure_sufficient_stack(|| production(self)) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.arena.rollback(checkpoint);
                Err(err.in_context(context))
            }
        }
    }

    /// Like [`Self::in_error_context`] for productions with no context of
    /// their own.
    fn guarded<T>(&mut self, production: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.arena.checkpoint();
        let result = ensure_sufficient_stack(|| production(self));
        if result.is_err() {
            self.arena.rollback(checkpoint);
        }
        result
    }
}

/// Parse a whole source into `arena`, returning every function in order.
///
/// Functions parsed before an error stay in the arena; the error is
/// returned together with them.
pub fn parse_all(
    source: &str,
    arena: &mut AstArena,
) -> (Vec<FunctionId>, Option<ParseError>) {
    let mut parser = Parser::new(source, arena);
    let mut functions = Vec::new();
    while !parser.is_at_end() {
        match parser.parse_function() {
            Ok(id) => functions.push(id),
            Err(err) => return (functions, Some(err)),
        }
    }
    (functions, None)
}
