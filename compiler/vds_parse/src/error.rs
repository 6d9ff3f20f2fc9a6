//! Parse error types.
//!
//! Parsing stops at the first error. A [`ParseError`] carries the error
//! code, a message naming what was expected and what was found, the
//! position of the offending token, and the construct being parsed.

use vds_ir::{ErrorCode, SourcePos, Token, TokenKind};

/// The construct being parsed when an error occurred, for
/// "while parsing a for statement" style messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    FunctionDef,
    ArgumentList,
    Block,
    IfStatement,
    SwitchStatement,
    WhileLoop,
    DoWhileLoop,
    ForLoop,
    ReturnStatement,
    CaseLabel,
    DefaultLabel,
    ExpressionStatement,
    CallArguments,
    Parenthesized,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::FunctionDef => "a function definition",
            ErrorContext::ArgumentList => "a function's argument list",
            ErrorContext::Block => "a block",
            ErrorContext::IfStatement => "an if statement",
            ErrorContext::SwitchStatement => "a switch statement",
            ErrorContext::WhileLoop => "a while loop",
            ErrorContext::DoWhileLoop => "a do-while loop",
            ErrorContext::ForLoop => "a for loop",
            ErrorContext::ReturnStatement => "a return statement",
            ErrorContext::CaseLabel => "a case label",
            ErrorContext::DefaultLabel => "a default label",
            ErrorContext::ExpressionStatement => "an expression statement",
            ErrorContext::CallArguments => "call arguments",
            ErrorContext::Parenthesized => "a parenthesized expression",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pos}: error[{code}]: {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub pos: SourcePos,
    /// Innermost construct that was being parsed.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, pos: SourcePos) -> Self {
        ParseError {
            code,
            message: message.into(),
            pos,
            context: None,
        }
    }

    /// `expected <what>, found <token>`.
    ///
    /// An invalid character is reported as such rather than as a mismatch.
    pub fn expected(what: &str, found: &Token<'_>) -> Self {
        if let TokenKind::Invalid(c) = found.kind {
            return ParseError::new(
                ErrorCode::E1005,
                format!("invalid character {c:?} in source"),
                found.pos,
            );
        }
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {what}, found {}", found.kind),
            found.pos,
        )
    }

    pub fn expected_expression(found: &Token<'_>) -> Self {
        let mut err = ParseError::expected("expression", found);
        if err.code == ErrorCode::E1001 {
            err.code = ErrorCode::E1002;
        }
        err
    }

    pub fn expected_identifier(found: &Token<'_>) -> Self {
        let mut err = ParseError::expected("identifier", found);
        if err.code == ErrorCode::E1001 {
            err.code = ErrorCode::E1003;
        }
        err
    }

    pub fn unsupported_declaration(pos: SourcePos) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            "variable declarations are not supported",
            pos,
        )
    }

    /// Record the enclosing construct unless a more specific one is set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Message with the enclosing construct appended, for reports.
    pub fn full_message(&self) -> String {
        match self.context {
            Some(context) => format!("{} (while parsing {})", self.message, context.description()),
            None => self.message.clone(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
