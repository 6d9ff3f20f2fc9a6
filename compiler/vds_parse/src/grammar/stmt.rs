//! Statement parsing.

use tracing::trace;
use vds_ir::{ExprId, Keyword, LoopKind, SourcePos, Stmt, StmtId, StmtKind, TokenClass, TokenKind};

use crate::{ErrorContext, ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    /// `{ stmts* }`
    ///
    /// Two identifiers in a row start a declaration (`type name`), which is
    /// not supported and fails the block.
    pub(crate) fn parse_compound(&mut self) -> ParseResult<StmtId> {
        self.in_error_context(ErrorContext::Block, |p| {
            let start = p.current_pos();
            p.expect_punct('{')?;
            let mut stmts = Vec::new();
            loop {
                let pos = p.current_pos();
                if p.eat_punct('}') {
                    let list = p.arena.alloc_stmt_list(stmts);
                    return Ok(p.alloc_stmt(StmtKind::Compound(list), start.merge(pos)));
                }
                if p.is_at_end() {
                    return Err(ParseError::expected("`}`", p.current()));
                }
                if p.current().class() == TokenClass::Identifier
                    && p.tokenizer.peek_next_class() == TokenClass::Identifier
                {
                    return Err(ParseError::unsupported_declaration(pos));
                }
                stmts.push(p.parse_statement()?);
            }
        })
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<StmtId> {
        let pos = self.current_pos();
        match self.current_kind() {
            TokenKind::Punctuator('{') => self.parse_compound(),
            TokenKind::Keyword(Keyword::Default) => {
                self.in_error_context(ErrorContext::DefaultLabel, |p| {
                    p.advance();
                    p.expect_punct(':')?;
                    let body = p.parse_statement()?;
                    Ok(p.alloc_stmt(StmtKind::Default(body), pos))
                })
            }
            TokenKind::Keyword(Keyword::Case) => self.in_error_context(ErrorContext::CaseLabel, |p| {
                p.advance();
                let value = p.parse_logical_or()?;
                p.expect_punct(':')?;
                let body = p.parse_statement()?;
                Ok(p.alloc_stmt(StmtKind::Case { value, body }, pos))
            }),
            TokenKind::Keyword(Keyword::If) => self.in_error_context(ErrorContext::IfStatement, |p| {
                p.advance();
                let cond = p.parse_condition()?;
                let then_branch = p.parse_statement()?;
                let else_branch = if p.eat_keyword(Keyword::Else) {
                    Some(p.parse_statement()?)
                } else {
                    None
                };
                Ok(p.alloc_stmt(
                    StmtKind::If {
                        cond,
                        then_branch,
                        else_branch,
                    },
                    pos,
                ))
            }),
            TokenKind::Keyword(Keyword::Switch) => {
                self.in_error_context(ErrorContext::SwitchStatement, |p| {
                    p.advance();
                    let cond = p.parse_condition()?;
                    let body = p.parse_statement()?;
                    Ok(p.alloc_stmt(StmtKind::Switch { cond, body }, pos))
                })
            }
            TokenKind::Keyword(Keyword::While) => self.in_error_context(ErrorContext::WhileLoop, |p| {
                p.advance();
                let cond = p.parse_condition()?;
                let body = p.parse_statement()?;
                Ok(p.alloc_stmt(
                    StmtKind::While {
                        kind: LoopKind::While,
                        cond,
                        body,
                    },
                    pos,
                ))
            }),
            TokenKind::Keyword(Keyword::Do) => self.in_error_context(ErrorContext::DoWhileLoop, |p| {
                p.advance();
                let body = p.parse_statement()?;
                p.expect_keyword(Keyword::While)?;
                let cond = p.parse_condition()?;
                p.expect_punct(';')?;
                Ok(p.alloc_stmt(
                    StmtKind::While {
                        kind: LoopKind::DoWhile,
                        cond,
                        body,
                    },
                    pos,
                ))
            }),
            TokenKind::Keyword(Keyword::For) => self.in_error_context(ErrorContext::ForLoop, |p| {
                p.advance();
                p.expect_punct('(')?;
                let init = p.parse_expression()?;
                p.expect_punct(';')?;
                let cond = p.parse_expression()?;
                p.expect_punct(';')?;
                let step = p.parse_expression()?;
                p.expect_punct(')')?;
                let body = p.parse_statement()?;
                Ok(p.alloc_stmt(
                    StmtKind::For {
                        init,
                        cond,
                        step,
                        body,
                    },
                    pos,
                ))
            }),
            TokenKind::Keyword(Keyword::Continue) => {
                self.advance();
                self.expect_punct(';')?;
                Ok(self.alloc_stmt(StmtKind::Continue, pos))
            }
            TokenKind::Keyword(Keyword::Break) => {
                self.advance();
                self.expect_punct(';')?;
                Ok(self.alloc_stmt(StmtKind::Break, pos))
            }
            TokenKind::Keyword(Keyword::Return) => {
                self.in_error_context(ErrorContext::ReturnStatement, |p| {
                    p.advance();
                    let value = if p.eat_punct(';') {
                        None
                    } else {
                        let value = p.parse_expression()?;
                        p.expect_punct(';')?;
                        Some(value)
                    };
                    Ok(p.alloc_stmt(StmtKind::Return(value), pos))
                })
            }
            _ => self.in_error_context(ErrorContext::ExpressionStatement, |p| {
                let expr = p.parse_expression()?;
                p.expect_punct(';')?;
                Ok(p.alloc_stmt(StmtKind::Expr(expr), pos))
            }),
        }
    }

    /// `( expr )` after `if`, `switch` and `while`.
    fn parse_condition(&mut self) -> ParseResult<ExprId> {
        self.expect_punct('(')?;
        let cond = self.parse_expression()?;
        self.expect_punct(')')?;
        Ok(cond)
    }

    fn alloc_stmt(&mut self, kind: StmtKind, pos: SourcePos) -> StmtId {
        trace!(kind = kind.describe(), line = pos.line, "statement");
        self.arena.alloc_stmt(Stmt::new(kind, pos))
    }
}
