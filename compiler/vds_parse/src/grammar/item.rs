//! Top-level function definitions.

use tracing::{debug, trace};
use vds_ir::{Function, FunctionArg, FunctionId, IdentId, TokenKind};

use crate::{ErrorContext, ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    /// `ret_type name ( [type name [, type name]*] ) { body }`
    ///
    /// A trailing comma before `)` is accepted.
    pub(crate) fn parse_function_def(&mut self) -> ParseResult<FunctionId> {
        self.in_error_context(ErrorContext::FunctionDef, |p| {
            let pos = p.current_pos();
            let ret_type = p.parse_ident()?;
            let name = p.parse_ident()?;
            trace!(name = p.arena.ident_name(name), "function");

            p.expect_punct('(')?;
            let args = p.in_error_context(ErrorContext::ArgumentList, |p| {
                let mut args = Vec::new();
                while !p.eat_punct(')') {
                    let arg_pos = p.current_pos();
                    let ty = p.parse_ident()?;
                    let name = p.parse_ident()?;
                    args.push(FunctionArg {
                        ty,
                        name,
                        pos: arg_pos.merge(p.arena.get_ident(name).pos),
                    });
                    if !p.eat_punct(',') && !p.check_punct(')') {
                        return Err(ParseError::expected("`,` or `)`", p.current()));
                    }
                }
                Ok(args)
            })?;
            let args = p.arena.alloc_args(args);

            let body = p.parse_compound()?;
            let id = p.arena.alloc_function(Function {
                ret_type,
                name,
                args,
                body,
                pos,
            });
            debug!(
                name = p.arena.function_name(id),
                args = args.len(),
                "parsed function"
            );
            Ok(id)
        })
    }

    /// An identifier token, turned into an identifier node.
    pub(crate) fn parse_ident(&mut self) -> ParseResult<IdentId> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let pos = self.current_pos();
                self.advance();
                Ok(self.arena.alloc_ident(name, pos))
            }
            _ => Err(ParseError::expected_identifier(self.current())),
        }
    }
}
