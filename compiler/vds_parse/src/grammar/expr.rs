//! Expression parsing.
//!
//! Precedence, lowest to highest:
//! assignment, `||`, `&&`, `|`, `^`, `&`, equality, relational, shift,
//! additive, multiplicative, cast, unary, postfix, primary.
//!
//! Every binary level loops and builds left-leaning nodes. Assignment loops
//! the same way with a logical-or right operand, so `a = b = c` groups as
//! `(a = b) = c`.

use tracing::trace;
use vds_ir::{
    AssignOp, BinaryOp, Expr, ExprId, ExprKind, Keyword, Operator, PostfixOp, SourcePos, TokenKind,
    UnaryOp,
};

use crate::{ErrorContext, ParseError, ParseResult, Parser};

impl Parser<'_, '_> {
    /// Parse an expression: a comma-separated list of assignments.
    ///
    /// An assignment-list node is only built when a comma is present.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<ExprId> {
        self.guarded(|p| {
            let first = p.parse_assignment()?;
            if !p.check_punct(',') {
                return Ok(first);
            }

            let mut items = vec![first];
            while p.eat_punct(',') {
                items.push(p.parse_assignment()?);
            }
            let pos = p.expr_pos(first).merge(p.expr_pos(items[items.len() - 1]));
            let list = p.arena.alloc_expr_list(items);
            Ok(p.alloc_expr(ExprKind::AssignmentList(list), pos))
        })
    }

    /// Parse `target op value` chains, left-leaning.
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<ExprId> {
        self.guarded(|p| {
            let mut left = p.parse_logical_or()?;
            while let Some(op) = p.match_assign_op() {
                p.advance();
                let right = p.parse_logical_or()?;
                left = p.binary_like(left, right, |target, value| ExprKind::Assign {
                    op,
                    target,
                    value,
                });
            }
            Ok(left)
        })
    }

    /// Parse `||`. Also the operand of `case` labels.
    pub(crate) fn parse_logical_or(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_logical_and()?;
        while self.eat_operator(Operator::OrOr) {
            let right = self.parse_logical_and()?;
            left = self.binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_bitwise_or()?;
        while self.eat_operator(Operator::AndAnd) {
            let right = self.parse_bitwise_or()?;
            left = self.binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_bitwise_or(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_bitwise_xor()?;
        while self.eat_operator(Operator::Pipe) {
            let right = self.parse_bitwise_xor()?;
            left = self.binary(BinaryOp::BitOr, left, right);
        }
        Ok(left)
    }

    fn parse_bitwise_xor(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_bitwise_and()?;
        while self.eat_operator(Operator::Caret) {
            let right = self.parse_bitwise_and()?;
            left = self.binary(BinaryOp::BitXor, left, right);
        }
        Ok(left)
    }

    fn parse_bitwise_and(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_equality()?;
        while self.eat_operator(Operator::Amp) {
            let right = self.parse_equality()?;
            left = self.binary(BinaryOp::BitAnd, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_relational()?;
        while let Some(op) = self.match_binary_op(&[
            (Operator::EqEq, BinaryOp::Eq),
            (Operator::NotEq, BinaryOp::NotEq),
        ]) {
            self.advance();
            let right = self.parse_relational()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_shift()?;
        while let Some(op) = self.match_binary_op(&[
            (Operator::Lt, BinaryOp::Lt),
            (Operator::Gt, BinaryOp::Gt),
            (Operator::LtEq, BinaryOp::LtEq),
            (Operator::GtEq, BinaryOp::GtEq),
        ]) {
            self.advance();
            let right = self.parse_shift()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_shift(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_additive()?;
        while let Some(op) =
            self.match_binary_op(&[(Operator::Shl, BinaryOp::Shl), (Operator::Shr, BinaryOp::Shr)])
        {
            self.advance();
            let right = self.parse_additive()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_binary_op(&[
            (Operator::Plus, BinaryOp::Add),
            (Operator::Minus, BinaryOp::Sub),
        ]) {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<ExprId> {
        let mut left = self.parse_cast()?;
        while let Some(op) = self.match_binary_op(&[
            (Operator::Star, BinaryOp::Mul),
            (Operator::Slash, BinaryOp::Div),
            (Operator::Percent, BinaryOp::Mod),
        ]) {
            self.advance();
            let right = self.parse_cast()?;
            left = self.binary(op, left, right);
        }
        Ok(left)
    }

    /// `(type) expr` is not recognized yet: a parenthesized identifier is
    /// indistinguishable from a grouped expression without type
    /// information, so this level goes straight to unary expressions.
    fn parse_cast(&mut self) -> ParseResult<ExprId> {
        self.parse_unary()
    }

    /// Prefix operators. `++`/`--` chain onto another unary expression;
    /// the others take a cast expression as operand.
    fn parse_unary(&mut self) -> ParseResult<ExprId> {
        self.guarded(|p| {
            let mut prefixes: Vec<(UnaryOp, SourcePos)> = Vec::new();
            let operand = loop {
                let pos = p.current_pos();
                if p.eat_operator(Operator::PlusPlus) {
                    prefixes.push((UnaryOp::Increment, pos));
                } else if p.eat_operator(Operator::MinusMinus) {
                    prefixes.push((UnaryOp::Decrement, pos));
                } else if let Some(op) = p.match_unary_op() {
                    p.advance();
                    prefixes.push((op, pos));
                    break p.parse_cast()?;
                } else {
                    break p.parse_postfix()?;
                }
            };

            let mut expr = operand;
            for (op, pos) in prefixes.into_iter().rev() {
                let pos = pos.merge(p.expr_pos(expr));
                expr = p.alloc_expr(ExprKind::Unary { op, operand: expr }, pos);
            }
            Ok(expr)
        })
    }

    /// Primary expression followed by any number of `++`, `--`, `->ident`,
    /// `.ident` and `(args)`.
    fn parse_postfix(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.parse_primary()?;
        loop {
            let start = self.expr_pos(expr);
            if self.eat_operator(Operator::PlusPlus) {
                expr = self.alloc_expr(
                    ExprKind::Postfix {
                        op: PostfixOp::Increment,
                        operand: expr,
                    },
                    start,
                );
            } else if self.eat_operator(Operator::MinusMinus) {
                expr = self.alloc_expr(
                    ExprKind::Postfix {
                        op: PostfixOp::Decrement,
                        operand: expr,
                    },
                    start,
                );
            } else if self.eat_operator(Operator::Arrow) {
                let member = self.parse_ident()?;
                let pos = start.merge(self.arena.get_ident(member).pos);
                expr = self.alloc_expr(ExprKind::Arrow { base: expr, member }, pos);
            } else if self.eat_operator(Operator::Dot) {
                let member = self.parse_ident()?;
                let pos = start.merge(self.arena.get_ident(member).pos);
                expr = self.alloc_expr(ExprKind::Dot { base: expr, member }, pos);
            } else if self.check_punct('(') {
                expr = self.parse_call(expr)?;
            } else {
                return Ok(expr);
            }
        }
    }

    /// `callee ( [assignment [, assignment]*] )`
    fn parse_call(&mut self, callee: ExprId) -> ParseResult<ExprId> {
        self.in_error_context(ErrorContext::CallArguments, |p| {
            p.expect_punct('(')?;
            let mut args = Vec::new();
            if !p.check_punct(')') {
                loop {
                    args.push(p.parse_assignment()?);
                    if !p.eat_punct(',') {
                        break;
                    }
                }
            }
            let end = p.current_pos();
            p.expect_punct(')')?;
            let pos = p.expr_pos(callee).merge(end);
            let args = p.arena.alloc_expr_list(args);
            trace!(args = args.len(), "call");
            Ok(p.alloc_expr(ExprKind::Call { callee, args }, pos))
        })
    }

    /// `( expr )`, identifier, number, string, `true` or `false`.
    fn parse_primary(&mut self) -> ParseResult<ExprId> {
        let pos = self.current_pos();
        match self.current_kind() {
            TokenKind::Punctuator('(') => self.in_error_context(ErrorContext::Parenthesized, |p| {
                p.advance();
                let inner = p.parse_expression()?;
                p.expect_punct(')')?;
                Ok(inner)
            }),
            TokenKind::Ident(_) => {
                let ident = self.parse_ident()?;
                Ok(self.alloc_expr(ExprKind::Ident(ident), pos))
            }
            TokenKind::NumConst(value) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::NumConst(value), pos))
            }
            TokenKind::StringConst(text) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::StringConst(text.into()), pos))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::Bool(true), pos))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::Bool(false), pos))
            }
            _ => Err(ParseError::expected_expression(self.current())),
        }
    }

    // Helpers

    #[inline]
    fn alloc_expr(&mut self, kind: ExprKind, pos: SourcePos) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, pos))
    }

    #[inline]
    fn expr_pos(&self, id: ExprId) -> SourcePos {
        self.arena.get_expr(id).pos
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.binary_like(left, right, |left, right| ExprKind::Binary { op, left, right })
    }

    fn binary_like(
        &mut self,
        left: ExprId,
        right: ExprId,
        build: impl FnOnce(ExprId, ExprId) -> ExprKind,
    ) -> ExprId {
        let pos = self.expr_pos(left).merge(self.expr_pos(right));
        self.alloc_expr(build(left, right), pos)
    }

    /// First entry of `table` whose operator is the current token.
    fn match_binary_op(&self, table: &[(Operator, BinaryOp)]) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Operator(current) => table
                .iter()
                .find(|(op, _)| *op == current)
                .map(|&(_, binary)| binary),
            _ => None,
        }
    }

    fn match_assign_op(&self) -> Option<AssignOp> {
        let TokenKind::Operator(op) = self.current_kind() else {
            return None;
        };
        match op {
            Operator::Assign => Some(AssignOp::Assign),
            Operator::MulAssign => Some(AssignOp::Mul),
            Operator::DivAssign => Some(AssignOp::Div),
            Operator::ModAssign => Some(AssignOp::Mod),
            Operator::AddAssign => Some(AssignOp::Add),
            Operator::SubAssign => Some(AssignOp::Sub),
            Operator::ShlAssign => Some(AssignOp::Shl),
            Operator::ShrAssign => Some(AssignOp::Shr),
            Operator::AndAssign => Some(AssignOp::BitAnd),
            Operator::XorAssign => Some(AssignOp::BitXor),
            Operator::OrAssign => Some(AssignOp::BitOr),
            _ => None,
        }
    }

    /// Prefix operators that take a cast-expression operand.
    fn match_unary_op(&self) -> Option<UnaryOp> {
        let TokenKind::Operator(op) = self.current_kind() else {
            return None;
        };
        match op {
            Operator::Plus => Some(UnaryOp::Plus),
            Operator::Minus => Some(UnaryOp::Neg),
            Operator::Tilde => Some(UnaryOp::BitNot),
            Operator::Bang => Some(UnaryOp::Not),
            Operator::Amp => Some(UnaryOp::AddrOf),
            Operator::Star => Some(UnaryOp::Deref),
            _ => None,
        }
    }
}
